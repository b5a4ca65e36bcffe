//! # Domain Types
//!
//! Input types for the indicator engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BusinessParameters                                 │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │  ServiceLine    │   │ FixedChargeLine │   │   InvestmentLine    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  kind           │   │  charge         │   │  item               │   │
//! │  │  price / cost   │   │  amount         │   │  amount             │   │
//! │  │  daily_volume   │   └─────────────────┘   │  allocation         │   │
//! │  │  scales_with_   │                         │  (per-pitch|shared) │   │
//! │  │  pitch_count    │                         └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  + operating_days_per_month, pitch_count, partner_count,               │
//! │    tax_rate_percent, post_tax_deduction_percent                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Closed Identifier Sets
//! Services, charges and investment items are enums, not free-form names.
//! Whether a service scales with the pitch count (and whether an investment
//! is bought once per pitch) is an explicit field with a per-kind default,
//! so the engine never branches on names.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Services
// =============================================================================

/// A revenue-generating service sold at the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Pitch booked by the hour.
    HourlyRental,
    /// Monthly subscription slots for regular teams.
    Subscription,
    /// Tournament entries.
    Tournament,
    /// Football academy sessions for kids.
    Academy,
    /// Balls, bibs and shoes rented with a booking.
    EquipmentRental,
    /// Drinks sold at the snack bar.
    Drinks,
    /// Snacks sold at the snack bar.
    Snacks,
}

impl ServiceKind {
    /// Whether volume for this kind grows with the number of pitches.
    ///
    /// Pitch-bound throughput (bookings, subscriptions, tournaments, academy
    /// sessions, equipment handed out per booking) scales. The snack bar is a
    /// single counter regardless of how many pitches exist.
    pub const fn default_scales_with_pitch_count(&self) -> bool {
        !matches!(self, ServiceKind::Drinks | ServiceKind::Snacks)
    }

    /// Stable snake_case key, as used in scenario files and field paths.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::HourlyRental => "hourly_rental",
            ServiceKind::Subscription => "subscription",
            ServiceKind::Tournament => "tournament",
            ServiceKind::Academy => "academy",
            ServiceKind::EquipmentRental => "equipment_rental",
            ServiceKind::Drinks => "drinks",
            ServiceKind::Snacks => "snacks",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceKind::HourlyRental => "Hourly rental",
            ServiceKind::Subscription => "Subscription",
            ServiceKind::Tournament => "Tournament",
            ServiceKind::Academy => "Academy",
            ServiceKind::EquipmentRental => "Equipment rental",
            ServiceKind::Drinks => "Drinks",
            ServiceKind::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One service with its unit economics.
///
/// ## Monthly Volume
/// `daily_volume` is orders per day *per pitch* when
/// `scales_with_pitch_count` is true, and per venue otherwise.
/// It is a real number (3.5 tournament entries a day is fine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ServiceLineRecord")]
pub struct ServiceLine {
    pub kind: ServiceKind,

    /// Price charged per order, in cents.
    #[serde(rename = "price_cents")]
    pub price: Money,

    /// Variable cost per order, in cents.
    #[serde(rename = "cost_cents")]
    pub cost: Money,

    /// Orders per operating day.
    pub daily_volume: f64,

    /// Multiply revenue and cost by `pitch_count`.
    pub scales_with_pitch_count: bool,
}

impl ServiceLine {
    /// Creates a service line using the kind's default scaling.
    pub fn new(kind: ServiceKind, price: Money, cost: Money, daily_volume: f64) -> Self {
        ServiceLine {
            kind,
            price,
            cost,
            daily_volume,
            scales_with_pitch_count: kind.default_scales_with_pitch_count(),
        }
    }

    /// Overrides the scaling flag.
    pub fn with_scaling(mut self, scales_with_pitch_count: bool) -> Self {
        self.scales_with_pitch_count = scales_with_pitch_count;
        self
    }
}

/// Scenario-file shape of a [`ServiceLine`]: the scaling flag may be omitted.
#[derive(Debug, Deserialize)]
struct ServiceLineRecord {
    kind: ServiceKind,
    price_cents: Money,
    cost_cents: Money,
    daily_volume: f64,
    #[serde(default)]
    scales_with_pitch_count: Option<bool>,
}

impl From<ServiceLineRecord> for ServiceLine {
    fn from(record: ServiceLineRecord) -> Self {
        let line = ServiceLine::new(
            record.kind,
            record.price_cents,
            record.cost_cents,
            record.daily_volume,
        );
        match record.scales_with_pitch_count {
            Some(flag) => line.with_scaling(flag),
            None => line,
        }
    }
}

// =============================================================================
// Fixed Charges
// =============================================================================

/// A recurring monthly charge that does not depend on volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedCharge {
    Rent,
    Payroll,
    Electricity,
    Water,
    Maintenance,
    Insurance,
    Marketing,
    Security,
    Miscellaneous,
}

impl FixedCharge {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FixedCharge::Rent => "rent",
            FixedCharge::Payroll => "payroll",
            FixedCharge::Electricity => "electricity",
            FixedCharge::Water => "water",
            FixedCharge::Maintenance => "maintenance",
            FixedCharge::Insurance => "insurance",
            FixedCharge::Marketing => "marketing",
            FixedCharge::Security => "security",
            FixedCharge::Miscellaneous => "miscellaneous",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            FixedCharge::Rent => "Rent",
            FixedCharge::Payroll => "Payroll",
            FixedCharge::Electricity => "Electricity",
            FixedCharge::Water => "Water",
            FixedCharge::Maintenance => "Maintenance",
            FixedCharge::Insurance => "Insurance",
            FixedCharge::Marketing => "Marketing",
            FixedCharge::Security => "Security",
            FixedCharge::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for FixedCharge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One monthly fixed charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedChargeLine {
    pub charge: FixedCharge,
    #[serde(rename = "amount_cents")]
    pub amount: Money,
}

impl FixedChargeLine {
    pub fn new(charge: FixedCharge, amount: Money) -> Self {
        FixedChargeLine { charge, amount }
    }
}

// =============================================================================
// Investment
// =============================================================================

/// How an investment item enters the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentAllocation {
    /// Bought once for every pitch (multiplied by `pitch_count`).
    PerPitch,
    /// Bought once for the whole venue.
    Shared,
}

impl fmt::Display for InvestmentAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestmentAllocation::PerPitch => write!(f, "per pitch"),
            InvestmentAllocation::Shared => write!(f, "shared"),
        }
    }
}

/// A one-time launch expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentItem {
    SyntheticTurf,
    Lighting,
    Fencing,
    GoalsAndNets,
    ChangingRooms,
    Construction,
    Furniture,
    SportsEquipment,
    Licensing,
    WorkingCapital,
}

impl InvestmentItem {
    /// Turf, lighting, fencing and goals are installed on every pitch;
    /// everything else is bought once.
    pub const fn default_allocation(&self) -> InvestmentAllocation {
        match self {
            InvestmentItem::SyntheticTurf
            | InvestmentItem::Lighting
            | InvestmentItem::Fencing
            | InvestmentItem::GoalsAndNets => InvestmentAllocation::PerPitch,
            _ => InvestmentAllocation::Shared,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            InvestmentItem::SyntheticTurf => "synthetic_turf",
            InvestmentItem::Lighting => "lighting",
            InvestmentItem::Fencing => "fencing",
            InvestmentItem::GoalsAndNets => "goals_and_nets",
            InvestmentItem::ChangingRooms => "changing_rooms",
            InvestmentItem::Construction => "construction",
            InvestmentItem::Furniture => "furniture",
            InvestmentItem::SportsEquipment => "sports_equipment",
            InvestmentItem::Licensing => "licensing",
            InvestmentItem::WorkingCapital => "working_capital",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            InvestmentItem::SyntheticTurf => "Synthetic turf",
            InvestmentItem::Lighting => "Lighting",
            InvestmentItem::Fencing => "Fencing",
            InvestmentItem::GoalsAndNets => "Goals and nets",
            InvestmentItem::ChangingRooms => "Changing rooms",
            InvestmentItem::Construction => "Construction",
            InvestmentItem::Furniture => "Furniture",
            InvestmentItem::SportsEquipment => "Sports equipment",
            InvestmentItem::Licensing => "Licensing",
            InvestmentItem::WorkingCapital => "Working capital",
        }
    }
}

impl fmt::Display for InvestmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One investment item with its allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InvestmentLineRecord")]
pub struct InvestmentLine {
    pub item: InvestmentItem,
    #[serde(rename = "amount_cents")]
    pub amount: Money,
    pub allocation: InvestmentAllocation,
}

impl InvestmentLine {
    /// Creates an investment line using the item's default allocation.
    pub fn new(item: InvestmentItem, amount: Money) -> Self {
        InvestmentLine {
            item,
            amount,
            allocation: item.default_allocation(),
        }
    }

    pub fn with_allocation(mut self, allocation: InvestmentAllocation) -> Self {
        self.allocation = allocation;
        self
    }
}

#[derive(Debug, Deserialize)]
struct InvestmentLineRecord {
    item: InvestmentItem,
    amount_cents: Money,
    #[serde(default)]
    allocation: Option<InvestmentAllocation>,
}

impl From<InvestmentLineRecord> for InvestmentLine {
    fn from(record: InvestmentLineRecord) -> Self {
        let line = InvestmentLine::new(record.item, record.amount_cents);
        match record.allocation {
            Some(allocation) => line.with_allocation(allocation),
            None => line,
        }
    }
}

// =============================================================================
// Business Parameters
// =============================================================================

/// Everything the engine needs, owned by the caller.
///
/// ## Lifecycle
/// The caller builds (or loads) a value, validates it by calling
/// [`compute`](crate::compute), and edits its own copy between calls.
/// The engine never keeps a reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessParameters {
    /// Services in presentation order. Each kind at most once.
    #[serde(default)]
    pub services: Vec<ServiceLine>,

    /// 1..=31
    pub operating_days_per_month: u32,

    /// Number of physical pitches, at least one.
    pub pitch_count: u32,

    /// Tax on positive gross profit, 0..=100.
    pub tax_rate_percent: f64,

    /// Partners sharing the net profit, at least one.
    pub partner_count: u32,

    #[serde(default)]
    pub monthly_fixed_charges: Vec<FixedChargeLine>,

    #[serde(default)]
    pub investment_items: Vec<InvestmentLine>,

    /// Optional "improvement charge" withheld from positive after-tax
    /// profit, 0..=100. Zero disables it.
    #[serde(default)]
    pub post_tax_deduction_percent: f64,
}

impl Default for BusinessParameters {
    /// An empty venue: one pitch, one partner, 26 operating days, no tax.
    fn default() -> Self {
        BusinessParameters {
            services: Vec::new(),
            operating_days_per_month: 26,
            pitch_count: 1,
            tax_rate_percent: 0.0,
            partner_count: 1,
            monthly_fixed_charges: Vec::new(),
            investment_items: Vec::new(),
            post_tax_deduction_percent: 0.0,
        }
    }
}

impl BusinessParameters {
    /// Returns a copy with only the pitch count changed.
    pub fn with_pitch_count(&self, pitch_count: u32) -> Self {
        BusinessParameters {
            pitch_count,
            ..self.clone()
        }
    }

    /// Looks up a service line by kind.
    pub fn service(&self, kind: ServiceKind) -> Option<&ServiceLine> {
        self.services.iter().find(|line| line.kind == kind)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
