//! # Indicator Engine
//!
//! `compute` turns a [`BusinessParameters`] value into
//! [`FinancialIndicators`]. Pure, deterministic, no state between calls.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          compute(&params)                               │
//! │                                                                         │
//! │  validate_parameters ──✗──► CoreError::Validation (nothing computed)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  1. per service: price × volume × days (× pitches if it scales)        │
//! │  2. aggregates:  revenue, variable, fixed, total, gross profit         │
//! │  3. tax:         only on positive gross profit                         │
//! │  4. deduction:   optional improvement charge on positive after-tax     │
//! │  5. split:       net profit / partners                                 │
//! │  6. investment:  per-pitch × pitches + shared                          │
//! │  7. break-even:  fixed / (1 - variable / revenue)                      │
//! │  8. returns:     ROI monthly / annual, payback months                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degenerate Cases Are Results
//! | situation                         | outcome                          |
//! |-----------------------------------|----------------------------------|
//! | gross profit ≤ 0                  | tax = 0                          |
//! | no revenue                        | margin 0 %, break-even 0         |
//! | variable cost ≥ revenue           | `BreakEven::Unbounded`           |
//! | no investment or no net profit    | ROI 0 %, `Payback::NotApplicable`|
//!
//! Amounts too large for an i64 of cents are the one numeric failure:
//! [`CoreError::Overflow`].

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::indicators::{BreakEven, FinancialIndicators, Payback, ServiceBreakdown};
use crate::money::Money;
use crate::types::{BusinessParameters, InvestmentAllocation, InvestmentLine, ServiceLine};
use crate::validation::validate_parameters;
use crate::MONTHS_PER_YEAR;

/// Computes the monthly financial indicators for one parameter set.
///
/// ## Errors
/// - [`CoreError::Validation`] when a parameter is out of range. No partial
///   result is produced.
/// - [`CoreError::Overflow`] when an amount no longer fits in [`Money`]
///   (e.g. a daily volume of 1e300).
///
/// Loss-making, zero-revenue and never-paying-back scenarios are returned as
/// ordinary indicators.
///
/// ## Example
/// ```rust
/// use pitchside_core::{compute, BusinessParameters, CoreError, Payback};
///
/// // An empty venue computes fine: nothing earned, nothing to pay back.
/// let indicators = compute(&BusinessParameters::default()).unwrap();
/// assert!(indicators.gross_revenue.is_zero());
/// assert_eq!(indicators.payback, Payback::NotApplicable);
///
/// // Zero pitches is rejected before any arithmetic runs.
/// let invalid = BusinessParameters { pitch_count: 0, ..BusinessParameters::default() };
/// assert!(matches!(compute(&invalid), Err(CoreError::Validation(_))));
/// ```
pub fn compute(params: &BusinessParameters) -> CoreResult<FinancialIndicators> {
    validate_parameters(params)?;

    let indicators = derive(params)?;

    debug!(
        pitch_count = indicators.pitch_count,
        gross_revenue = %indicators.gross_revenue,
        net_profit = %indicators.net_profit,
        break_even = %indicators.break_even,
        payback = %indicators.payback,
        "indicators computed"
    );

    Ok(indicators)
}

/// Runs the pipeline on parameters that already passed validation.
///
/// Every money operation is checked; the first one that leaves the i64
/// range aborts with [`CoreError::Overflow`] naming the quantity.
fn derive(params: &BusinessParameters) -> CoreResult<FinancialIndicators> {
    // 1. Per service
    let services = params
        .services
        .iter()
        .map(|line| {
            service_breakdown(line, params.operating_days_per_month, params.pitch_count)
        })
        .collect::<CoreResult<Vec<ServiceBreakdown>>>()?;

    // 2. Aggregates
    let gross_revenue = total(services.iter().map(|s| s.revenue), "gross revenue")?;
    let variable_cost = total(services.iter().map(|s| s.cost), "variable cost")?;
    let fixed_cost = total(
        params.monthly_fixed_charges.iter().map(|charge| charge.amount),
        "fixed cost",
    )?;
    let total_cost = checked(variable_cost.checked_add(fixed_cost), "total cost")?;
    let gross_profit = checked(gross_revenue.checked_sub(total_cost), "gross profit")?;

    // 3-4. Tax and improvement charge
    let tax = positive_share(gross_profit, params.tax_rate_percent);
    let after_tax = checked(gross_profit.checked_sub(tax), "after-tax profit")?;
    let post_tax_deduction = positive_share(after_tax, params.post_tax_deduction_percent);
    let net_profit = checked(after_tax.checked_sub(post_tax_deduction), "net profit")?;

    // 5. Partner split
    let net_profit_per_partner =
        net_profit
            .split(params.partner_count)
            .ok_or(CoreError::DivisionUndefined {
                quantity: "net profit per partner",
            })?;

    // 6. Investment
    let (per_pitch_investment, shared_investment) =
        investment_subtotals(&params.investment_items)?;
    let total_investment = checked(
        per_pitch_investment
            .checked_mul(params.pitch_count)
            .and_then(|per_pitch| per_pitch.checked_add(shared_investment)),
        "total investment",
    )?;

    // 7-8. Ratios
    let (contribution_margin_percent, break_even) =
        break_even(gross_revenue, variable_cost, fixed_cost)?;
    let (roi_monthly_percent, payback) = returns(net_profit, total_investment);

    Ok(FinancialIndicators {
        pitch_count: params.pitch_count,
        partner_count: params.partner_count,
        services,
        gross_revenue,
        variable_cost,
        fixed_cost,
        total_cost,
        gross_profit,
        tax,
        post_tax_deduction,
        net_profit,
        net_profit_per_partner,
        per_pitch_investment,
        shared_investment,
        total_investment,
        contribution_margin_percent,
        break_even,
        roi_monthly_percent,
        roi_annual_percent: roi_monthly_percent * MONTHS_PER_YEAR as f64,
        payback,
    })
}

fn checked(amount: Option<Money>, quantity: &'static str) -> CoreResult<Money> {
    amount.ok_or(CoreError::Overflow { quantity })
}

fn total<I>(amounts: I, quantity: &'static str) -> CoreResult<Money>
where
    I: IntoIterator<Item = Money>,
{
    checked(Money::checked_sum(amounts), quantity)
}

/// Monthly revenue and cost for one service.
///
/// The per-pitch amount is rounded to cents first and then multiplied by the
/// integer pitch count, so revenue is exactly linear in `pitch_count`.
fn service_breakdown(
    line: &ServiceLine,
    operating_days: u32,
    pitch_count: u32,
) -> CoreResult<ServiceBreakdown> {
    let monthly_orders = line.daily_volume * operating_days as f64;
    let multiplier = if line.scales_with_pitch_count {
        pitch_count
    } else {
        1
    };

    let revenue = checked(
        line.price
            .scale(monthly_orders)
            .and_then(|per_pitch| per_pitch.checked_mul(multiplier)),
        "service revenue",
    )?;
    let cost = checked(
        line.cost
            .scale(monthly_orders)
            .and_then(|per_pitch| per_pitch.checked_mul(multiplier)),
        "service cost",
    )?;

    Ok(ServiceBreakdown {
        kind: line.kind,
        scales_with_pitch_count: line.scales_with_pitch_count,
        revenue,
        cost,
        margin: checked(revenue.checked_sub(cost), "service margin")?,
    })
}

/// `pct` percent of `amount` when `amount` is positive, zero otherwise.
///
/// Losses earn no tax credit and no improvement charge.
fn positive_share(amount: Money, pct: f64) -> Money {
    if amount.is_positive() {
        amount.percentage_of(pct)
    } else {
        Money::zero()
    }
}

/// Returns `(per_pitch_subtotal, shared_subtotal)`.
fn investment_subtotals(items: &[InvestmentLine]) -> CoreResult<(Money, Money)> {
    items
        .iter()
        .try_fold(
            (Money::zero(), Money::zero()),
            |(per_pitch, shared), line| -> CoreResult<(Money, Money)> {
                match line.allocation {
                    InvestmentAllocation::PerPitch => Ok((
                        checked(per_pitch.checked_add(line.amount), "per-pitch investment")?,
                        shared,
                    )),
                    InvestmentAllocation::Shared => Ok((
                        per_pitch,
                        checked(shared.checked_add(line.amount), "shared investment")?,
                    )),
                }
            },
        )
}

/// Returns `(contribution_margin_percent, break_even)`.
fn break_even(
    gross_revenue: Money,
    variable_cost: Money,
    fixed_cost: Money,
) -> CoreResult<(f64, BreakEven)> {
    if !gross_revenue.is_positive() {
        return Ok((0.0, BreakEven::Revenue(Money::zero())));
    }

    let ratio = 1.0 - variable_cost.as_major_f64() / gross_revenue.as_major_f64();
    if ratio <= 0.0 {
        return Ok((ratio * 100.0, BreakEven::Unbounded));
    }

    // A vanishing margin can push the break-even revenue past i64
    let revenue = checked(
        Money::from_rounded_cents(fixed_cost.cents() as f64 / ratio),
        "break-even revenue",
    )?;
    Ok((ratio * 100.0, BreakEven::Revenue(revenue)))
}

/// Returns `(roi_monthly_percent, payback)`.
fn returns(net_profit: Money, total_investment: Money) -> (f64, Payback) {
    if !total_investment.is_positive() || !net_profit.is_positive() {
        return (0.0, Payback::NotApplicable);
    }

    let profit = net_profit.as_major_f64();
    let investment = total_investment.as_major_f64();
    (profit / investment * 100.0, Payback::Months(investment / profit))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{
        FixedCharge, FixedChargeLine, InvestmentItem, ServiceKind,
    };

    const EPSILON: f64 = 1e-9;

    /// One hourly-rental service, 26 days, 1 pitch, 17,500 of fixed charges,
    /// 20% tax, 2 partners.
    fn scenario_a() -> BusinessParameters {
        BusinessParameters {
            services: vec![ServiceLine::new(
                ServiceKind::HourlyRental,
                Money::from_major(200),
                Money::from_major(50),
                8.0,
            )],
            operating_days_per_month: 26,
            pitch_count: 1,
            tax_rate_percent: 20.0,
            partner_count: 2,
            monthly_fixed_charges: vec![
                FixedChargeLine::new(FixedCharge::Rent, Money::from_major(8_000)),
                FixedChargeLine::new(FixedCharge::Payroll, Money::from_major(7_000)),
                FixedChargeLine::new(FixedCharge::Electricity, Money::from_major(1_800)),
                FixedChargeLine::new(FixedCharge::Water, Money::from_major(700)),
            ],
            investment_items: Vec::new(),
            post_tax_deduction_percent: 0.0,
        }
    }

    fn with_investment(mut params: BusinessParameters) -> BusinessParameters {
        params.investment_items = vec![
            InvestmentLine::new(InvestmentItem::SyntheticTurf, Money::from_major(100_000)),
            InvestmentLine::new(InvestmentItem::ChangingRooms, Money::from_major(20_000)),
        ];
        params
    }

    #[test]
    fn test_scenario_a_aggregates() {
        let indicators = compute(&scenario_a()).unwrap();

        assert_eq!(indicators.gross_revenue, Money::from_major(41_600));
        assert_eq!(indicators.variable_cost, Money::from_major(10_400));
        assert_eq!(indicators.fixed_cost, Money::from_major(17_500));
        assert_eq!(indicators.total_cost, Money::from_major(27_900));
        assert_eq!(indicators.gross_profit, Money::from_major(13_700));
        assert_eq!(indicators.tax, Money::from_major(2_740));
        assert_eq!(indicators.post_tax_deduction, Money::zero());
        assert_eq!(indicators.net_profit, Money::from_major(10_960));
        assert_eq!(indicators.net_profit_per_partner, Money::from_major(5_480));
        assert!(indicators.is_profitable());
    }

    #[test]
    fn test_scenario_a_service_breakdown() {
        let indicators = compute(&scenario_a()).unwrap();
        let rental = indicators.service(ServiceKind::HourlyRental).unwrap();

        assert_eq!(rental.revenue, Money::from_major(41_600));
        assert_eq!(rental.cost, Money::from_major(10_400));
        assert_eq!(rental.margin, Money::from_major(31_200));
        assert!(rental.scales_with_pitch_count);
    }

    #[test]
    fn test_scenario_a_break_even() {
        let indicators = compute(&scenario_a()).unwrap();

        // ratio = 1 - 10,400 / 41,600 = 0.75
        assert!((indicators.contribution_margin_percent - 75.0).abs() < EPSILON);
        // 17,500 / 0.75 = 23,333.33
        assert_eq!(
            indicators.break_even,
            BreakEven::Revenue(Money::from_cents(2_333_333))
        );
    }

    #[test]
    fn test_scenario_a_returns() {
        let indicators = compute(&with_investment(scenario_a())).unwrap();

        assert_eq!(indicators.per_pitch_investment, Money::from_major(100_000));
        assert_eq!(indicators.shared_investment, Money::from_major(20_000));
        assert_eq!(indicators.total_investment, Money::from_major(120_000));

        // 10,960 / 120,000 = 9.1333 %
        let expected_monthly = 10_960.0 / 120_000.0 * 100.0;
        assert!((indicators.roi_monthly_percent - expected_monthly).abs() < EPSILON);
        assert!((indicators.roi_annual_percent - expected_monthly * 12.0).abs() < EPSILON);

        let months = indicators.payback.months().unwrap();
        assert!((months - 120_000.0 / 10_960.0).abs() < EPSILON);
    }

    #[test]
    fn test_scenario_b_zero_pitches_rejected() {
        let params = BusinessParameters {
            pitch_count: 0,
            ..scenario_a()
        };

        match compute(&params) {
            Err(CoreError::Validation(ValidationError::MustBePositive { field })) => {
                assert_eq!(field, "pitch_count");
            }
            other => panic!("expected pitch_count rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_scenario_c_loss_is_untaxed() {
        let mut params = with_investment(scenario_a());
        params.monthly_fixed_charges = vec![FixedChargeLine::new(
            FixedCharge::Rent,
            Money::from_major(50_000),
        )];

        let indicators = compute(&params).unwrap();

        assert_eq!(indicators.gross_profit, Money::from_major(-18_800));
        assert_eq!(indicators.tax, Money::zero());
        assert_eq!(indicators.net_profit, indicators.gross_profit);
        assert_eq!(indicators.net_profit_per_partner, Money::from_major(-9_400));
        assert_eq!(indicators.payback, Payback::NotApplicable);
        assert_eq!(indicators.roi_monthly_percent, 0.0);
        assert_eq!(indicators.roi_annual_percent, 0.0);
        assert!(!indicators.is_profitable());
    }

    #[test]
    fn test_tax_is_zero_on_loss_for_any_rate() {
        let mut params = scenario_a();
        params.monthly_fixed_charges = vec![FixedChargeLine::new(
            FixedCharge::Rent,
            Money::from_major(50_000),
        )];

        for rate in [0.0, 20.0, 50.0, 100.0] {
            params.tax_rate_percent = rate;
            let indicators = compute(&params).unwrap();
            assert_eq!(indicators.tax, Money::zero(), "rate {rate}");
        }
    }

    #[test]
    fn test_tax_is_zero_at_exact_break_even() {
        let mut params = scenario_a();
        // Fixed charges equal the contribution margin: gross profit = 0
        params.monthly_fixed_charges = vec![FixedChargeLine::new(
            FixedCharge::Rent,
            Money::from_major(31_200),
        )];

        let indicators = compute(&params).unwrap();
        assert!(indicators.gross_profit.is_zero());
        assert!(indicators.tax.is_zero());
        assert_eq!(indicators.break_even.revenue(), Some(Money::from_major(41_600)));
    }

    #[test]
    fn test_higher_tax_rate_lowers_net_profit() {
        let mut previous: Option<Money> = None;
        for rate in [0.0, 5.0, 10.0, 20.0, 35.0, 50.0] {
            let params = BusinessParameters {
                tax_rate_percent: rate,
                ..scenario_a()
            };
            let net = compute(&params).unwrap().net_profit;
            if let Some(prev) = previous {
                assert!(net < prev, "net profit did not drop at {rate}%");
            }
            previous = Some(net);
        }
    }

    #[test]
    fn test_revenue_is_linear_in_pitch_count() {
        let mut params = with_investment(scenario_a());
        params.services.push(ServiceLine::new(
            ServiceKind::Drinks,
            Money::from_cents(1_250),
            Money::from_cents(600),
            35.5,
        ));
        params.services.push(ServiceLine::new(
            ServiceKind::Tournament,
            Money::from_cents(33_333),
            Money::from_cents(9_999),
            0.7,
        ));

        let one = compute(&params).unwrap();
        for pitches in 2..=6u32 {
            let many = compute(&params.with_pitch_count(pitches)).unwrap();

            for kind in [ServiceKind::HourlyRental, ServiceKind::Tournament] {
                let base = one.service(kind).unwrap();
                let scaled = many.service(kind).unwrap();
                assert_eq!(Some(scaled.revenue), base.revenue.checked_mul(pitches));
                assert_eq!(Some(scaled.cost), base.cost.checked_mul(pitches));
            }

            let drinks_one = one.service(ServiceKind::Drinks).unwrap();
            let drinks_many = many.service(ServiceKind::Drinks).unwrap();
            assert_eq!(drinks_many, drinks_one);

            assert_eq!(many.per_pitch_investment, one.per_pitch_investment);
            assert_eq!(many.shared_investment, one.shared_investment);
            assert_eq!(
                Some(many.total_investment),
                one.per_pitch_investment
                    .checked_mul(pitches)
                    .and_then(|per_pitch| per_pitch.checked_add(one.shared_investment))
            );
        }
    }

    #[test]
    fn test_scaling_flag_overrides_kind_default() {
        let mut params = scenario_a();
        params.services = vec![ServiceLine::new(
            ServiceKind::Drinks,
            Money::from_major(10),
            Money::from_major(4),
            30.0,
        )
        .with_scaling(true)];

        let one = compute(&params).unwrap();
        let three = compute(&params.with_pitch_count(3)).unwrap();
        assert_eq!(Some(three.gross_revenue), one.gross_revenue.checked_mul(3));
    }

    #[test]
    fn test_partner_split_recombines_within_rounding() {
        let mut params = scenario_a();
        // Make the net profit an awkward number of cents
        params.services[0].price = Money::from_cents(20_017);

        for partners in 1..=9u32 {
            params.partner_count = partners;
            let indicators = compute(&params).unwrap();
            let recombined = indicators.net_profit_per_partner.checked_mul(partners).unwrap();
            let drift = (recombined.cents() - indicators.net_profit.cents()).abs();
            assert!(
                drift * 2 <= partners as i64,
                "{partners} partners drifted by {drift} cents"
            );
        }
    }

    #[test]
    fn test_zero_revenue_break_even_is_zero() {
        let params = BusinessParameters {
            monthly_fixed_charges: vec![FixedChargeLine::new(
                FixedCharge::Rent,
                Money::from_major(5_000),
            )],
            ..BusinessParameters::default()
        };

        let indicators = compute(&params).unwrap();
        assert!(indicators.gross_revenue.is_zero());
        assert_eq!(indicators.contribution_margin_percent, 0.0);
        assert_eq!(indicators.break_even, BreakEven::Revenue(Money::zero()));
        assert_eq!(indicators.net_profit, Money::from_major(-5_000));
    }

    #[test]
    fn test_zero_volume_counts_as_zero_revenue() {
        let mut params = scenario_a();
        params.services[0].daily_volume = 0.0;

        let indicators = compute(&params).unwrap();
        assert!(indicators.gross_revenue.is_zero());
        assert_eq!(indicators.break_even.revenue(), Some(Money::zero()));
    }

    #[test]
    fn test_break_even_unbounded_when_cost_equals_price() {
        let mut params = scenario_a();
        params.services[0].cost = params.services[0].price;

        let indicators = compute(&params).unwrap();
        assert_eq!(indicators.break_even, BreakEven::Unbounded);
        assert_eq!(indicators.contribution_margin_percent, 0.0);
    }

    #[test]
    fn test_break_even_unbounded_when_cost_exceeds_price() {
        let mut params = scenario_a();
        params.services[0].cost = Money::from_major(250);

        let indicators = compute(&params).unwrap();
        assert!(indicators.break_even.is_unbounded());
        assert!(indicators.contribution_margin_percent < 0.0);
    }

    #[test]
    fn test_no_investment_means_no_payback() {
        let indicators = compute(&scenario_a()).unwrap();
        assert!(indicators.is_profitable());
        assert!(indicators.total_investment.is_zero());
        assert_eq!(indicators.payback, Payback::NotApplicable);
        assert_eq!(indicators.roi_monthly_percent, 0.0);
    }

    #[test]
    fn test_per_pitch_investment_multiplies_with_pitches() {
        let params = with_investment(scenario_a()).with_pitch_count(3);
        let indicators = compute(&params).unwrap();

        assert_eq!(indicators.per_pitch_investment, Money::from_major(100_000));
        assert_eq!(indicators.total_investment, Money::from_major(320_000));
    }

    #[test]
    fn test_allocation_override_counts_item_once() {
        let mut params = with_investment(scenario_a()).with_pitch_count(4);
        params.investment_items[0] =
            params.investment_items[0].with_allocation(InvestmentAllocation::Shared);

        let indicators = compute(&params).unwrap();
        assert!(indicators.per_pitch_investment.is_zero());
        assert_eq!(indicators.total_investment, Money::from_major(120_000));
    }

    #[test]
    fn test_post_tax_deduction() {
        let params = BusinessParameters {
            post_tax_deduction_percent: 30.0,
            ..scenario_a()
        };

        let indicators = compute(&params).unwrap();
        // 10,960 after tax, 30% improvement charge = 3,288
        assert_eq!(indicators.post_tax_deduction, Money::from_major(3_288));
        assert_eq!(indicators.net_profit, Money::from_major(7_672));
        assert_eq!(indicators.net_profit_per_partner, Money::from_major(3_836));
    }

    #[test]
    fn test_post_tax_deduction_skipped_on_loss() {
        let mut params = scenario_a();
        params.post_tax_deduction_percent = 30.0;
        params.monthly_fixed_charges = vec![FixedChargeLine::new(
            FixedCharge::Rent,
            Money::from_major(50_000),
        )];

        let indicators = compute(&params).unwrap();
        assert!(indicators.post_tax_deduction.is_zero());
        assert_eq!(indicators.net_profit, indicators.gross_profit);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let params = with_investment(scenario_a());
        assert_eq!(compute(&params).unwrap(), compute(&params).unwrap());
    }

    #[test]
    fn test_invalid_parameters_produce_no_result() {
        let mut params = scenario_a();
        params.tax_rate_percent = 120.0;
        assert!(matches!(compute(&params), Err(CoreError::Validation(_))));

        let mut params = scenario_a();
        params.services[0].daily_volume = -1.0;
        assert!(matches!(compute(&params), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_derive_guards_zero_partners() {
        // Bypass validation to hit the arithmetic guard directly
        let params = BusinessParameters {
            partner_count: 0,
            ..scenario_a()
        };
        assert!(matches!(
            derive(&params),
            Err(CoreError::DivisionUndefined { .. })
        ));
    }

    #[test]
    fn test_fractional_tax_rate_is_not_rounded() {
        // 12,500 per slot, 8 slots, 26 days, no costs: 2,600,000 gross profit
        let base = BusinessParameters {
            services: vec![ServiceLine::new(
                ServiceKind::HourlyRental,
                Money::from_major(12_500),
                Money::zero(),
                8.0,
            )],
            monthly_fixed_charges: Vec::new(),
            ..scenario_a()
        };

        let low = compute(&BusinessParameters {
            tax_rate_percent: 20.001,
            ..base.clone()
        })
        .unwrap();
        let high = compute(&BusinessParameters {
            tax_rate_percent: 20.004,
            ..base
        })
        .unwrap();

        assert_eq!(low.gross_profit, Money::from_major(2_600_000));
        assert_eq!(high.tax.checked_sub(low.tax), Some(Money::from_major(78)));
        assert!(high.net_profit < low.net_profit);
    }

    #[test]
    fn test_pitch_count_overflow_is_an_error() {
        let mut params = scenario_a();
        params.services[0].price = Money::from_major(1_000_000);
        params.pitch_count = u32::MAX;

        match compute(&params) {
            Err(CoreError::Overflow { quantity }) => assert_eq!(quantity, "service revenue"),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_huge_daily_volume_is_an_error() {
        let mut params = scenario_a();
        params.services[0].daily_volume = 1e300;
        params.services.push(ServiceLine::new(
            ServiceKind::Drinks,
            Money::from_major(10),
            Money::from_major(4),
            1e300,
        ));

        assert!(matches!(
            compute(&params),
            Err(CoreError::Overflow { .. })
        ));
    }

    #[test]
    fn test_aggregate_overflow_is_an_error() {
        // Each line fits on its own; their sum does not
        let mut params = scenario_a();
        params.monthly_fixed_charges = vec![
            FixedChargeLine::new(FixedCharge::Rent, Money::from_cents(i64::MAX)),
            FixedChargeLine::new(FixedCharge::Payroll, Money::from_major(1)),
        ];

        match compute(&params) {
            Err(CoreError::Overflow { quantity }) => assert_eq!(quantity, "fixed cost"),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_investment_overflow_is_an_error() {
        let mut params = with_investment(scenario_a()).with_pitch_count(1_000);
        params.investment_items[0].amount = Money::from_cents(i64::MAX / 10);

        match compute(&params) {
            Err(CoreError::Overflow { quantity }) => assert_eq!(quantity, "total investment"),
            other => panic!("expected overflow, got {:?}", other),
        }
    }
}
