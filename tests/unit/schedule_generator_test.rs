// Property-based tests for the installment schedule generator:
// schedule shape, calendar-month due dates, and rounding behavior.

use autodinar::orders::models::InstallmentStatus;
use autodinar::orders::services::ScheduleGenerator;
use chrono::{Months, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_schedule_length_matches_count() {
    let order_date = date(2026, 3, 10);
    for count in [2u32, 3, 6, 12, 24] {
        let plan =
            ScheduleGenerator::build_plan(dec!(24000), count, 0, order_date, order_date).unwrap();
        assert_eq!(plan.installments.len(), count as usize);
        assert_eq!(plan.installment_count, count);
    }
}

#[test]
fn test_first_due_date_is_one_month_out() {
    let order_date = date(2026, 3, 10);
    let plan = ScheduleGenerator::build_plan(dec!(6000), 6, 0, order_date, order_date).unwrap();
    assert_eq!(plan.installments[0].due_date, date(2026, 4, 10));
}

#[test]
fn test_single_installment_is_paid_at_order_date() {
    let order_date = date(2026, 3, 10);
    let plan = ScheduleGenerator::build_plan(dec!(6000), 1, 0, order_date, order_date).unwrap();

    assert_eq!(plan.installments.len(), 1);
    assert_eq!(plan.installments[0].due_date, order_date);
    assert_eq!(plan.installments[0].status, InstallmentStatus::Paid);
    assert!(!plan.is_installment);
}

#[test]
fn test_rounding_drift_is_not_corrected() {
    // 6 x round(1000 / 6) = 6 x 166.67 = 1000.02: the schedule may overshoot
    // the total and no installment absorbs the difference
    let order_date = date(2026, 3, 10);
    let plan = ScheduleGenerator::build_plan(dec!(1000), 6, 0, order_date, order_date).unwrap();

    let sum: Decimal = plan.installments.iter().map(|i| i.amount).sum();
    assert_eq!(plan.installment_amount, dec!(166.67));
    assert_eq!(sum, dec!(1000.02));
}

#[test]
fn test_month_end_order_clamps_into_short_months() {
    let plan = ScheduleGenerator::build_plan(
        dec!(12000),
        4,
        0,
        date(2025, 10, 31),
        date(2025, 10, 31),
    )
    .unwrap();

    assert_eq!(plan.installments[0].due_date, date(2025, 11, 30));
    assert_eq!(plan.installments[1].due_date, date(2025, 12, 31));
    assert_eq!(plan.installments[2].due_date, date(2026, 1, 31));
    assert_eq!(plan.installments[3].due_date, date(2026, 2, 28));
}

prop_compose! {
    // Days 1-28 exist in every month, so monthly steps never clamp
    fn stable_date()(year in 2020i32..2030, month in 1u32..=12, day in 1u32..=28)
        -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

proptest! {
    /// Generator produces exactly `count` installments with non-decreasing
    /// due dates, each exactly one calendar month after the previous
    #[test]
    fn prop_monthly_cadence(
        order_date in stable_date(),
        count in 2u32..=24,
        total_minor in 100_000u64..100_000_000,
    ) {
        let total = Decimal::new(total_minor as i64, 2);
        let plan = ScheduleGenerator::build_plan(total, count, 0, order_date, order_date)
            .expect("plan must build");

        prop_assert_eq!(plan.installments.len(), count as usize);

        prop_assert_eq!(
            plan.installments[0].due_date,
            order_date.checked_add_months(Months::new(1)).unwrap()
        );
        for pair in plan.installments.windows(2) {
            prop_assert!(pair[0].due_date <= pair[1].due_date);
            prop_assert_eq!(
                pair[1].due_date,
                pair[0].due_date.checked_add_months(Months::new(1)).unwrap()
            );
        }
    }

    /// Every installment carries the same rounded amount
    #[test]
    fn prop_equal_rounded_amounts(
        order_date in stable_date(),
        count in 2u32..=24,
        total_minor in 100_000u64..100_000_000,
    ) {
        let total = Decimal::new(total_minor as i64, 2);
        let plan = ScheduleGenerator::build_plan(total, count, 0, order_date, order_date)
            .expect("plan must build");

        let expected = (total / Decimal::from(count)).round_dp(2);
        for installment in &plan.installments {
            prop_assert_eq!(installment.amount, expected);
        }
    }

    /// A fresh plan read on its creation day is entirely upcoming
    #[test]
    fn prop_fresh_plan_all_upcoming(
        order_date in stable_date(),
        count in 2u32..=24,
    ) {
        let plan = ScheduleGenerator::build_plan(
            dec!(48000),
            count,
            0,
            order_date,
            order_date,
        ).expect("plan must build");

        for installment in &plan.installments {
            prop_assert_eq!(installment.status, InstallmentStatus::Upcoming);
        }
        prop_assert_eq!(plan.next_due_date, Some(plan.installments[0].due_date));
    }
}
