use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{AppError, Currency, Result};
use crate::modules::orders::models::{
    Installment, InstallmentStatus, PaymentFrequency, PaymentPlan,
};

/// Builder for payment plans and their installment schedules.
///
/// Monthly schedules use calendar-month arithmetic: installment `n` (1-based)
/// falls due exactly `n` calendar months after the order date, with month-end
/// overflow clamped to the last day of the target month (Jan 31 -> Feb 28).
///
/// The per-installment amount is `total / count` rounded to currency scale.
/// The rounded amounts are NOT corrected to sum back to the total; the sum
/// may drift from it by up to half a cent per installment. The aggregate
/// status derivation absorbs that drift with a tolerance instead.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Build a payment plan for an order.
    ///
    /// `installments_already_paid` marks that many leading installments as
    /// paid (used when reconstructing demo plans mid-flight); new purchases
    /// pass zero. `installment_count <= 1` produces the full-payment plan: a
    /// single installment dated at the order date and paid immediately.
    pub fn build_plan(
        total_amount: Decimal,
        installment_count: u32,
        installments_already_paid: u32,
        order_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<PaymentPlan> {
        if total_amount <= Decimal::ZERO {
            return Err(AppError::invalid_price(format!(
                "total amount must be positive, got {}",
                total_amount
            )));
        }

        if installment_count <= 1 {
            return Ok(Self::full_payment_plan(total_amount, order_date));
        }

        if installments_already_paid > installment_count {
            return Err(AppError::validation(format!(
                "cannot mark {} of {} installments as paid",
                installments_already_paid, installment_count
            )));
        }

        info!(
            installment_count,
            total_amount = %total_amount,
            order_date = %order_date,
            "Generating installment schedule"
        );

        let installment_amount =
            Currency::DZD.round(total_amount / Decimal::from(installment_count));

        let mut installments = Vec::with_capacity(installment_count as usize);
        for i in 0..installment_count {
            let due_date = Self::due_date(order_date, i + 1)?;
            let status = if i < installments_already_paid {
                InstallmentStatus::Paid
            } else {
                InstallmentStatus::classify(due_date, false, today)
            };
            installments.push(Installment {
                due_date,
                amount: installment_amount,
                status,
            });
        }

        let mut plan = PaymentPlan {
            total_amount,
            amount_paid: Decimal::ZERO,
            remaining_amount: total_amount,
            installment_count,
            installments_paid: 0,
            installment_amount,
            payment_frequency: PaymentFrequency::Monthly,
            is_installment: true,
            installments,
            next_due_date: None,
        };
        plan.refresh(today);

        Ok(plan)
    }

    /// Full payment: a one-installment plan settled at the order date.
    ///
    /// Distinct code path, not the `count == 1` degenerate loop: the single
    /// installment is dated at the order date itself, not offset by a month.
    fn full_payment_plan(total_amount: Decimal, order_date: NaiveDate) -> PaymentPlan {
        PaymentPlan {
            total_amount,
            amount_paid: total_amount,
            remaining_amount: Decimal::ZERO,
            installment_count: 1,
            installments_paid: 1,
            installment_amount: total_amount,
            payment_frequency: PaymentFrequency::Single,
            is_installment: false,
            installments: vec![Installment {
                due_date: order_date,
                amount: total_amount,
                status: InstallmentStatus::Paid,
            }],
            next_due_date: None,
        }
    }

    /// Due date of the `n`-th installment (1-based): order date plus `n`
    /// calendar months, clamped at month end.
    fn due_date(order_date: NaiveDate, n: u32) -> Result<NaiveDate> {
        order_date
            .checked_add_months(Months::new(n))
            .ok_or_else(|| AppError::validation("installment due date out of range"))
    }
}
