use rust_decimal::Decimal;

use crate::modules::orders::models::{InstallmentStatus, PaymentPlan};

/// Human-facing summary of a payment plan's health.
///
/// Derived fresh from the plan on every render and never persisted. Both the
/// order history and the confirmation/payment-details views go through this
/// one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    PaidInFull,
    /// Installment plan with nothing paid yet and a first payment ahead
    PaymentPending,
    /// Actively paying installments
    InstallmentsOngoing,
    /// At least one installment is overdue
    InstallmentOverdue,
    /// Only the last installment is still due or upcoming
    AwaitingFinalPayment,
    /// Fallback that no well-formed plan should reach; seeing it in a test
    /// means a plan invariant broke
    PaymentProcessing,
}

impl PaymentStatus {
    /// Derive the aggregate status from a refreshed plan.
    ///
    /// The plan must already be classified and aggregated against a single
    /// "today" snapshot (see [`PaymentPlan::refresh`]); this function is a
    /// pure decision chain over those figures, first match wins.
    pub fn for_plan(plan: &PaymentPlan) -> Self {
        if !plan.is_installment {
            return Self::PaidInFull;
        }

        // Rounded installment amounts can leave the paid sum fractionally
        // short of the total even with every installment paid; allow 1% of
        // one installment to cover that drift, and no more.
        if plan.installments_paid >= plan.installment_count {
            let tolerance = plan.installment_amount * Decimal::new(1, 2);
            if plan.amount_paid >= plan.total_amount - tolerance {
                return Self::PaidInFull;
            }
        }

        // Overdue outranks every other non-complete state regardless of
        // where it sits in the schedule
        if plan
            .installments
            .iter()
            .any(|i| i.status == InstallmentStatus::Overdue)
        {
            return Self::InstallmentOverdue;
        }

        if plan.installments_paid == 0
            && plan.installments.iter().any(|i| {
                matches!(i.status, InstallmentStatus::Due | InstallmentStatus::Upcoming)
            })
        {
            return Self::PaymentPending;
        }

        if plan.installments_paid < plan.installment_count {
            if plan.installments_paid == plan.installment_count - 1 {
                if let Some(last) = plan.installments.last() {
                    if matches!(
                        last.status,
                        InstallmentStatus::Due | InstallmentStatus::Upcoming
                    ) {
                        return Self::AwaitingFinalPayment;
                    }
                }
            }
            return Self::InstallmentsOngoing;
        }

        Self::PaymentProcessing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PaidInFull => "Paid in Full",
            Self::PaymentPending => "Payment Pending",
            Self::InstallmentsOngoing => "Installments Ongoing",
            Self::InstallmentOverdue => "Installment Overdue",
            Self::AwaitingFinalPayment => "Awaiting Final Payment",
            Self::PaymentProcessing => "Payment Processing",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
