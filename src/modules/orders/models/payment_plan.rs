use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Status of a single installment
///
/// Only `Paid` is ground truth. `Due`, `Overdue`, and `Upcoming` depend on
/// the calendar day the plan is read, so every stored value other than `Paid`
/// is a cache that must be recomputed against "today" before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallmentStatus {
    /// Payment recorded as received
    Paid,
    /// Due date is today and unpaid
    Due,
    /// Due date is strictly in the past and unpaid
    Overdue,
    /// Due date is strictly in the future and unpaid
    Upcoming,
}

impl InstallmentStatus {
    /// Classify one installment against a caller-supplied calendar day.
    ///
    /// Pure function of `(due_date, is_paid, today)`; the same inputs always
    /// produce the same status. Comparisons are whole-calendar-day
    /// (start-of-day) comparisons.
    pub fn classify(due_date: NaiveDate, is_paid: bool, today: NaiveDate) -> Self {
        if is_paid {
            Self::Paid
        } else if due_date == today {
            Self::Due
        } else if due_date < today {
            Self::Overdue
        } else {
            Self::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Overdue => "Overdue",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl std::fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled partial payment within a payment plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub status: InstallmentStatus,
}

impl Installment {
    pub fn is_paid(&self) -> bool {
        self.status == InstallmentStatus::Paid
    }

    /// Recompute the cached status from `today`. `Paid` never regresses.
    pub fn reclassify(&mut self, today: NaiveDate) {
        self.status = InstallmentStatus::classify(self.due_date, self.is_paid(), today);
    }
}

/// Cadence of a payment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Single,
    Weekly,
    BiWeekly,
    Monthly,
}

impl PaymentFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Bi-Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment plan attached to an order
///
/// The aggregate fields (`amount_paid`, `remaining_amount`,
/// `installments_paid`, `next_due_date`) are derived from the installment
/// list and refreshed together with the per-installment statuses on every
/// read via [`PaymentPlan::refresh`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub total_amount: Decimal,
    pub amount_paid: Decimal,
    pub remaining_amount: Decimal,
    pub installment_count: u32,
    pub installments_paid: u32,
    pub installment_amount: Decimal,
    pub payment_frequency: PaymentFrequency,
    pub is_installment: bool,
    /// Ordered by due date ascending, one per period
    pub installments: Vec<Installment>,
    /// Due date of the first non-paid installment, `None` once all are paid
    pub next_due_date: Option<NaiveDate>,
}

impl PaymentPlan {
    /// Recompute every installment status and the aggregate figures against
    /// a single snapshot of `today`.
    ///
    /// All installments in one pass are compared against the same day, so
    /// exactly one status holds per installment at this evaluation instant.
    pub fn refresh(&mut self, today: NaiveDate) {
        for installment in &mut self.installments {
            installment.reclassify(today);
        }
        self.aggregate();
    }

    /// Roll the installment list up into the aggregate figures.
    fn aggregate(&mut self) {
        let amount_paid: Decimal = self
            .installments
            .iter()
            .filter(|i| i.is_paid())
            .map(|i| i.amount)
            .sum();

        // Floor at zero to absorb per-installment rounding drift
        self.amount_paid = amount_paid;
        self.remaining_amount = (self.total_amount - amount_paid).max(Decimal::ZERO);
        self.installments_paid = self.installments.iter().filter(|i| i.is_paid()).count() as u32;
        self.next_due_date = self
            .installments
            .iter()
            .find(|i| !i.is_paid())
            .map(|i| i.due_date);
    }

    /// Record payment of the next outstanding installment.
    ///
    /// Paid installments always form a prefix of the schedule; paying is only
    /// ever possible for the earliest outstanding installment, so the prefix
    /// invariant holds by construction.
    pub fn record_payment(&mut self, today: NaiveDate) -> Result<Decimal> {
        let next = self
            .installments
            .iter_mut()
            .find(|i| !i.is_paid())
            .ok_or_else(|| AppError::validation("all installments are already paid"))?;

        next.status = InstallmentStatus::Paid;
        let amount = next.amount;
        self.refresh(today);
        Ok(amount)
    }
}
