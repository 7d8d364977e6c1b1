use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::models::ItemType;

use super::payment_plan::PaymentPlan;

/// Physical handover state of an order, independent of payment.
///
/// Set at creation from the item type and afterwards only mutated by store
/// staff through an external channel; this service never transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentStatus {
    /// System initial state for products; store hasn't confirmed readiness
    PendingPickup,
    /// Store has confirmed the order is ready for customer pickup
    PickupConfirmed,
    /// Service booked, waiting for appointment date
    ServiceScheduled,
    /// Product collected by customer
    ItemPickedUp,
    /// Service rendered to customer
    ServiceCompleted,
    /// Order has been cancelled
    Cancelled,
}

impl FulfillmentStatus {
    /// Initial state assigned at order creation
    pub fn initial_for(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Product => Self::PendingPickup,
            ItemType::Service => Self::ServiceScheduled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingPickup => "Pending Pickup",
            Self::PickupConfirmed => "Pickup Confirmed",
            Self::ServiceScheduled => "Service Scheduled",
            Self::ItemPickedUp => "Item Picked Up",
            Self::ServiceCompleted => "Service Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Terminal states on the fulfillment axis
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::ItemPickedUp | Self::ServiceCompleted | Self::Cancelled
        )
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchase: one catalog item, one payment plan, one fulfillment state.
///
/// `order_id`, `confirmation_code`, `qr_code_value`, and `item_price` are
/// immutable once created. The payment plan advances with wall-clock time
/// and recorded payments; fulfillment advances only via external action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub item_id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub item_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub buyer_id: String,
    /// Scanned at the store counter to pull up the order
    pub qr_code_value: String,
    /// Human-readable pickup code shown alongside the QR code
    pub confirmation_code: String,
    pub fulfillment_status: FulfillmentStatus,
    pub payment_plan: PaymentPlan,
}

impl Order {
    /// Recompute the payment plan's statuses and aggregates against `today`.
    pub fn refresh(&mut self, today: NaiveDate) {
        self.payment_plan.refresh(today);
    }
}
