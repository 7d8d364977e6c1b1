pub mod order;
pub mod payment_plan;

pub use order::{FulfillmentStatus, Order};
pub use payment_plan::{Installment, InstallmentStatus, PaymentFrequency, PaymentPlan};
