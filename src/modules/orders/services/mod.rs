pub mod order_service;
pub mod schedule_generator;
pub mod status_deriver;

pub use order_service::{
    NewOrder, OrderService, DEFAULT_BUYER_ID, MIN_MONTHLY_PAYMENT, PREFERRED_INSTALLMENT_MONTHS,
};
pub use schedule_generator::ScheduleGenerator;
pub use status_deriver::PaymentStatus;
