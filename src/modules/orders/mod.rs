pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{FulfillmentStatus, Installment, InstallmentStatus, Order, PaymentPlan};
pub use repositories::{InMemoryStore, JsonFileStore, OrderStore};
pub use services::{NewOrder, OrderService, PaymentStatus, ScheduleGenerator};
