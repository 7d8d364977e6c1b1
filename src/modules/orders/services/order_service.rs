// Order lifecycle management
//
// Creates orders (full payment or installment plan), re-derives payment
// state on every read, records installment payments, and owns the demo
// seeding/reset flow. All mutation goes through a single writer lock; the
// backing store only ever sees whole-list replaces.

use chrono::{DateTime, Days, Months, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::{AppError, Currency, Result};
use crate::modules::catalog::data as catalog;
use crate::modules::catalog::models::ItemType;
use crate::modules::orders::models::{FulfillmentStatus, Order};
use crate::modules::orders::repositories::OrderStore;
use crate::modules::orders::services::ScheduleGenerator;

/// Installment terms offered to buyers, in months
pub const PREFERRED_INSTALLMENT_MONTHS: [u32; 6] = [3, 6, 9, 12, 18, 24];

/// Floor for a single monthly payment, in DZD
pub const MIN_MONTHLY_PAYMENT: Decimal = Decimal::ONE_THOUSAND;

/// The storefront runs single-user; every order belongs to this buyer
pub const DEFAULT_BUYER_ID: &str = "AutoDinarUser001";

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Input for creating an order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub item_id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub price: Decimal,
    /// 1 or less means full payment
    pub installments: u32,
    pub buyer_id: String,
}

/// Service for order creation, retrieval, and payment recording
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    // The order list is a single shared document; serialize writers so a
    // concurrent create and payment cannot lose each other's update
    write_lock: Mutex<()>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Installment terms available for a price: a term is offered only when
    /// the resulting monthly payment stays at or above the floor.
    pub fn installment_options(price: Decimal) -> Vec<u32> {
        if price <= Decimal::ZERO {
            return Vec::new();
        }
        PREFERRED_INSTALLMENT_MONTHS
            .into_iter()
            .filter(|&months| price / Decimal::from(months) >= MIN_MONTHLY_PAYMENT)
            .collect()
    }

    /// Create an order and append it to the store.
    pub async fn create_order(&self, new_order: NewOrder, now: DateTime<Utc>) -> Result<Order> {
        if new_order.price <= Decimal::ZERO {
            return Err(AppError::invalid_price(format!(
                "price must be positive, got {}",
                new_order.price
            )));
        }
        let price = Currency::DZD.round(new_order.price);

        // The options endpoint filters the offered terms, but the floor is a
        // plan invariant and is enforced here as well
        if new_order.installments > 1 {
            let monthly = price / Decimal::from(new_order.installments);
            if monthly < MIN_MONTHLY_PAYMENT {
                warn!(
                    installments = new_order.installments,
                    price = %price,
                    "Rejected installment plan below monthly floor"
                );
                return Err(AppError::installment_too_small(format!(
                    "{} monthly payments of {} fall below the {} DZD minimum",
                    new_order.installments,
                    Currency::DZD.round(monthly),
                    MIN_MONTHLY_PAYMENT
                )));
            }
        }

        let order_date = now.date_naive();
        let payment_plan =
            ScheduleGenerator::build_plan(price, new_order.installments, 0, order_date, order_date)?;

        let order_id = generate_order_id(now);
        let confirmation_code = generate_alphanumeric_code(6);
        let qr_code_value = format!(
            "AUTODINAR_ORDER:{}|ITEM:{}|BUYER:{}",
            order_id, new_order.item_id, new_order.buyer_id
        );

        let order = Order {
            order_id,
            item_id: new_order.item_id,
            item_type: new_order.item_type,
            item_name: new_order.item_name,
            item_price: price,
            created_at: now,
            buyer_id: new_order.buyer_id,
            qr_code_value,
            confirmation_code,
            fulfillment_status: FulfillmentStatus::initial_for(new_order.item_type),
            payment_plan,
        };

        let _guard = self.write_lock.lock().await;
        let mut orders = self.store.load().await?;
        orders.push(order.clone());
        self.store.save(&orders).await?;

        info!(
            order_id = order.order_id.as_str(),
            item_id = order.item_id.as_str(),
            installments = order.payment_plan.installment_count,
            "Order created"
        );

        Ok(order)
    }

    /// All orders, newest first, payment state re-derived against `today`.
    pub async fn list_orders(&self, today: NaiveDate) -> Result<Vec<Order>> {
        let mut orders = self.store.load().await?;
        for order in &mut orders {
            order.refresh(today);
        }
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Single order by id, payment state re-derived against `today`.
    pub async fn get_order(&self, order_id: &str, today: NaiveDate) -> Result<Order> {
        let orders = self.store.load().await?;
        let mut order = orders
            .into_iter()
            .find(|o| o.order_id == order_id)
            .ok_or_else(|| AppError::not_found(format!("order {}", order_id)))?;
        order.refresh(today);
        Ok(order)
    }

    /// Record payment of the next outstanding installment on an order.
    pub async fn record_payment(&self, order_id: &str, today: NaiveDate) -> Result<Order> {
        let _guard = self.write_lock.lock().await;
        let mut orders = self.store.load().await?;
        let order = orders
            .iter_mut()
            .find(|o| o.order_id == order_id)
            .ok_or_else(|| AppError::not_found(format!("order {}", order_id)))?;

        let amount = order.payment_plan.record_payment(today)?;
        let updated = order.clone();
        self.store.save(&orders).await?;

        info!(
            order_id = order_id,
            amount = %amount,
            installments_paid = updated.payment_plan.installments_paid,
            "Installment payment recorded"
        );

        Ok(updated)
    }

    /// Replace the stored orders with the canonical demo set.
    ///
    /// Rebuilds the same five mid-flight scenarios the storefront has always
    /// shipped with: plans at varying ages with paid prefixes, one of them
    /// overdue, one settled in full.
    pub async fn reset_and_seed(&self, now: DateTime<Utc>) -> Result<Vec<Order>> {
        let today = now.date_naive();

        let months_ago = |months: u32| {
            now.checked_sub_months(Months::new(months))
                .ok_or_else(|| AppError::internal("seed date out of range"))
        };
        let days_ago = |days: u64| {
            now.checked_sub_days(Days::new(days))
                .ok_or_else(|| AppError::internal("seed date out of range"))
        };

        let seeds = [
            // Cabin filter on a 6-month plan, 2 paid, third installment due
            ("p3", ItemType::Product, 6, 2, months_ago(3)?, FulfillmentStatus::ItemPickedUp, "CABINFILTER"),
            // Battery, 3 of 6 paid, fourth due around now
            ("p4", ItemType::Product, 6, 3, months_ago(4)?, FulfillmentStatus::PickupConfirmed, "BATTERY3OF6"),
            // Car wash on a short plan, 1 of 3 paid
            ("s1", ItemType::Service, 3, 1, months_ago(2)?, FulfillmentStatus::ServiceScheduled, "CARWASH"),
            // Tire plan with only the first installment paid: overdue
            ("p7", ItemType::Product, 6, 1, months_ago(3)?, FulfillmentStatus::PendingPickup, "TIREOVERDUE"),
            // Brake pads paid in full
            ("p1", ItemType::Product, 1, 0, days_ago(10)?, FulfillmentStatus::ItemPickedUp, "FULLPAID"),
        ];

        let mut orders = Vec::with_capacity(seeds.len());
        for (item_id, item_type, count, paid, ordered_at, fulfillment, tag) in seeds {
            let item = catalog::find_item(item_id, item_type)
                .ok_or_else(|| AppError::internal(format!("seed item {} missing", item_id)))?;

            let payment_plan = ScheduleGenerator::build_plan(
                item.price,
                count,
                paid,
                ordered_at.date_naive(),
                today,
            )?;

            let order_id = format!("ORD-MOCK-{}-{}", generate_alphanumeric_code(4), tag);
            let qr_code_value = format!(
                "AUTODINAR_ORDER:{}|ITEM:{}|BUYER:{}",
                order_id, item.id, DEFAULT_BUYER_ID
            );

            orders.push(Order {
                order_id,
                item_id: item.id.clone(),
                item_type,
                item_name: item.name.clone(),
                item_price: item.price,
                created_at: ordered_at,
                buyer_id: DEFAULT_BUYER_ID.to_string(),
                qr_code_value,
                confirmation_code: generate_alphanumeric_code(6),
                fulfillment_status: fulfillment,
                payment_plan,
            });
        }

        let _guard = self.write_lock.lock().await;
        self.store.save(&orders).await?;

        info!(seeded = orders.len(), "Order store reset with demo data");

        Ok(orders)
    }
}

/// Timestamp plus random suffix. Uniqueness is probabilistic, which is
/// acceptable for a single-user store.
fn generate_order_id(now: DateTime<Utc>) -> String {
    format!(
        "ORD-{}-{}",
        now.timestamp_millis(),
        generate_alphanumeric_code(4)
    )
}

/// Fixed-length uppercase alphanumeric code, used for pickup confirmation
fn generate_alphanumeric_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}
