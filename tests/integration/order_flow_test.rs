// End-to-end order lifecycle against an in-memory store: creation, history
// re-derivation, payment recording through to settlement, and demo seeding.

use autodinar::catalog::models::ItemType;
use autodinar::core::AppError;
use autodinar::orders::models::FulfillmentStatus;
use autodinar::orders::repositories::InMemoryStore;
use autodinar::orders::services::{NewOrder, OrderService, PaymentStatus};
use chrono::{Duration, Months, TimeZone, Utc};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn service() -> OrderService {
    OrderService::new(Arc::new(InMemoryStore::new()))
}

fn new_order(price: rust_decimal::Decimal, installments: u32) -> NewOrder {
    NewOrder {
        item_id: "p4".to_string(),
        item_type: ItemType::Product,
        item_name: "Heavy Duty Car Battery 12V 70Ah".to_string(),
        price,
        installments,
        buyer_id: "AutoDinarUser001".to_string(),
    }
}

#[tokio::test]
async fn test_full_payment_order_is_settled_immediately() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();

    let order = service.create_order(new_order(dec!(8500), 1), now).await.unwrap();

    assert!(order.order_id.starts_with("ORD-"));
    assert_eq!(order.confirmation_code.len(), 6);
    assert!(order
        .qr_code_value
        .starts_with(&format!("AUTODINAR_ORDER:{}", order.order_id)));
    assert_eq!(order.fulfillment_status, FulfillmentStatus::PendingPickup);
    assert!(!order.payment_plan.is_installment);
    assert_eq!(
        PaymentStatus::for_plan(&order.payment_plan),
        PaymentStatus::PaidInFull
    );
}

#[tokio::test]
async fn test_service_order_starts_scheduled() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();

    let order = service
        .create_order(
            NewOrder {
                item_id: "s1".to_string(),
                item_type: ItemType::Service,
                item_name: "Premium Car Wash & Wax".to_string(),
                price: dec!(2000),
                installments: 1,
                buyer_id: "AutoDinarUser001".to_string(),
            },
            now,
        )
        .await
        .unwrap();

    assert_eq!(order.fulfillment_status, FulfillmentStatus::ServiceScheduled);
}

#[tokio::test]
async fn test_installment_order_lifecycle_to_settlement() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    let order_day = now.date_naive();

    let order = service.create_order(new_order(dec!(6000), 6), now).await.unwrap();
    assert!(order.payment_plan.is_installment);
    assert_eq!(order.payment_plan.installment_amount, dec!(1000));
    assert_eq!(
        PaymentStatus::for_plan(&order.payment_plan),
        PaymentStatus::PaymentPending
    );

    // Pay the first five installments
    for n in 1..=5u32 {
        let today = order_day
            .checked_add_months(Months::new(n))
            .unwrap();
        let updated = service.record_payment(&order.order_id, today).await.unwrap();
        assert_eq!(updated.payment_plan.installments_paid, n);
    }

    let today = order_day.checked_add_months(Months::new(5)).unwrap();
    let fetched = service.get_order(&order.order_id, today).await.unwrap();
    assert_eq!(
        PaymentStatus::for_plan(&fetched.payment_plan),
        PaymentStatus::AwaitingFinalPayment
    );

    // Settle the final installment
    let today = order_day.checked_add_months(Months::new(6)).unwrap();
    let settled = service.record_payment(&order.order_id, today).await.unwrap();
    assert_eq!(settled.payment_plan.installments_paid, 6);
    assert_eq!(settled.payment_plan.next_due_date, None);
    assert_eq!(
        PaymentStatus::for_plan(&settled.payment_plan),
        PaymentStatus::PaidInFull
    );

    // One more payment attempt fails
    let result = service.record_payment(&order.order_id, today).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_missed_installment_reads_overdue_then_recovers() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    let order_day = now.date_naive();

    let order = service.create_order(new_order(dec!(6000), 6), now).await.unwrap();

    // Nobody pays; read three weeks after the first due date
    let today = order_day
        .checked_add_months(Months::new(1))
        .unwrap()
        + Duration::days(21);
    let fetched = service.get_order(&order.order_id, today).await.unwrap();
    assert_eq!(
        PaymentStatus::for_plan(&fetched.payment_plan),
        PaymentStatus::InstallmentOverdue
    );

    // Catching up on the missed installment clears the overdue state
    let caught_up = service.record_payment(&order.order_id, today).await.unwrap();
    assert_eq!(
        PaymentStatus::for_plan(&caught_up.payment_plan),
        PaymentStatus::InstallmentsOngoing
    );
}

#[tokio::test]
async fn test_list_orders_newest_first_with_fresh_statuses() {
    let service = service();
    let first = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    let second = first + Duration::hours(2);

    service.create_order(new_order(dec!(8500), 1), first).await.unwrap();
    let later = service.create_order(new_order(dec!(6000), 6), second).await.unwrap();

    let listed = service.list_orders(first.date_naive()).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].order_id, later.order_id);
}

#[tokio::test]
async fn test_get_order_not_found() {
    let service = service();
    let result = service.get_order("ORD-NOPE", Utc::now().date_naive()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = service
        .record_payment("ORD-NOPE", Utc::now().date_naive())
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_create_order_rejects_bad_input() {
    let service = service();
    let now = Utc::now();

    let result = service.create_order(new_order(dec!(0), 1), now).await;
    assert!(matches!(result, Err(AppError::InvalidPrice(_))));

    let result = service.create_order(new_order(dec!(-10), 1), now).await;
    assert!(matches!(result, Err(AppError::InvalidPrice(_))));

    // 2000 over 6 months is 333 per month, under the floor
    let result = service.create_order(new_order(dec!(2000), 6), now).await;
    assert!(matches!(result, Err(AppError::InstallmentTooSmall(_))));
}

#[tokio::test]
async fn test_reset_and_seed_builds_canonical_demo_set() {
    let service = service();
    let now = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();

    // Seeding replaces whatever is stored
    service.create_order(new_order(dec!(8500), 1), now).await.unwrap();
    let seeded = service.reset_and_seed(now).await.unwrap();
    assert_eq!(seeded.len(), 5);

    let listed = service.list_orders(now.date_naive()).await.unwrap();
    assert_eq!(listed.len(), 5);

    let statuses: Vec<PaymentStatus> = listed
        .iter()
        .map(|o| PaymentStatus::for_plan(&o.payment_plan))
        .collect();

    // The tire order has paid only 1 of 6 on a three-month-old plan
    assert!(statuses.contains(&PaymentStatus::InstallmentOverdue));
    // The brake pads were paid in full
    assert!(statuses.contains(&PaymentStatus::PaidInFull));
    // The battery and car wash plans are mid-flight
    assert!(statuses.contains(&PaymentStatus::InstallmentsOngoing));

    for order in &listed {
        assert!(order.order_id.starts_with("ORD-MOCK-"));
        assert_eq!(order.buyer_id, "AutoDinarUser001");
    }
}
