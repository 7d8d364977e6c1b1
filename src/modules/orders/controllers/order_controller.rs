// HTTP handlers for order and payment endpoints
//
// Endpoints:
// - POST /api/orders - Create an order (full payment or installment plan)
// - GET  /api/orders - Order history, newest first
// - GET  /api/orders/installment-options - Eligible terms for a price
// - POST /api/orders/seed - Reset the store with demo orders
// - GET  /api/orders/{order_id} - Confirmation view for one order
// - GET  /api/orders/{order_id}/payments - Installment payment details
// - POST /api/orders/{order_id}/payments - Record the next installment
//
// Every read re-derives installment and aggregate payment statuses. The
// derivation day defaults to today (UTC) and can be pinned with `?as_of=`.

use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{clock, AppError, Currency, Result};
use crate::modules::catalog::models::ItemType;
use crate::modules::orders::models::{Installment, Order, PaymentPlan};
use crate::modules::orders::services::{
    NewOrder, OrderService, PaymentStatus, DEFAULT_BUYER_ID, MIN_MONTHLY_PAYMENT,
};

/// Request for POST /api/orders
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub item_id: String,
    pub item_type: ItemType,
    pub item_name: String,
    pub price: String,
    /// Omitted or 1 means full payment
    pub installments: Option<u32>,
    pub buyer_id: Option<String>,
}

/// Derivation-day override accepted by every read endpoint
#[derive(Debug, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<NaiveDate>,
}

impl AsOfQuery {
    fn resolve(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(clock::today_utc)
    }
}

#[derive(Debug, Deserialize)]
pub struct InstallmentOptionsQuery {
    pub price: String,
}

/// Response for a single installment row
#[derive(Debug, Serialize)]
pub struct InstallmentResponse {
    pub due_date: String,
    pub amount: String,
    pub status: String,
}

impl From<&Installment> for InstallmentResponse {
    fn from(installment: &Installment) -> Self {
        Self {
            due_date: installment.due_date.to_string(),
            amount: installment.amount.to_string(),
            status: installment.status.to_string(),
        }
    }
}

/// Response for a payment plan
#[derive(Debug, Serialize)]
pub struct PaymentPlanResponse {
    pub total_amount: String,
    pub amount_paid: String,
    pub remaining_amount: String,
    pub installment_count: u32,
    pub installments_paid: u32,
    pub installment_amount: String,
    pub payment_frequency: String,
    pub is_installment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<String>,
    pub installments: Vec<InstallmentResponse>,
}

impl From<&PaymentPlan> for PaymentPlanResponse {
    fn from(plan: &PaymentPlan) -> Self {
        Self {
            total_amount: plan.total_amount.to_string(),
            amount_paid: plan.amount_paid.to_string(),
            remaining_amount: plan.remaining_amount.to_string(),
            installment_count: plan.installment_count,
            installments_paid: plan.installments_paid,
            installment_amount: plan.installment_amount.to_string(),
            payment_frequency: plan.payment_frequency.to_string(),
            is_installment: plan.is_installment,
            next_due_date: plan.next_due_date.map(|d| d.to_string()),
            installments: plan.installments.iter().map(InstallmentResponse::from).collect(),
        }
    }
}

/// Response for a full order
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order_id: String,
    pub item_id: String,
    pub item_type: String,
    pub item_name: String,
    pub item_price: String,
    pub created_at: String,
    pub buyer_id: String,
    pub qr_code_value: String,
    pub confirmation_code: String,
    pub fulfillment_status: String,
    pub payment_status: String,
    pub payment_plan: PaymentPlanResponse,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        let payment_status = PaymentStatus::for_plan(&order.payment_plan);
        Self {
            order_id: order.order_id.clone(),
            item_id: order.item_id.clone(),
            item_type: order.item_type.to_string(),
            item_name: order.item_name.clone(),
            item_price: order.item_price.to_string(),
            created_at: order.created_at.to_rfc3339(),
            buyer_id: order.buyer_id.clone(),
            qr_code_value: order.qr_code_value.clone(),
            confirmation_code: order.confirmation_code.clone(),
            fulfillment_status: order.fulfillment_status.to_string(),
            payment_status: payment_status.to_string(),
            payment_plan: PaymentPlanResponse::from(&order.payment_plan),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub count: usize,
    pub orders: Vec<OrderResponse>,
}

/// Response for GET /api/orders/{order_id}/payments
#[derive(Debug, Serialize)]
pub struct PaymentDetailsResponse {
    pub order_id: String,
    pub item_name: String,
    pub fulfillment_status: String,
    pub payment_status: String,
    /// Share of the total already paid, in whole percent
    pub progress_percent: u32,
    #[serde(flatten)]
    pub plan: PaymentPlanResponse,
}

#[derive(Debug, Serialize)]
pub struct InstallmentOptionResponse {
    pub months: u32,
    pub monthly_amount: String,
}

/// Response for GET /api/orders/installment-options
#[derive(Debug, Serialize)]
pub struct InstallmentOptionsResponse {
    pub price: String,
    pub minimum_monthly_payment: String,
    pub options: Vec<InstallmentOptionResponse>,
}

fn parse_price(raw: &str) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .map_err(|_| AppError::invalid_price(format!("invalid price format: {}", raw)))
}

/// POST /api/orders
///
/// Creates an order. Fails with 400 when the price is not positive or the
/// chosen installment count drops the monthly payment below the floor.
pub async fn create_order(
    request: web::Json<CreateOrderRequest>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    let price = parse_price(&request.price)?;

    let new_order = NewOrder {
        item_id: request.item_id,
        item_type: request.item_type,
        item_name: request.item_name,
        price,
        installments: request.installments.unwrap_or(1),
        buyer_id: request
            .buyer_id
            .unwrap_or_else(|| DEFAULT_BUYER_ID.to_string()),
    };

    let order = service.create_order(new_order, Utc::now()).await?;

    Ok(HttpResponse::Created().json(OrderResponse::from(&order)))
}

/// GET /api/orders
pub async fn list_orders(
    query: web::Query<AsOfQuery>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    let orders = service.list_orders(query.resolve()).await?;

    Ok(HttpResponse::Ok().json(OrderListResponse {
        count: orders.len(),
        orders: orders.iter().map(OrderResponse::from).collect(),
    }))
}

/// GET /api/orders/{order_id}
pub async fn get_order(
    order_id: web::Path<String>,
    query: web::Query<AsOfQuery>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    let order = service.get_order(&order_id, query.resolve()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(&order)))
}

/// GET /api/orders/{order_id}/payments
pub async fn get_payment_details(
    order_id: web::Path<String>,
    query: web::Query<AsOfQuery>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    let order = service.get_order(&order_id, query.resolve()).await?;
    let plan = &order.payment_plan;

    let progress_percent = if plan.total_amount > Decimal::ZERO {
        (plan.amount_paid / plan.total_amount * Decimal::ONE_HUNDRED)
            .round_dp(0)
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    Ok(HttpResponse::Ok().json(PaymentDetailsResponse {
        order_id: order.order_id.clone(),
        item_name: order.item_name.clone(),
        fulfillment_status: order.fulfillment_status.to_string(),
        payment_status: PaymentStatus::for_plan(plan).to_string(),
        progress_percent,
        plan: PaymentPlanResponse::from(plan),
    }))
}

/// POST /api/orders/{order_id}/payments
pub async fn record_payment(
    order_id: web::Path<String>,
    query: web::Query<AsOfQuery>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse> {
    let order = service.record_payment(&order_id, query.resolve()).await?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(&order)))
}

/// GET /api/orders/installment-options
pub async fn installment_options(
    query: web::Query<InstallmentOptionsQuery>,
) -> Result<HttpResponse> {
    let price = parse_price(&query.price)?;
    if price <= Decimal::ZERO {
        return Err(AppError::invalid_price(format!(
            "price must be positive, got {}",
            price
        )));
    }

    let options = OrderService::installment_options(price)
        .into_iter()
        .map(|months| InstallmentOptionResponse {
            months,
            monthly_amount: Currency::DZD
                .round(price / Decimal::from(months))
                .to_string(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(InstallmentOptionsResponse {
        price: price.to_string(),
        minimum_monthly_payment: MIN_MONTHLY_PAYMENT.to_string(),
        options,
    }))
}

/// POST /api/orders/seed
pub async fn seed_orders(service: web::Data<OrderService>) -> Result<HttpResponse> {
    let orders = service.reset_and_seed(Utc::now()).await?;

    Ok(HttpResponse::Ok().json(OrderListResponse {
        count: orders.len(),
        orders: orders.iter().map(OrderResponse::from).collect(),
    }))
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/installment-options", web::get().to(installment_options))
            .route("/seed", web::post().to(seed_orders))
            .route("/{order_id}", web::get().to(get_order))
            .route("/{order_id}/payments", web::get().to(get_payment_details))
            .route("/{order_id}/payments", web::post().to(record_payment)),
    );
}
