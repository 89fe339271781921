//! Voucher HTTP handlers.
//!
//! This module implements the voucher API endpoints:
//! - POST /api/v1/vouchers - Create a voucher
//! - GET /api/v1/vouchers/:code - Get voucher by code
//! - POST /api/v1/vouchers/apply - Apply a voucher to a purchase amount

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::voucher::{ApplyVoucherRequest, ApplyVoucherResult, CreateVoucherRequest, Voucher},
    routes::AppState,
};

/// Create a new voucher.
///
/// # Request Body
///
/// ```json
/// {
///   "code": "SUMMER20",
///   "discount": 20
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created voucher
/// - **Error (400)**: Blank code or discount outside 1..=100
/// - **Error (409)**: Code already exists
pub async fn create_voucher(
    State(state): State<AppState>,
    Json(request): Json<CreateVoucherRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let voucher = state
        .vouchers
        .create_voucher(&request.code, request.discount)
        .await?;

    Ok((StatusCode::CREATED, Json(voucher)))
}

/// Get a voucher by code.
///
/// Returns 404 if no voucher has this code.
pub async fn get_voucher(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Voucher>, AppError> {
    let voucher = state.vouchers.get_voucher(&code).await?;
    Ok(Json(voucher))
}

/// Apply a voucher to a purchase.
///
/// # Request Body
///
/// ```json
/// {
///   "code": "SUMMER20",
///   "amount": 150
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "amount": 150.0,
///   "discount": 20,
///   "finalAmount": 120.0,
///   "applied": true
/// }
/// ```
///
/// An ineligible purchase (below 100, or voucher already used) still
/// returns 200 with `applied: false`. Unknown codes return 409.
pub async fn apply_voucher(
    State(state): State<AppState>,
    Json(request): Json<ApplyVoucherRequest>,
) -> Result<Json<ApplyVoucherResult>, AppError> {
    request.validate()?;

    let result = state
        .vouchers
        .apply_voucher(&request.code, request.amount)
        .await?;

    Ok(Json(result))
}
