//! Voucher data models and API request/response types.
//!
//! This module defines:
//! - `Voucher`: Database entity representing a discount voucher
//! - `CreateVoucherRequest` / `ApplyVoucherRequest`: request bodies
//! - `ApplyVoucherResult`: outcome of applying a voucher to an amount

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Represents a voucher record from the database.
///
/// # Database Table
///
/// Maps to the `vouchers` table. Each voucher:
/// - Has a code that is unique across all vouchers
/// - Grants a percentage discount between 0 and 100
/// - Can be redeemed once (`used` never reverts to false)
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Voucher {
    /// Unique identifier for this voucher
    pub id: Uuid,

    /// Code presented by the customer
    pub code: String,

    /// Discount percentage
    pub discount: i32,

    /// Whether the voucher has already been redeemed
    pub used: bool,
}

/// Request body for creating a new voucher.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": "SUMMER20",
///   "discount": 20
/// }
/// ```
///
/// # Validation
///
/// - `code`: Required, non-blank
/// - `discount`: Integer between 1 and 100
#[derive(Debug, Deserialize)]
pub struct CreateVoucherRequest {
    pub code: String,
    pub discount: i32,
}

impl CreateVoucherRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_code(&self.code)?;

        if !(1..=100).contains(&self.discount) {
            return Err(AppError::InvalidRequest(
                "Discount must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

/// Request body for applying a voucher to a purchase.
///
/// # JSON Example
///
/// ```json
/// {
///   "code": "SUMMER20",
///   "amount": 150
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApplyVoucherRequest {
    pub code: String,
    pub amount: f64,
}

impl ApplyVoucherRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_code(&self.code)?;

        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AppError::InvalidRequest(
                "Amount must be a positive number".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_code(code: &str) -> Result<(), AppError> {
    if code.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Code must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Outcome of applying a voucher to a purchase amount.
///
/// # JSON Example
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
/// `applied` is true only when the final amount differs from the original.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyVoucherResult {
    pub amount: f64,
    pub discount: i32,
    pub final_amount: f64,
    pub applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_blank_code() {
        let request = CreateVoucherRequest {
            code: "   ".to_string(),
            discount: 10,
        };
        assert!(matches!(
            request.validate(),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn create_request_rejects_out_of_range_discount() {
        for discount in [0, 101, -5] {
            let request = CreateVoucherRequest {
                code: "SAVE".to_string(),
                discount,
            };
            assert!(request.validate().is_err(), "discount {discount}");
        }
    }

    #[test]
    fn create_request_accepts_bounds() {
        for discount in [1, 100] {
            let request = CreateVoucherRequest {
                code: "SAVE".to_string(),
                discount,
            };
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn apply_request_rejects_non_positive_amount() {
        for amount in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let request = ApplyVoucherRequest {
                code: "SAVE".to_string(),
                amount,
            };
            assert!(request.validate().is_err(), "amount {amount}");
        }
    }

    #[test]
    fn apply_result_serializes_final_amount_in_camel_case() {
        let result = ApplyVoucherResult {
            amount: 150.0,
            discount: 20,
            final_amount: 120.0,
            applied: true,
        };
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["finalAmount"], 120.0);
        assert_eq!(json["applied"], true);
        assert!(json.get("final_amount").is_none());
    }
}
