//! Voucher service - Business rules for creating and redeeming vouchers.
//!
//! This service handles:
//! - Rejecting duplicate voucher codes
//! - Discount eligibility (minimum purchase, one-time use)
//! - Discount calculation
//!
//! Each operation is one lookup plus at most one repository mutation.

use std::sync::Arc;

use crate::{
    error::{AppError, VOUCHER_ALREADY_EXISTS, VOUCHER_DOES_NOT_EXIST},
    models::voucher::{ApplyVoucherResult, Voucher},
    repositories::voucher_repository::VoucherRepository,
};

/// Smallest purchase amount a voucher can be applied to.
const MIN_DISCOUNT_AMOUNT: f64 = 100.0;

pub struct VoucherService {
    repository: Arc<dyn VoucherRepository>,
}

impl VoucherService {
    pub fn new(repository: Arc<dyn VoucherRepository>) -> Self {
        Self { repository }
    }

    /// Create a new voucher.
    ///
    /// # Errors
    ///
    /// - `Conflict("Voucher already exist.")`: the code is taken
    /// - `Database`: Database error occurred
    pub async fn create_voucher(&self, code: &str, discount: i32) -> Result<Voucher, AppError> {
        if self.repository.find_by_code(code).await?.is_some() {
            tracing::warn!(code, "voucher code already taken");
            return Err(AppError::conflict(VOUCHER_ALREADY_EXISTS));
        }

        let voucher = self.repository.create(code, discount).await?;
        tracing::info!(code = %voucher.code, discount = voucher.discount, "voucher created");

        Ok(voucher)
    }

    /// Look up a voucher by its code.
    pub async fn get_voucher(&self, code: &str) -> Result<Voucher, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::VoucherNotFound)
    }

    /// Apply a voucher to a purchase amount.
    ///
    /// # Process
    ///
    /// 1. Look up the voucher
    /// 2. Check eligibility: amount of at least 100 and voucher not yet used
    /// 3. If eligible, compute the discounted amount and mark the voucher used
    ///
    /// An ineligible voucher is not an error; the result carries the
    /// unchanged amount and `applied = false`.
    ///
    /// # Errors
    ///
    /// - `Conflict("Voucher does not exist.")`: unknown code
    /// - `Database`: Database error occurred
    pub async fn apply_voucher(
        &self,
        code: &str,
        amount: f64,
    ) -> Result<ApplyVoucherResult, AppError> {
        let voucher = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::conflict(VOUCHER_DOES_NOT_EXIST))?;

        let mut final_amount = amount;
        if is_amount_eligible(amount) && !voucher.used {
            final_amount = apply_discount(amount, voucher.discount);
            self.repository.mark_used(&voucher.code).await?;
        }

        let applied = final_amount != amount;
        tracing::info!(
            code = %voucher.code,
            amount,
            final_amount,
            applied,
            "voucher applied"
        );

        Ok(ApplyVoucherResult {
            amount,
            discount: voucher.discount,
            final_amount,
            applied,
        })
    }

    pub async fn health(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

fn is_amount_eligible(amount: f64) -> bool {
    amount >= MIN_DISCOUNT_AMOUNT
}

fn apply_discount(amount: f64, discount: i32) -> f64 {
    amount - amount * (f64::from(discount) / 100.0)
}
