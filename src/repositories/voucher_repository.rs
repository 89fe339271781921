//! Voucher persistence.
//!
//! `VoucherRepository` is the data-access boundary consumed by the voucher
//! service. `PgVoucherRepository` is the PostgreSQL implementation used in
//! production.

use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::{AppError, VOUCHER_ALREADY_EXISTS},
    models::voucher::Voucher,
};

#[async_trait]
pub trait VoucherRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, AppError>;

    async fn create(&self, code: &str, discount: i32) -> Result<Voucher, AppError>;

    /// Flag the voucher as redeemed and return its code.
    async fn mark_used(&self, code: &str) -> Result<String, AppError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Map an insert failure, reporting a UNIQUE(code) violation as a conflict.
///
/// The unique index catches a create that slipped past the service lookup.
fn map_insert_error(e: sqlx::Error) -> AppError {
    let duplicate = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());
    if duplicate {
        AppError::conflict(VOUCHER_ALREADY_EXISTS)
    } else {
        AppError::Database(e)
    }
}

pub struct PgVoucherRepository {
    pool: DbPool,
}

impl PgVoucherRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoucherRepository for PgVoucherRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, AppError> {
        let voucher = sqlx::query_as::<_, Voucher>(
            "SELECT id, code, discount, used FROM vouchers WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(voucher)
    }

    async fn create(&self, code: &str, discount: i32) -> Result<Voucher, AppError> {
        sqlx::query_as::<_, Voucher>(
            r#"
            INSERT INTO vouchers (code, discount)
            VALUES ($1, $2)
            RETURNING id, code, discount, used
            "#,
        )
        .bind(code)
        .bind(discount)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)
    }

    async fn mark_used(&self, code: &str) -> Result<String, AppError> {
        // Only ever sets used = true
        let code: String =
            sqlx::query_scalar("UPDATE vouchers SET used = TRUE WHERE code = $1 RETURNING code")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?
                .ok_or(AppError::VoucherNotFound)?;

        Ok(code)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
