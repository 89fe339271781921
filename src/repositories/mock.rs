//! In-memory repository with call counters, shared by service and handler tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use super::voucher_repository::VoucherRepository;
use crate::{error::AppError, models::voucher::Voucher};

#[derive(Default)]
pub struct MockVoucherRepository {
    vouchers: Mutex<HashMap<String, Voucher>>,
    create_calls: AtomicUsize,
    mark_used_calls: AtomicUsize,
}

impl MockVoucherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a voucher without going through `create`.
    pub fn with_voucher(self, code: &str, discount: i32, used: bool) -> Self {
        self.vouchers.lock().unwrap().insert(
            code.to_string(),
            Voucher {
                id: Uuid::new_v4(),
                code: code.to_string(),
                discount,
                used,
            },
        );
        self
    }

    pub fn get(&self, code: &str) -> Option<Voucher> {
        self.vouchers.lock().unwrap().get(code).cloned()
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn mark_used_count(&self) -> usize {
        self.mark_used_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoucherRepository for MockVoucherRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Voucher>, AppError> {
        Ok(self.get(code))
    }

    async fn create(&self, code: &str, discount: i32) -> Result<Voucher, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let voucher = Voucher {
            id: Uuid::new_v4(),
            code: code.to_string(),
            discount,
            used: false,
        };
        self.vouchers
            .lock()
            .unwrap()
            .insert(code.to_string(), voucher.clone());
        Ok(voucher)
    }

    async fn mark_used(&self, code: &str) -> Result<String, AppError> {
        self.mark_used_calls.fetch_add(1, Ordering::SeqCst);
        let mut vouchers = self.vouchers.lock().unwrap();
        let voucher = vouchers.get_mut(code).ok_or(AppError::VoucherNotFound)?;
        voucher.used = true;
        Ok(voucher.code.clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
