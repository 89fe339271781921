//! Data-access layer.
//!
//! Repositories hide SQL behind traits so services can be tested against
//! an in-memory implementation.

pub mod voucher_repository;

#[cfg(test)]
pub mod mock;
