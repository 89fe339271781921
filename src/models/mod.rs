//! Data models representing database entities and API payloads.

/// Discount voucher model
pub mod voucher;
