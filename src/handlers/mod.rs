//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Validates it and calls the voucher service
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Voucher endpoints
pub mod vouchers;
