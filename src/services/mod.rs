//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers and
//! reach storage only through repository traits.

pub mod voucher_service;
