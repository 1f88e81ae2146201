//! Core domain types
//!
//! These types describe what the status API reports and what the poller
//! keeps between cycles. They are shared between the HTTP clients and the
//! bot binary.

pub mod cursor;
pub mod homework;
pub mod verdict;
