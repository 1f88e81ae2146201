//! Data Transfer Objects
//!
//! Request and response bodies exchanged with the remote services.

pub mod status;
pub mod telegram;
