//! hwatch Core
//!
//! Core types and pure logic for the homework status watcher.
//!
//! This crate contains:
//! - Domain types: Cursor, status records and the verdict vocabulary
//! - DTOs: Wire types shared by the HTTP clients
//! - Validation of status API payloads
//! - Formatting of status records into notification text
//!
//! Nothing in here performs I/O; the clients and the poll loop live in
//! `hwatch-client` and `hwatch-bot`.

pub mod domain;
pub mod dto;
pub mod error;
pub mod format;
pub mod validate;

pub use domain::cursor::Cursor;
pub use domain::homework::{FetchResult, StatusRecord};
pub use domain::verdict::{Verdict, VerdictTable};
pub use error::{FormatError, SchemaError};
pub use format::StatusFormatter;
pub use validate::validate;
