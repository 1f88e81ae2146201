//! Scheduler layer for the bot
//!
//! This layer owns the poll loop: it drives fetch, validation and
//! notification once per cycle and keeps the time cursor between cycles.

pub mod poller;

pub use poller::StatusPoller;
