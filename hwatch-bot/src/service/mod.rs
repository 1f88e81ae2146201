//! Service layer
//!
//! Services contain business logic for the bot. They orchestrate
//! repositories and the pure formatting code from `hwatch-core`.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notification;

// Re-export traits
pub use notification::NotificationService;

// Re-export implementations
pub use notification::StandardNotificationService;
