pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod rest;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client
pub use client::Zoom;
pub use config::ZoomConfig;
pub use error::{Result, ZoomError};

// REST client
pub use rest::ZoomHttpClient;

// Pagination
pub use types::{Page, PaginationRequest};

// Webinars
pub use types::{
    RecurrenceInfo, RecurringWebinar, RecurringWebinarRequest, ScheduledWebinarRequest,
    TrackingField, Webinar, WebinarOccurrence, WebinarSettings, WebinarType,
};

// Enums
pub use types::{ApprovalType, AudioType, RecurrenceType};

// Cancellation token taken by every call.
pub use tokio_util::sync::CancellationToken;
