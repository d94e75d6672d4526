mod enums;
mod page;
mod recurrence;
mod request;
mod settings;
mod webinar;

pub use enums::{ApprovalType, AudioType, RecurrenceType, WebinarType};
pub use page::{Page, PaginationRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use recurrence::RecurrenceInfo;
pub use request::{RecurringWebinarRequest, ScheduledWebinarRequest};
pub use settings::WebinarSettings;
pub use webinar::{RecurringWebinar, TrackingField, Webinar, WebinarOccurrence};
