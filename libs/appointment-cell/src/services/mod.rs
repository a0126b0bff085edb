pub mod booking;
pub mod calendar;
pub mod emails;
pub mod priority;
pub mod review;
pub mod store;

pub use booking::AppointmentBookingService;
pub use calendar::{CalendarBooking, CalendlyBookingClient};
pub use priority::{classify_priority, sort_for_review};
pub use review::{meeting_link_for, AppointmentReviewService};
pub use store::{AppointmentStore, SupabaseAppointmentStore};
