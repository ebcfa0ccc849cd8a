/// Appointments scheduled for jobs
pub mod appointment;
/// Files attached to jobs and locations
pub mod attachment;
/// Parts and labor used on jobs
pub mod job_item;
/// Catalog of parts and services
pub mod lib_item;
/// Service lines (trades)
pub mod service_line;
/// Requests for service
pub mod service_request;
/// Webhook subscriptions
pub mod webhook;

pub use appointment::Appointment;
pub use attachment::Attachment;
pub use job_item::JobItem;
pub use lib_item::LibItem;
pub use service_line::ServiceLine;
pub use service_request::ServiceRequest;
pub use webhook::Webhook;
