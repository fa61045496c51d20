// Contact form: validation, the on-disk submission log, and best-effort email relay.
// A submission is stored before any email is attempted; email never affects the response.

pub mod handlers;
pub mod models;
pub mod notifier;
pub mod store;
pub mod validation;

pub use notifier::{ContactNotifier, SmtpNotifier};
pub use store::ContactLog;
