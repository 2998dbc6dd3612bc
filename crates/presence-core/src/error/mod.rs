//! Domain errors

mod status_error;

pub use status_error::{ErrorBody, FetchDebug, StatusError, LANYARD_HELP_URL};
