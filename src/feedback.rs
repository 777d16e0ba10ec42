//! Status Feedback
//!
//! Maps a replica store result to what the user sees: a success toast only
//! for the operation's own success status (the one the cache was reconciled
//! on), a targeted error toast for 409 where the action defines one, and
//! nothing (a log line only) for every other status or a missing response.

use list_replica::error::ClientResult;
use list_replica::{Operation, StatusClass, StatusCode};

use crate::components::Toaster;

/// Message shown for a 409 on update-task
pub const INVALID_DATE: &str = "Invalid date";

/// Show the outcome of `op`. Returns true when the server confirmed it.
pub fn report(
    toaster: Toaster,
    op: Operation,
    result: ClientResult<StatusCode>,
    success: impl FnOnce() -> String,
    conflict: Option<&str>,
) -> bool {
    let status = match result {
        Ok(status) => status,
        Err(e) => {
            log::warn!("{op}: {e}");
            return false;
        }
    };

    match (StatusClass::of(status, op), conflict) {
        (StatusClass::Success, _) => {
            toaster.success("Success!", success());
            true
        }
        (StatusClass::Conflict, Some(message)) => {
            toaster.error("Error!", message);
            false
        }
        _ => {
            log::info!("{op} returned {status}");
            false
        }
    }
}
