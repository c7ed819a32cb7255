//! Progress notification port
//!
//! Lets the presentation layer show a loading state while a lookup is in
//! flight.

use callerid_domain::LookupRequest;

/// Callback for progress updates during a lookup
///
/// Implementations live in the presentation layer (spinner, plain text, ...).
pub trait LookupProgressNotifier: Send + Sync {
    /// Called once the request has passed validation and is about to be sent
    fn on_lookup_start(&self, request: &LookupRequest);

    /// Called when the gateway call has settled
    fn on_lookup_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LookupProgressNotifier for NoProgress {
    fn on_lookup_start(&self, _request: &LookupRequest) {}
    fn on_lookup_complete(&self, _success: bool) {}
}
