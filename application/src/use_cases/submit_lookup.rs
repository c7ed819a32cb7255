//! Submit Lookup use case
//!
//! Runs one cycle of the lookup form: validate and submit the draft, call the
//! gateway, settle the session.

use crate::ports::lookup_api::LookupApi;
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use callerid_domain::{LookupOutcome, LookupSession, SessionError};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for submitting the lookup form
pub struct SubmitLookupUseCase<A: LookupApi + ?Sized + 'static> {
    api: Arc<A>,
}

impl<A: LookupApi + ?Sized + 'static> SubmitLookupUseCase<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Execute one cycle with default (no-op) progress
    pub async fn execute(&self, session: &mut LookupSession) -> Result<(), SessionError> {
        self.execute_with_progress(session, &NoProgress).await
    }

    /// Execute one cycle with progress callbacks
    ///
    /// Returns `Err` only when the session refused the submit (validation
    /// hint set, or a lookup already pending). A failed gateway call is a
    /// normal outcome and leaves the session in `Failed`.
    pub async fn execute_with_progress(
        &self,
        session: &mut LookupSession,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<(), SessionError> {
        let (ticket, request) = session.submit()?;

        info!("Submitting lookup for region {}", request.country_code);
        progress.on_lookup_start(&request);

        let outcome = match self.api.search(&request).await {
            Ok(result) => {
                progress.on_lookup_complete(true);
                LookupOutcome::Found(result)
            }
            Err(e) => {
                warn!("Error occurred while fetching data: {}", e);
                progress.on_lookup_complete(false);
                LookupOutcome::Failed
            }
        };

        session.settle(ticket, outcome)
    }
}
