//! Client-side lookup session
//!
//! One record holds the whole form state: the editable draft, the current
//! phase and the last validation hint. Each user or network event is one
//! method call, so the phase can never be observed half-updated.
//!
//! ```text
//! Idle ──submit (10 chars)──▶ Pending ──settle──▶ Succeeded | Failed
//!  ▲  └─submit (other)──▶ Idle + hint                    │
//!  └───────────────────────── edit ◀─────────────────────┘
//! ```

use crate::core::error::{LOOKUP_FAILED_MESSAGE, SessionError};
use crate::lookup::phone_number::PhoneNumber;
use crate::lookup::request::LookupRequest;
use crate::lookup::result::LookupResult;

/// Identifies the single in-flight request of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Form fields as currently typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub country_code: String,
    pub phone_number: String,
}

/// Observable phase of a session
#[derive(Debug, Clone, PartialEq)]
pub enum LookupPhase {
    /// Editing; nothing in flight
    Idle,
    /// A request is in flight
    Pending(SubmitTicket),
    /// The gateway answered with a result
    Succeeded(LookupResult),
    /// The lookup failed; carries the message to display
    Failed(String),
}

/// How an in-flight request ended
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LookupResult),
    Failed,
}

/// State machine behind the lookup form
#[derive(Debug, Clone)]
pub struct LookupSession {
    draft: RequestDraft,
    phase: LookupPhase,
    validation_message: Option<String>,
    next_ticket: u64,
}

impl LookupSession {
    pub fn new() -> Self {
        Self {
            draft: RequestDraft::default(),
            phase: LookupPhase::Idle,
            validation_message: None,
            next_ticket: 1,
        }
    }

    /// Start a session with both fields pre-filled
    pub fn with_draft(country_code: impl Into<String>, phone_number: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.draft = RequestDraft {
            country_code: country_code.into(),
            phone_number: phone_number.into(),
        };
        session
    }

    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    pub fn phase(&self) -> &LookupPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LookupPhase::Pending(_))
    }

    /// Hint from the last rejected submit, cleared by the next edit or submit
    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    /// Result of the last settled lookup, if it succeeded
    pub fn result(&self) -> Option<&LookupResult> {
        match &self.phase {
            LookupPhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Error message of the last settled lookup, if it failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LookupPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.draft.phone_number = phone_number.into();
        self.on_edit();
    }

    pub fn set_country_code(&mut self, country_code: impl Into<String>) {
        self.draft.country_code = country_code.into();
        self.on_edit();
    }

    /// Submit the current draft
    ///
    /// On success the session is `Pending` and the returned ticket must be
    /// handed back to [`Self::settle`]. A draft with the wrong length leaves
    /// the session `Idle` with the validation hint set.
    pub fn submit(&mut self) -> Result<(SubmitTicket, LookupRequest), SessionError> {
        if self.is_pending() {
            return Err(SessionError::AlreadyPending);
        }

        match PhoneNumber::parse(self.draft.phone_number.as_str()) {
            Ok(number) => {
                let ticket = SubmitTicket(self.next_ticket);
                self.next_ticket += 1;
                self.validation_message = None;
                self.phase = LookupPhase::Pending(ticket);
                let request = LookupRequest::from_validated(self.draft.country_code.clone(), number);
                Ok((ticket, request))
            }
            Err(e) => {
                self.validation_message = Some(e.to_string());
                self.phase = LookupPhase::Idle;
                Err(e.into())
            }
        }
    }

    /// Apply the outcome of the request identified by `ticket`
    pub fn settle(&mut self, ticket: SubmitTicket, outcome: LookupOutcome) -> Result<(), SessionError> {
        if self.phase != LookupPhase::Pending(ticket) {
            return Err(SessionError::StaleTicket);
        }

        self.phase = match outcome {
            LookupOutcome::Found(result) => LookupPhase::Succeeded(result),
            LookupOutcome::Failed => LookupPhase::Failed(LOOKUP_FAILED_MESSAGE.to_string()),
        };
        Ok(())
    }

    // Edits while pending only touch the draft; the in-flight request still settles.
    fn on_edit(&mut self) {
        self.validation_message = None;
        if !self.is_pending() {
            self.phase = LookupPhase::Idle;
        }
    }
}

impl Default for LookupSession {
    fn default() -> Self {
        Self::new()
    }
}
