use std::sync::Arc;

/// Events emitted while a request moves through the client
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// A GET request is about to be sent
    RequestStarting { url: String },

    /// The server answered; the body has not been decoded yet
    ResponseReceived {
        url: String,
        status: u16,
        /// Body length in bytes, if there was a body
        body_length: Option<usize>,
    },

    /// The request did not produce a usable response
    RequestFailed { url: String, error: String },
}

/// Trait for observing client activity.
///
/// Implementations can use this to drive spinners, log messages,
/// or collect statistics. Reporting never changes the outcome of a call.
pub trait EventReporter: Send + Sync {
    /// Report a client event
    fn report(&self, event: ClientEvent);
}

/// A shared reference to an event reporter
pub type SharedEventReporter = Arc<dyn EventReporter>;

/// A reporter that silently ignores all events.
/// Used by default and in quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl EventReporter for NoopReporter {
    fn report(&self, _event: ClientEvent) {}
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedEventReporter {
        Arc::new(Self)
    }
}
