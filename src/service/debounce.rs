use std::{sync::Arc, time::Duration};

use crate::{platform, service::sequence::RequestSequencer};

/// Delays search input until typing pauses
///
/// Every keystroke calls [`SearchDebouncer::settle`]; only the call that is still
/// the latest once the delay elapses yields its term.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    keystrokes: Arc<RequestSequencer>,
    delay: Duration,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            keystrokes: Arc::new(RequestSequencer::new()),
            delay,
        }
    }

    /// Waits out the delay and returns `term` unless a newer keystroke arrived meanwhile.
    pub async fn settle(&self, term: String) -> Option<String> {
        let ticket = self.keystrokes.next();

        platform::sleep(self.delay).await;

        self.keystrokes.is_current(ticket).then_some(term)
    }

    /// Drops any pending term, e.g. when the search box is cleared explicitly.
    pub fn cancel(&self) {
        self.keystrokes.invalidate();
    }
}
