/// Message shown in the error toast
///
/// Every raise bumps `seq`, so raising the same text twice still re-triggers the
/// toast, and a dismiss timer from an earlier raise cannot clear a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub message: Option<String>,
    pub seq: u64,
}

impl ErrorState {
    /// Shows `message` and returns the sequence number to dismiss it with.
    pub fn raise(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Clears the message if it is still the one raised as `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.message.is_none() {
            return false;
        }

        self.message = None;
        true
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}
