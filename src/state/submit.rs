#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// In-flight post submissions.
///
/// Overlapping submits are allowed, so loading is a count rather than a
/// flag: the indicator stays up until the last pending call resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub pending: usize,
}

impl SubmitState {
    pub fn begin(&mut self) {
        self.pending += 1;
    }

    pub fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}
