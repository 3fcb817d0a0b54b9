/// The error raised by every failed cast: ambiguous numeric coercions,
/// casts between incompatible families, failed subtype checks, and
/// unresolvable doc-type aliases.
///
/// The caller of the function that raised the error is, by definition,
/// responsible for it; `offset` records how many stack frames up that
/// caller is. Every intermediate layer that catches and rethrows a
/// `CastError` must call [`increment_offset`](CastError::increment_offset)
/// exactly once so that diagnostics attribute fault to the original call
/// site rather than to an internal helper frame.
#[derive(Debug, Clone)]
pub struct CastError {
    pub message: String,
    offset: usize,
}

impl CastError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: 1,
        }
    }

    /// How many stack frames up the responsible caller is.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Called once per catch-and-rethrow layer.
    pub fn increment_offset(&mut self) {
        self.offset += 1;
    }

    /// Rarely needed; undoes one increment when a layer re-enters the
    /// engine on the caller's behalf. Saturates at zero.
    pub fn decrement_offset(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}

impl std::fmt::Display for CastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CastError {}

#[cfg(test)]
mod tests {
    use super::CastError;

    #[test]
    fn offset_starts_at_one_and_tracks_rethrows() {
        let mut err = CastError::new("Unable to cast Str value to Int: 123abc");
        assert_eq!(err.offset(), 1);
        err.increment_offset();
        err.increment_offset();
        assert_eq!(err.offset(), 3);
        err.decrement_offset();
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut err = CastError::new("x");
        err.decrement_offset();
        err.decrement_offset();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn display_is_the_message() {
        let err = CastError::new("Unable to cast Array to Bool");
        assert_eq!(err.to_string(), "Unable to cast Array to Bool");
    }
}
