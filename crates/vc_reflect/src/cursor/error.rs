use thiserror::Error;

/// The number of generated types does not match the number of expected slots.
///
/// This is a build-time contract violation of the generated code and
/// should abort the enclosing type initialization.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    /// [`next_type`](crate::cursor::next_type) was called on an exhausted iterator.
    #[error("more generated types were expected than were supplied")]
    Exhausted,

    /// A [`TypeCursor`](crate::cursor::TypeCursor) ran out after `supplied` elements.
    #[error(
        "more generated types were expected than were supplied: expected {expected}, supplied {supplied}"
    )]
    Short { expected: usize, supplied: usize },

    /// A [`TypeCursor`](crate::cursor::TypeCursor) finished with elements left over.
    #[error("more generated types were supplied than the {expected} expected")]
    Surplus { expected: usize },
}

impl SequenceError {
    /// Panics with the error message.
    #[cold]
    #[inline(never)]
    pub fn handle_error(&self) -> ! {
        panic!("{self}");
    }
}

// -----------------------------------------------------------------------------
// Tests
