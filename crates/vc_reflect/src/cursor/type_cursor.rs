use crate::cursor::SequenceError;

// -----------------------------------------------------------------------------
// next_type

/// Advances `iter` by exactly one element.
///
/// - `None`: no sequence was supplied, returns `Ok(None)`.
/// - `Some(iter)` with a next element: returns it.
/// - `Some(iter)` exhausted: [`SequenceError::Exhausted`].
///
/// # Examples
///
/// ```
/// use vc_reflect::cursor::{next_type, SequenceError};
/// use vc_reflect::info::Type;
///
/// let mut types = [Type::of::<u8>(), Type::of::<u16>()].into_iter();
///
/// assert_eq!(next_type(Some(&mut types)), Ok(Some(Type::of::<u8>())));
/// assert_eq!(next_type(Some(&mut types)), Ok(Some(Type::of::<u16>())));
/// assert_eq!(next_type(Some(&mut types)), Err(SequenceError::Exhausted));
///
/// let absent: Option<&mut core::array::IntoIter<Type, 2>> = None;
/// assert_eq!(next_type(absent), Ok(None));
/// ```
#[inline]
pub fn next_type<I: Iterator>(iter: Option<&mut I>) -> Result<Option<I::Item>, SequenceError> {
    match iter {
        None => Ok(None),
        Some(iter) => iter.next().map(Some).ok_or(SequenceError::Exhausted),
    }
}

// -----------------------------------------------------------------------------
// TypeCursor

/// A single-consumer cursor over the generated types supplied for a message.
///
/// An absent cursor always yields `None`. A present cursor yields each
/// element once, in order; once exhausted, every further advance fails with
/// [`SequenceError::Short`].
///
/// `expected` is only used for error reports.
///
/// # Examples
///
/// ```
/// use vc_reflect::cursor::{SequenceError, TypeCursor};
///
/// let mut cursor = TypeCursor::new(Some(["TypeA", "TypeB"].into_iter()), 3);
///
/// assert_eq!(cursor.advance(), Ok(Some("TypeA")));
/// assert_eq!(cursor.advance(), Ok(Some("TypeB")));
/// assert_eq!(
///     cursor.advance(),
///     Err(SequenceError::Short { expected: 3, supplied: 2 }),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TypeCursor<I> {
    iter: Option<I>,
    expected: usize,
    taken: usize,
    exhausted: bool,
}

impl<I: Iterator> TypeCursor<I> {
    /// Creates a cursor over `iter`, `None` if no types were supplied.
    #[inline]
    pub fn new(iter: Option<I>, expected: usize) -> Self {
        Self {
            iter,
            expected,
            taken: 0,
            exhausted: false,
        }
    }

    /// Creates a cursor without a sequence.
    #[inline]
    pub fn absent() -> Self {
        Self::new(None, 0)
    }

    /// Returns `true` if no sequence was supplied.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.iter.is_none()
    }

    /// Returns the expected number of elements.
    #[inline]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Returns the number of elements handed out so far.
    #[inline]
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// Advances the cursor by exactly one element.
    ///
    /// Once the sequence has run out, every further call fails, even if the
    /// underlying iterator would resume.
    pub fn advance(&mut self) -> Result<Option<I::Item>, SequenceError> {
        let short = SequenceError::Short {
            expected: self.expected,
            supplied: self.taken,
        };
        if self.exhausted {
            return Err(short);
        }

        match next_type(self.iter.as_mut()) {
            Ok(item) => {
                self.taken += usize::from(item.is_some());
                Ok(item)
            }
            Err(_) => {
                self.exhausted = true;
                Err(short)
            }
        }
    }

    /// Consumes the cursor, checking that no supplied element is left over.
    ///
    /// An absent cursor always finishes cleanly.
    pub fn finish(mut self) -> Result<(), SequenceError> {
        if self.exhausted {
            return Ok(());
        }
        match self.iter.as_mut().and_then(Iterator::next) {
            Some(_) => Err(SequenceError::Surplus {
                expected: self.expected,
            }),
            None => Ok(()),
        }
    }
}

impl<I: Iterator> From<Option<I>> for TypeCursor<I> {
    /// Creates a cursor without an expected count.
    #[inline]
    fn from(iter: Option<I>) -> Self {
        Self::new(iter, 0)
    }
}

// -----------------------------------------------------------------------------
// Tests
