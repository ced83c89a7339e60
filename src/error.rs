use thiserror::Error;

/// Error from moving a [SlidingWindow](crate::SlidingWindow) outside its source sequence.
///
/// This is a programming error on the caller side, use `can_increment()` and
/// `can_decrement()` before stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("cannot advance past end of the source sequence (length {len})")]
    PastEnd { len: usize },
    #[error("cannot retreat past start of the source sequence")]
    PastStart,
}

/// A zero-denominator fraction was converted into a type without infinities or NaN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("fraction with zero denominator has no finite representation")]
pub struct DegenerateError;
