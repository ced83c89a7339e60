//! A fixed-size window sliding over a borrowed sequence.
//!
//! The window keeps its own copy of the visible elements and two cursors
//! `[start, end)` into the source. The source is only borrowed, so it has
//! to outlive the window and cannot be mutated while the window exists.
//!
//! ```
//! use num_fraction::SlidingWindow;
//!
//! let v: Vec<u32> = (0..10).collect();
//! let mut w = SlidingWindow::<_, 4>::new(&v);
//! while w.can_increment() {
//!     w.increment().unwrap();
//! }
//! assert!(w.data().iter().eq(&[6, 7, 8, 9]));
//! ```

use crate::error::WindowError;
use std::collections::vec_deque::{Iter, VecDeque};
use std::fmt;
use tracing::{debug, trace};

/// A view of at most `N` consecutive elements of `source`
#[derive(Debug, Clone)]
pub struct SlidingWindow<'a, T, const N: usize> {
    source: &'a [T],
    window: VecDeque<T>,
    start: usize,
    end: usize, // exclusive
}

impl<'a, T: Clone, const N: usize> SlidingWindow<'a, T, N> {
    /// Bind a window to the beginning of `source`.
    ///
    /// The window holds `min(N, source.len())` elements.
    pub fn new(source: &'a [T]) -> Self {
        let end = N.min(source.len());
        let mut window = VecDeque::with_capacity(end);
        window.extend(source[..end].iter().cloned());
        SlidingWindow {
            source,
            window,
            start: 0,
            end,
        }
    }

    /// Move the window forward by one element
    pub fn increment(&mut self) -> Result<&mut Self, WindowError> {
        if !self.can_increment() {
            debug!(end = self.end, len = self.source.len(), "window cannot advance");
            return Err(WindowError::PastEnd {
                len: self.source.len(),
            });
        }

        // a zero sized window only moves its cursors
        if self.window.pop_front().is_some() {
            self.window.push_back(self.source[self.end].clone());
        }
        self.start += 1;
        self.end += 1;
        trace!(start = self.start, end = self.end, "window advanced");
        Ok(self)
    }

    /// Move the window backward by one element
    pub fn decrement(&mut self) -> Result<&mut Self, WindowError> {
        if !self.can_decrement() {
            debug!(start = self.start, "window cannot retreat");
            return Err(WindowError::PastStart);
        }

        if self.window.pop_back().is_some() {
            self.window.push_front(self.source[self.start - 1].clone());
        }
        self.start -= 1;
        self.end -= 1;
        trace!(start = self.start, end = self.end, "window retreated");
        Ok(self)
    }

    /// Move forward and return the window as it was before the move
    pub fn post_increment(&mut self) -> Result<Self, WindowError> {
        let prior = self.clone();
        self.increment()?;
        Ok(prior)
    }

    /// Move backward and return the window as it was before the move
    pub fn post_decrement(&mut self) -> Result<Self, WindowError> {
        let prior = self.clone();
        self.decrement()?;
        Ok(prior)
    }
}

impl<'a, T, const N: usize> SlidingWindow<'a, T, N> {
    #[inline]
    pub fn can_increment(&self) -> bool {
        self.end < self.source.len()
    }

    #[inline]
    pub fn can_decrement(&self) -> bool {
        self.start > 0
    }

    /// Elements currently visible through the window, in source order
    #[inline]
    pub fn data(&self) -> &VecDeque<T> {
        &self.window
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.window.iter()
    }

    /// Apply `func` on the current window content
    #[inline]
    pub fn aggregate<U, F: FnOnce(&VecDeque<T>) -> U>(&self, func: F) -> U {
        func(&self.window)
    }

    #[inline]
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Index of the first visible element in the source
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start
    }

    /// Index one past the last visible element in the source
    #[inline]
    pub fn end_index(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

impl<'a, 'w, T, const N: usize> IntoIterator for &'w SlidingWindow<'a, T, N> {
    type Item = &'w T;
    type IntoIter = Iter<'w, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.window.iter()
    }
}

impl<'a, T: fmt::Display, const N: usize> fmt::Display for SlidingWindow<'a, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<% ")?;
        for item in &self.window {
            write!(f, "{} ", item)?;
        }
        write!(f, " >%")
    }
}
