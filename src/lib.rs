//! `num-fraction` provides two small generic utilities:
//!
//! - [RationalNumber], an exact fraction over a fixed-width signed integer,
//!   always stored in reduced form. Zero denominators encode positive and
//!   negative infinity (`±1/0`) and NaN (`0/0`).
//! - [SlidingWindow], a window of at most `N` elements moving one step at a
//!   time over a borrowed slice.
//!
//! ```
//! use num_fraction::RationalNumber;
//!
//! let a = RationalNumber::new(1, 3);
//! let b = RationalNumber::new(5, 4);
//! assert_eq!(a - b, RationalNumber::new(-11, 12));
//! assert_eq!((2i32 * a).to_string(), "2/3");
//! assert_eq!(RationalNumber::new(1, 0) + b, RationalNumber::infinity());
//! ```

mod error;
mod rational;
mod window;
pub mod math;
pub mod traits;

pub use error::{DegenerateError, WindowError};
pub use rational::RationalNumber;
pub use traits::{Category, RationalBase};
pub use window::SlidingWindow;
