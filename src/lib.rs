//! A right-biased `Either` value type.
//!
//! `Either<L, R>` holds one of two values: `Left` is the alternative (usually
//! an error), `Right` is the success value. Combinators such as
//! [`Either::map`] and [`Either::flat_map`] operate on the right side and pass
//! lefts through untouched.
//!
//! ```
//! use biased::{left, right, Either};
//!
//! let parsed: Either<String, i32> = right(20);
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled.right(), Ok(&40));
//!
//! let failed: Either<String, i32> = left("bad input".to_string());
//! assert_eq!(failed.map(|n| n * 2).right_or(0), 0);
//! ```

pub mod either {
    pub mod either;
    pub mod error;
    pub mod interop;
    pub mod values;
}

pub use crate::either::either::{either, from_option, from_option_or_else, left, right, Either};
pub use crate::either::error::AbsentValueError;
pub use crate::either::values::{EitherIterator, Values};
