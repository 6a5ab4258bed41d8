//! Conversions between `Either` and the standard and ecosystem sum types.
//!
//! `Result` maps `Ok` to `Right` and `Err` to `Left`. The `either` crate's
//! type maps variant for variant.

use super::either::{from_option, Either};

impl<R> From<Option<R>> for Either<(), R> {
    fn from(option: Option<R>) -> Self {
        from_option(option)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> From<::either::Either<L, R>> for Either<L, R> {
    fn from(either: ::either::Either<L, R>) -> Self {
        match either {
            ::either::Either::Left(l) => Either::Left(l),
            ::either::Either::Right(r) => Either::Right(r),
        }
    }
}

impl<L, R> From<Either<L, R>> for ::either::Either<L, R> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => ::either::Either::Left(l),
            Either::Right(r) => ::either::Either::Right(r),
        }
    }
}

impl<L, R> Either<L, R> {
    /// Converts to a `Result`, with the right value as `Ok`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}
