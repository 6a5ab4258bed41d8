use std::iter::FusedIterator;

use super::either::Either;

/// Iterator over the right values of an iterator of `Either`s.
///
/// Lefts are skipped, rights are yielded in their original order. Created
/// by [`EitherIterator::values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<I> {
    inner: I,
}

impl<L, R, I> Iterator for Values<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Either::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any element may turn out to be a left.
        (0, self.inner.size_hint().1)
    }
}

impl<L, R, I> DoubleEndedIterator for Values<I>
where
    I: DoubleEndedIterator<Item = Either<L, R>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Either::into_option)
    }
}

impl<L, R, I> FusedIterator for Values<I> where I: FusedIterator<Item = Either<L, R>> {}

/// Extends iterators of `Either`s with right-side filtering.
pub trait EitherIterator<L, R>: Iterator<Item = Either<L, R>> {
    /// Keeps the right values and drops the lefts.
    ///
    /// ```
    /// use biased::{left, right, Either, EitherIterator};
    ///
    /// let eithers: Vec<Either<&str, &str>> = vec![left("1"), right("2"), right("3")];
    /// let values: Vec<_> = eithers.into_iter().values().collect();
    /// assert_eq!(values, ["2", "3"]);
    /// ```
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values { inner: self }
    }
}

impl<L, R, I> EitherIterator<L, R> for I where I: Iterator<Item = Either<L, R>> {}
