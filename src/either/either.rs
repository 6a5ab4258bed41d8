use super::error::AbsentValueError;

/// The outcome of an operation that may fail.
///
/// `Left` holds the alternative (failure) value, `Right` holds the success
/// value. All combinators are right-biased: they act on `Right` and carry a
/// `Left` through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// Alternative value.
    Left(L),
    /// Success value.
    Right(R),
}

/// Creates a left instance.
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a right instance.
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Right-biased construction from two suppliers.
///
/// `right` is always evaluated first. If it produces a value, that value is
/// wrapped in `Right` and `left` is never called. Otherwise `left` is
/// evaluated and its result is wrapped in `Left`.
///
/// ```
/// use biased::{either, right, Either};
///
/// let e: Either<&str, i32> = either(|| unreachable!(), || Some(2));
/// assert_eq!(e, right(2));
/// ```
pub fn either<L, R>(left: impl FnOnce() -> L, right: impl FnOnce() -> Option<R>) -> Either<L, R> {
    match right() {
        Some(value) => Either::Right(value),
        None => {
            log::trace!("right supplier produced no value, evaluating left supplier");
            Either::Left(left())
        }
    }
}

/// Creates an instance from an option.
///
/// A present value becomes `Right`. An empty option becomes `Left(())`: the
/// left side carries no information, which the unit type makes explicit. Use
/// [`from_option_or_else`] when the left side needs a real value.
pub fn from_option<R>(option: Option<R>) -> Either<(), R> {
    from_option_or_else(option, || ())
}

/// Creates an instance from an option, taking the left value from `left`
/// if the option is empty. `left` is not evaluated otherwise.
pub fn from_option_or_else<L, R>(option: Option<R>, left: impl FnOnce() -> L) -> Either<L, R> {
    match option {
        Some(value) => Either::Right(value),
        None => {
            log::trace!("empty option converted to left");
            Either::Left(left())
        }
    }
}

impl<L, R> Either<L, R> {
    /// Returns true if this is a `Left`.
    pub fn is_left(&self) -> bool {
        match *self {
            Self::Left(_) => true,
            Self::Right(_) => false,
        }
    }

    /// Returns true if this is a `Right`.
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Returns the left value.
    ///
    /// Fails with [`AbsentValueError::Left`] if this is a `Right`.
    pub fn left(&self) -> Result<&L, AbsentValueError> {
        match self {
            Self::Left(l) => Ok(l),
            Self::Right(_) => Err(AbsentValueError::Left),
        }
    }

    /// Returns the right value.
    ///
    /// Fails with [`AbsentValueError::Right`] if this is a `Left`.
    pub fn right(&self) -> Result<&R, AbsentValueError> {
        match self {
            Self::Left(_) => Err(AbsentValueError::Right),
            Self::Right(r) => Ok(r),
        }
    }

    /// Takes the left value out, see [`Either::left`].
    pub fn into_left(self) -> Result<L, AbsentValueError> {
        match self {
            Self::Left(l) => Ok(l),
            Self::Right(_) => Err(AbsentValueError::Left),
        }
    }

    /// Takes the right value out, see [`Either::right`].
    pub fn into_right(self) -> Result<R, AbsentValueError> {
        match self {
            Self::Left(_) => Err(AbsentValueError::Right),
            Self::Right(r) => Ok(r),
        }
    }

    /// Older name of [`Either::left`].
    ///
    /// This used to return an absent placeholder on a `Right`. It now fails
    /// like the strict accessor; use [`Either::as_ref`] or a `match` for a
    /// read that tolerates either side.
    #[deprecated(note = "use `left`, which fails the same way on a `Right`")]
    pub fn get_left(&self) -> Result<&L, AbsentValueError> {
        self.left()
    }

    /// Older name of [`Either::right`].
    ///
    /// This used to return an absent placeholder on a `Left`. It now fails
    /// like the strict accessor; use [`Either::into_option`] for a read that
    /// tolerates a `Left`.
    #[deprecated(note = "use `right`, which fails the same way on a `Left`")]
    pub fn get_right(&self) -> Result<&R, AbsentValueError> {
        self.right()
    }

    /// Borrows both sides.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match *self {
            Self::Left(ref inner) => Either::Left(inner),
            Self::Right(ref inner) => Either::Right(inner),
        }
    }

    /// Mutably borrows both sides.
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match *self {
            Self::Left(ref mut inner) => Either::Left(inner),
            Self::Right(ref mut inner) => Either::Right(inner),
        }
    }

    /// Folds both sides into a single value of type `X`.
    ///
    /// Exactly one of `on_left` and `on_right` is applied.
    ///
    /// ```
    /// use biased::{right, Either};
    ///
    /// let e: Either<bool, String> = right("right".to_string());
    /// assert_eq!(e.fold(|_| "left".to_string(), |r| r + " side"), "right side");
    /// ```
    pub fn fold<X>(self, on_left: impl FnOnce(L) -> X, on_right: impl FnOnce(R) -> X) -> X {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }

    /// Maps over the right value if present.
    ///
    /// On a `Left` the mapper is not called and only the right type changes.
    pub fn map<T>(self, mapper: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(mapper(r)),
        }
    }

    /// Maps over the left value if present.
    pub fn map_left<M>(self, mapper: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Self::Left(l) => Either::Left(mapper(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Like [`Either::map`], but the mapper returns an `Either` itself and
    /// the result is not nested.
    ///
    /// A `Left` short-circuits: the mapper is not called.
    pub fn flat_map<U>(self, mapper: impl FnOnce(R) -> Either<L, U>) -> Either<L, U> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => mapper(r),
        }
    }

    /// Alias for [`Either::flat_map`].
    pub fn and_then<U>(self, mapper: impl FnOnce(R) -> Either<L, U>) -> Either<L, U> {
        self.flat_map(mapper)
    }

    /// Hands the value to the consumer for its side.
    pub fn accept(&self, left_consumer: impl FnOnce(&L), right_consumer: impl FnOnce(&R)) {
        match self {
            Self::Left(l) => left_consumer(l),
            Self::Right(r) => right_consumer(r),
        }
    }

    /// Hands the right value to `right_consumer`; does nothing on a `Left`.
    pub fn accept_right(&self, right_consumer: impl FnOnce(&R)) {
        if let Self::Right(r) = self {
            right_consumer(r);
        }
    }

    /// Returns the right value if present, otherwise `other`.
    pub fn right_or(self, other: R) -> R {
        match self {
            Self::Left(_) => other,
            Self::Right(r) => r,
        }
    }

    /// Returns the right value if present, otherwise the result of `other`.
    pub fn right_or_else(self, other: impl FnOnce() -> R) -> R {
        match self {
            Self::Left(_) => other(),
            Self::Right(r) => r,
        }
    }

    /// Returns `self` if it is a `Right`, otherwise the `Either` produced by
    /// `other`.
    pub fn or_else(self, other: impl FnOnce() -> Either<L, R>) -> Either<L, R> {
        match self {
            Self::Left(_) => other(),
            right @ Self::Right(_) => right,
        }
    }

    /// Returns the right value, or the error built by `error` if this is a
    /// `Left`.
    ///
    /// ```
    /// use biased::{left, Either};
    ///
    /// fn lookup() -> Result<u32, String> {
    ///     let e: Either<&str, u32> = left("missing");
    ///     let value = e.ok_or_else(|| "no value".to_string())?;
    ///     Ok(value)
    /// }
    ///
    /// assert_eq!(lookup(), Err("no value".to_string()));
    /// ```
    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<R, E> {
        match self {
            Self::Left(_) => Err(error()),
            Self::Right(r) => Ok(r),
        }
    }

    /// Converts to an option over the right side. The left value is lost.
    pub fn into_option(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// The right value as an iterator of zero or one element.
    ///
    /// Meant for `flat_map` over an iterator of `Either`s, which keeps the
    /// right values and drops the lefts.
    ///
    /// ```
    /// use biased::{left, right, Either};
    ///
    /// let eithers: Vec<Either<&str, &str>> = vec![left("1"), right("2"), right("3")];
    /// let values: Vec<_> = eithers.into_iter().flat_map(Either::values).collect();
    /// assert_eq!(values, ["2", "3"]);
    /// ```
    pub fn values(self) -> std::option::IntoIter<R> {
        self.into_option().into_iter()
    }
}
