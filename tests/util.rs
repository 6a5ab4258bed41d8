// Sugar for checking sides in tests.
// Need `AbsentValueError` in scope.
#[macro_export]
macro_rules! assert_right_absent {
    ($either: expr) => {
        assert_eq!($either.right(), Err(AbsentValueError::Right))
    };
}

#[macro_export]
macro_rules! assert_left_absent {
    ($either: expr) => {
        assert_eq!($either.left(), Err(AbsentValueError::Left))
    };
}

// Closure that fails the test when called.
#[macro_export]
macro_rules! never {
    () => {
        |_| panic!("must not be called")
    };
}
