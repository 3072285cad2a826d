/// Outcome of a fallible use-case: a failure on the left, a success on the right.
///
/// Exactly one arm is ever populated and the arm cannot change after
/// construction. Values are read by matching, so the wrong arm is never
/// reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Construct a failure.
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Construct a success.
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Transform the success, leaving a failure untouched.
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    /// Transform the failure, leaving a success untouched.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Chain another fallible step after a success.
    pub fn and_then<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => f(value),
        }
    }

    /// Collapse both arms into one value.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Hand the outcome to code that propagates with `?`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_exclusive() {
        let failure: Either<&str, i32> = left("boom");
        let success: Either<&str, i32> = right(7);

        assert!(failure.is_left() && !failure.is_right());
        assert!(success.is_right() && !success.is_left());
    }

    #[test]
    fn test_arm_accessors() {
        assert_eq!(left::<_, i32>("boom").left(), Some("boom"));
        assert_eq!(left::<_, i32>("boom").right(), None);
        assert_eq!(right::<&str, _>(7).right(), Some(7));
        assert_eq!(right::<&str, _>(7).left(), None);
    }

    #[test]
    fn test_map_only_touches_success() {
        let success: Either<&str, i32> = right(2);
        let failure: Either<&str, i32> = left("boom");

        assert_eq!(success.map(|n| n * 10), right(20));
        assert_eq!(failure.map(|n| n * 10), left("boom"));
        assert_eq!(failure.map_left(str::len), left(4));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let halve = |n: i32| {
            if n % 2 == 0 {
                right(n / 2)
            } else {
                left("odd")
            }
        };

        assert_eq!(right(8).and_then(halve).and_then(halve), right(2));
        assert_eq!(right(6).and_then(halve).and_then(halve), left("odd"));
        assert_eq!(left::<_, i32>("early").and_then(halve), left("early"));
    }

    #[test]
    fn test_fold() {
        let describe = |e: Either<&str, i32>| e.fold(|l| format!("L:{l}"), |r| format!("R:{r}"));
        assert_eq!(describe(left("x")), "L:x");
        assert_eq!(describe(right(1)), "R:1");
    }

    #[test]
    fn test_result_conversions() {
        let ok: Result<i32, &str> = Ok(1);
        let err: Result<i32, &str> = Err("boom");

        assert_eq!(Either::from(ok), right(1));
        assert_eq!(Either::from(err), left("boom"));
        assert_eq!(right::<&str, _>(1).into_result(), Ok(1));
        assert_eq!(Result::<i32, &str>::from(left("boom")), Err("boom"));
    }
}
