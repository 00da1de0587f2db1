//! Error rethrow policy.

use std::fmt;
use std::sync::Arc;

/// ThrowOnError decides whether an error should escape to the caller
/// instead of being stored on the entry.
pub enum ThrowOnError<E, C> {
    Flag(bool),
    /// Called with the error and the entry it belongs to.
    Predicate(Arc<dyn Fn(&E, &C) -> bool + Send + Sync>),
}

impl<E, C> ThrowOnError<E, C> {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&E, &C) -> bool + Send + Sync + 'static,
    {
        ThrowOnError::Predicate(Arc::new(f))
    }
}

impl<E, C> From<bool> for ThrowOnError<E, C> {
    fn from(flag: bool) -> Self {
        ThrowOnError::Flag(flag)
    }
}

impl<E, C> Clone for ThrowOnError<E, C> {
    fn clone(&self) -> Self {
        match self {
            ThrowOnError::Flag(flag) => ThrowOnError::Flag(*flag),
            ThrowOnError::Predicate(f) => ThrowOnError::Predicate(Arc::clone(f)),
        }
    }
}

impl<E, C> fmt::Debug for ThrowOnError<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrowOnError::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            ThrowOnError::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Resolves the policy for one error. An unset option never throws.
pub fn should_throw_error<E, C>(
    option: Option<&ThrowOnError<E, C>>,
    error: &E,
    context: &C,
) -> bool {
    match option {
        Some(ThrowOnError::Predicate(f)) => f(error, context),
        Some(ThrowOnError::Flag(flag)) => *flag,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FetchError {
        status: u16,
    }

    #[test]
    fn test_flag() {
        let error = FetchError { status: 500 };
        let on: ThrowOnError<FetchError, ()> = true.into();
        let off: ThrowOnError<FetchError, ()> = false.into();
        assert!(should_throw_error(Some(&on), &error, &()));
        assert!(!should_throw_error(Some(&off), &error, &()));
        assert!(!should_throw_error::<FetchError, ()>(None, &error, &()));
    }

    #[test]
    fn test_predicate() {
        let option = ThrowOnError::predicate(|e: &FetchError, key: &&str| {
            e.status >= 500 && *key == "todos"
        });
        assert!(should_throw_error(Some(&option), &FetchError { status: 503 }, &"todos"));
        assert!(!should_throw_error(Some(&option), &FetchError { status: 404 }, &"todos"));
        assert!(!should_throw_error(Some(&option), &FetchError { status: 503 }, &"posts"));
        assert_eq!(format!("{:?}", option.clone()), "Predicate(..)");
    }
}
