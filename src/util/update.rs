//! Data update helpers.

use std::fmt;

/// Updater is either a replacement value or a function of the old value.
pub enum Updater<T> {
    Value(T),
    Fn(Box<dyn FnOnce(T) -> T>),
}

impl<T> Updater<T> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce(T) -> T + 'static,
    {
        Updater::Fn(Box::new(f))
    }
}

impl<T: fmt::Debug> fmt::Debug for Updater<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Updater::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Applies an updater to the current value.
pub fn functional_update<T>(updater: Updater<T>, input: T) -> T {
    match updater {
        Updater::Value(v) => v,
        Updater::Fn(f) => f(input),
    }
}

/// Placeholder that keeps showing the previous data while a new key loads.
pub fn keep_previous_data<T>(previous: T) -> T {
    previous
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_functional_update() {
        assert_eq!(functional_update(Updater::Value(5), 1), 5);
        assert_eq!(functional_update(Updater::from_fn(|n: i32| n + 1), 1), 2);
    }

    #[test]
    fn test_keep_previous_data() {
        let data = Value::list([1, 2]);
        assert!(keep_previous_data(data.clone()).same(&data));
        assert_eq!(keep_previous_data(None::<Value>), None);
    }
}
