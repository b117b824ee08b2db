use crate::fatal::fatal;

// `map`, `is_some` and `is_none` are the inherent std methods.
pub trait OptionExt<T>: Sized {
    fn unwrap_or_abort(self) -> T {
        self.expect_or_abort("called unwrap() on None Option")
    }

    fn expect_or_abort(self, msg: &str) -> T;

    // Monadic bind
    fn then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    // Lazy default
    fn otherwise<F>(self, f: F) -> T
    where
        F: FnOnce() -> T;

    // Eager default
    fn value_or(self, default: T) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    fn expect_or_abort(self, msg: &str) -> T {
        match self {
            Some(value) => value,
            None => fatal(msg),
        }
    }

    fn then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Some(value) => f(value),
            None => None,
        }
    }

    fn otherwise<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Some(value) => value,
            None => f(),
        }
    }

    fn value_or(self, default: T) -> T {
        match self {
            Some(value) => value,
            None => default,
        }
    }
}
