use crate::fatal::fatal;
use std::fmt::Debug;

// `map`, `is_ok` and `is_err` are the inherent std methods.
pub trait ResultExt<T, E>: Sized {
    fn unwrap_or_abort(self) -> T
    where
        E: Debug;

    fn expect_or_abort(self, msg: &str) -> T;

    // Extracting the error of a successful result is a logic error, not `None`.
    fn error(self) -> E;

    // Monadic bind, short-circuits on the first error
    fn then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    // Recover from the error payload
    fn otherwise<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn unwrap_or_abort(self) -> T
    where
        E: Debug,
    {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&format!("called unwrap() on Err Result: {:?}", err)),
        }
    }

    fn expect_or_abort(self, msg: &str) -> T {
        match self {
            Ok(value) => value,
            Err(_) => fatal(msg),
        }
    }

    fn error(self) -> E {
        match self {
            Ok(_) => fatal("called error() on Ok Result"),
            Err(err) => err,
        }
    }

    fn then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => f(value),
            Err(err) => Err(err),
        }
    }

    fn otherwise<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Ok(value) => value,
            Err(err) => f(err),
        }
    }
}
