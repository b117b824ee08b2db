use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Negative sqrt")]
    NegativeSqrt,
    #[error("Integer overflow")]
    Overflow,
    #[error("factorial cache limit exceeded: requested {requested}, max {ceiling}")]
    CeilingExceeded { requested: usize, ceiling: usize },
}
