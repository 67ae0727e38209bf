use thiserror::Error;

/// Errors returned by generator operations.
///
/// Only argument validation can fail; every draw is otherwise total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A bounded draw was requested with a non-positive bound.
    #[error("bound must be positive, got {bound}")]
    InvalidArgument { bound: i32 },
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_the_bound() {
        let err = Error::InvalidArgument { bound: -5 };
        assert_eq!(err.to_string(), "bound must be positive, got -5");
    }
}
