pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Validates a construction argument, returning early with
/// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) when the
/// condition does not hold.
///
/// The error message is the stringified condition, e.g. `from <= to`.
#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    log::debug!("rejected argument {name}: {condition}");
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}
