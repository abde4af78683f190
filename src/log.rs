//! Crate-internal logging.
//!
//! Conversions and parsing log through `debug!`/`warn!`. With the `tracing`
//! feature these are the `tracing` macros; without it they swallow their
//! arguments. Neither form is part of the public API.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($field:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_warn {
    ($($field:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {log_debug as debug, log_warn as warn};

#[cfg(test)]
mod tests {
    use super::{debug, warn};

    #[test]
    fn accepts_structured_fields() {
        let value = 1e-30;
        debug!(value, unit = "pt", "converted");
        warn!(%value, unit = "mm", "no exact form, converting in binary");
        assert!(value > 0.0);
    }
}
