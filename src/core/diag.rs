//! Diagnostics for data that is dropped instead of surfaced as an error.
//!
//! With the `tracing` feature these go to `tracing::debug!`; without it they
//! are printed to stderr when `SW_DEBUG=1`.

use std::fmt;

use crate::core::SwError;

pub(crate) fn debug(args: fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!("{args}");
    }

    #[cfg(not(feature = "tracing"))]
    {
        if std::env::var("SW_DEBUG").ok().as_deref() == Some("1") {
            eprintln!("SW_DEBUG: {args}");
        }
    }
}

/// Turn a failed fetch into `None`, reporting what was lost.
pub(crate) fn log_err<T>(res: Result<T, SwError>, name: &str, symbol: &str) -> Option<T> {
    match res {
        Ok(data) => Some(data),
        Err(e) => {
            debug(format_args!("failed to fetch '{name}' for {symbol}: {e}"));
            None
        }
    }
}
