//! Errors that stop the server from starting or keep it from serving.
//!
//! Request handling has no error type: an unknown route is answered with a
//! plain 404, which is a defined response rather than a failure.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("could not bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
