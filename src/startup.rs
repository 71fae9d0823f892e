//! Application startup and server initialization.
//!
//! Binding and serving are separate steps so a caller can bind an ephemeral
//! port, learn the address, and then serve on it.

use std::io;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::routes;

/// Binds the listening socket and prints the startup line to stdout.
///
/// # Errors
///
/// Returns [`StartupError::Bind`] if the address is in use, not permitted,
/// or not resolvable.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(bind_error(&address))?;

    let port = listener
        .local_addr()
        .map_err(bind_error(&address))?
        .port();
    println!("Health server on port {}", port);
    info!(event_name = "server.listening", %address, port, "Health server listening");

    Ok(listener)
}

fn bind_error(address: &str) -> impl FnOnce(io::Error) -> StartupError + '_ {
    move |source| StartupError::Bind {
        address: address.to_string(),
        source,
    }
}

/// Serves the router on `listener` until the process is killed.
///
/// Errors on individual connections stay inside hyper and never reach here.
pub async fn serve(listener: TcpListener) -> Result<(), StartupError> {
    axum::serve(listener, routes::create_router()).await?;
    Ok(())
}

/// Initializes and runs the application server.
pub async fn run(config: &ServerConfig) -> Result<(), StartupError> {
    let listener = bind(config).await?;
    serve(listener).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_errors_during_bind_keep_the_address() {
        let err = bind_error("0.0.0.0:9004")(io::Error::from(io::ErrorKind::AddrNotAvailable));
        match err {
            StartupError::Bind { address, source } => {
                assert_eq!(address, "0.0.0.0:9004");
                assert_eq!(source.kind(), io::ErrorKind::AddrNotAvailable);
            }
            other => panic!("expected bind error, got {:?}", other),
        }
    }
}
