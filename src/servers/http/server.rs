//! Module to handle the HTTP server instances.
use std::net::SocketAddr;
use std::panic::Location;
use std::sync::Arc;

use axum_server::Handle;
use camino::Utf8PathBuf;
use derive_more::{Constructor, Display};
use futures::future::BoxFuture;
use futures::{FutureExt as _, TryFutureExt as _};
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{info, instrument};

use super::routes::router;
use super::Error;
use crate::bootstrap::jobs::Started;
use crate::servers::health::Reporter;
use crate::servers::logging::{SERVICE_HEALTH_LOG_TARGET, STARTED_ON};
use crate::servers::signals::{graceful_shutdown, Halted};

/// Knows how to bind the socket and build the service.
#[derive(Clone, Constructor, Debug, Display)]
#[display("intended_address: {bind_to}, public_dir: {public_dir}")]
pub struct Launcher {
    pub bind_to: SocketAddr,
    pub reporter: Arc<Reporter>,
    pub public_dir: Utf8PathBuf,
}

impl Launcher {
    /// Binds the socket and returns the serving future.
    ///
    /// The `Started` message is sent once the socket is bound, before the
    /// future is polled. The server shuts down gracefully when `rx_halt`
    /// resolves or the process receives a termination signal.
    ///
    /// # Errors
    ///
    /// Will return `Err` if it can't bind to the socket.
    #[instrument(skip(self, tx_start, rx_halt), fields(launcher = %self))]
    pub fn start(
        &self,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> Result<BoxFuture<'static, Result<(), Error>>, Error> {
        info!(target: SERVICE_HEALTH_LOG_TARGET, "Starting on: http://{}", self.bind_to);

        let socket = std::net::TcpListener::bind(self.bind_to).map_err(|e| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err: Arc::new(e),
            location: Location::caller(),
        })?;

        socket.set_nonblocking(true).map_err(|e| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err: Arc::new(e),
            location: Location::caller(),
        })?;

        let address = socket.local_addr().map_err(|e| Error::UnableToGetLocalAddress {
            err: Arc::new(e),
            location: Location::caller(),
        })?;

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down HTTP server on socket address: {address}"),
        ));

        let app = router(self.reporter.clone(), &self.public_dir, address);

        let running = axum_server::from_tcp(socket)
            .handle(handle)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .map_err(|e| Error::UnableToServe { err: Arc::new(e) })
            .inspect_ok(move |_| {
                info!(target: SERVICE_HEALTH_LOG_TARGET, "Stopped server running on: http://{}", address);
            });

        info!(target: SERVICE_HEALTH_LOG_TARGET, "{STARTED_ON}: http://{}", address);

        // The receiver may already be gone if nobody waits for the address.
        drop(tx_start.send(Started { address }));

        Ok(running.boxed())
    }
}

/// A stopped HTTP server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedHttpServer = HttpServer<Stopped>;

/// A running HTTP server.
#[allow(clippy::module_name_repetitions)]
pub type RunningHttpServer = HttpServer<Running>;

/// A HTTP server controller.
///
/// It's an state machine. It keeps the launcher between runs, so a stopped
/// server can be started again with the same configuration. The address may
/// change between runs when the configured port is `0`.
#[allow(clippy::module_name_repetitions)]
pub struct HttpServer<S> {
    pub state: S,
}

/// A stopped HTTP server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running HTTP server state.
pub struct Running {
    /// The address the server is listening on.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Result<Launcher, Error>>,
}

impl HttpServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the server and waits until it's listening.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the server can't bind to the socket or the
    /// server task fails before reporting its address.
    pub async fn start(self) -> Result<HttpServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(tx_start, rx_halt)?;

            server.await?;

            Ok::<Launcher, Error>(launcher)
        });

        let binding = match rx_start.await {
            Ok(started) => started.address,
            Err(_) => {
                // The launcher failed before sending the address.
                return Err(match task.await {
                    Ok(Err(err)) => err,
                    Ok(Ok(_)) => Error::TaskFailed {
                        err: Arc::new(std::io::Error::other("the server stopped before starting")),
                    },
                    Err(err) => Error::TaskFailed { err: Arc::new(err) },
                });
            }
        };

        Ok(HttpServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// Stops the server, waiting for the open connections to finish.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the halt message can't be sent or the server
    /// task failed.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|err| Error::UnableToSendHaltingMessage { err })?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::TaskFailed { err: Arc::new(err) })??;

        Ok(HttpServer {
            state: Stopped { launcher },
        })
    }
}
