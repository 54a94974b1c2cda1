//! HTTP service over tiny_http.
//!
//! A fixed pool of worker threads shares one listener and one [`App`].
//! Workers poll with a timeout so a shutdown flag is noticed between requests.

use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tiny_http::{Request, Server};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::core::{PackSizeProvider, SolveOptions};
use crate::error::{PackError, Result};

pub mod handlers;
pub mod ui;

pub use handlers::{Reply, route};

/// Request bodies past this are truncated before parsing.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// State shared by every worker.
pub struct App {
    provider: Arc<dyn PackSizeProvider>,
    options: SolveOptions,
    default_order: i64,
}

impl App {
    pub fn new(provider: Arc<dyn PackSizeProvider>, options: SolveOptions, default_order: i64) -> Self {
        Self {
            provider,
            options,
            default_order,
        }
    }

    pub fn provider(&self) -> &dyn PackSizeProvider {
        self.provider.as_ref()
    }

    pub const fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Order prefilled in the UI form.
    pub const fn default_order(&self) -> i64 {
        self.default_order
    }
}

/// A running server. Dropping it without [`ServerHandle::shutdown`] leaves
/// the workers running until the process exits.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

impl ServerHandle {
    /// Address actually bound; differs from the configured one for port 0.
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting requests and wait for in-flight ones to finish.
    pub fn shutdown(self) {
        self.shutdown.store(true, Ordering::SeqCst);
        for worker in self.workers {
            if worker.join().is_err() {
                warn!("server worker panicked");
            }
        }
        info!(addr = %self.addr, "server stopped");
    }
}

/// Bind and spawn the worker pool.
pub fn start(app: Arc<App>, config: &ServerConfig) -> Result<ServerHandle> {
    let server = Server::http(config.addr())
        .map_err(|err| PackError::Server(format!("bind {}: {err}", config.addr())))?;
    let addr = server
        .server_addr()
        .to_ip()
        .ok_or_else(|| PackError::Server("listener has no IP address".to_string()))?;

    let server = Arc::new(server);
    let shutdown = Arc::new(AtomicBool::new(false));
    let poll = config.poll_interval();

    let mut workers = Vec::with_capacity(config.workers);
    for id in 0..config.workers {
        let server = Arc::clone(&server);
        let app = Arc::clone(&app);
        let shutdown = Arc::clone(&shutdown);
        let worker = std::thread::Builder::new()
            .name(format!("packcalc-http-{id}"))
            .spawn(move || worker_loop(id, &server, &app, &shutdown, poll))?;
        workers.push(worker);
    }

    info!(%addr, workers = config.workers, "server listening");
    Ok(ServerHandle {
        addr,
        shutdown,
        workers,
    })
}

/// Run until SIGINT or SIGTERM, then drain the workers.
pub fn serve(app: App, config: &ServerConfig) -> Result<()> {
    let handle = start(Arc::new(app), config)?;
    wait_for_shutdown_signal()?;
    info!("shutdown requested");
    handle.shutdown();
    Ok(())
}

fn worker_loop(id: usize, server: &Server, app: &App, shutdown: &AtomicBool, poll: Duration) {
    debug!(worker = id, "worker started");
    while !shutdown.load(Ordering::SeqCst) {
        match server.recv_timeout(poll) {
            Ok(Some(request)) => handle_request(app, request),
            Ok(None) => {}
            Err(err) => warn!(worker = id, error = %err, "failed to receive request"),
        }
    }
    debug!(worker = id, "worker stopped");
}

fn handle_request(app: &App, mut request: Request) {
    let started = Instant::now();
    let method = request.method().to_string();
    let url = request.url().to_string();
    let path = url.split_once('?').map_or(url.as_str(), |(path, _)| path);

    let reply = match read_body(request.as_reader(), MAX_BODY_BYTES) {
        Ok(body) => route(app, &method, path, &body),
        Err(reply) => reply,
    };

    let status = reply.status;
    if let Err(err) = request.respond(reply.into_response()) {
        warn!(%method, path, error = %err, "failed to send response");
    }
    info!(%method, path, status, latency = ?started.elapsed(), "request");
}

/// Read at most `limit` bytes; one byte more means the body is rejected
/// rather than cut short.
fn read_body(reader: impl Read, limit: u64) -> std::result::Result<String, Reply> {
    let mut body = String::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_string(&mut body)
        .map_err(|err| Reply::bad_request(&format!("read request body: {err}")))?;
    if body.len() as u64 > limit {
        return Err(Reply::payload_too_large(limit));
    }
    Ok(body)
}

fn wait_for_shutdown_signal() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(shutdown_signal())
}

#[cfg(unix)]
async fn shutdown_signal() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        _ = terminate.recv() => {}
    }
    Ok(())
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
