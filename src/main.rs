use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod http;
mod logger;
mod server;
mod state;

use state::AppState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load()?;
    if let Some(port) = config::port_override(std::env::args().skip(1))? {
        cfg.server.port = port;
    }

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let state = Arc::new(AppState::new(cfg));

    logger::log_server_start(&addr, &state.config);

    let shutdown = server::signal::spawn_shutdown_listener();
    run_accept_loop(listener, state, &shutdown).await;

    // Listener dropped in the accept loop; socket already released
    Ok(())
}

/// Accept connections until an interrupt signal arrives, then stop
/// accepting and drop the listener. In-flight connections finish in their
/// own tasks.
async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: &tokio::sync::Notify,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        let access_log = state
                            .cached_access_log
                            .load(std::sync::atomic::Ordering::Relaxed);
                        if access_log {
                            logger::log_connection_accepted(&peer_addr);
                        }
                        handle_connection(stream, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    drop(listener);
}

/// Serve a single connection in a spawned task. Each request on the
/// connection is handled synchronously to completion by the router.
fn handle_connection(stream: tokio::net::TcpStream, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state_clone = Arc::clone(&state);
                async move { handler::handle_request(req, state_clone).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
