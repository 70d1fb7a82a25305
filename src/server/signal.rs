// Signal handling module
//
// SIGINT (Ctrl+C) and SIGTERM stop the accept loop; the listener is dropped
// and the socket released before the process exits. No reload signals: the
// emulator's state is throwaway by design.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn a background task that listens for interrupt signals and returns
/// the `Notify` the accept loop waits on.
#[cfg(unix)]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    use tokio::signal::unix::{signal, SignalKind};

    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => println!("\n[SIGNAL] SIGTERM received, shutting down"),
            _ = sigint.recv() => println!("\n[SIGNAL] SIGINT received, shutting down"),
        }
        notifier.notify_waiters();
    });

    shutdown
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_shutdown_listener() -> Arc<Notify> {
    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);

    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("\n[SIGNAL] Ctrl+C received, shutting down");
            notifier.notify_waiters();
        }
    });

    shutdown
}
