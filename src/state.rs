//! Application state module
//!
//! Holds the loaded configuration plus the mutable device fixture values the
//! emulator exposes. One instance lives for the whole process behind an
//! `Arc`, shared by every connection task.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::config::Config;

/// Application state shared across connection tasks
pub struct AppState {
    pub config: Config,
    pub device: DeviceState,

    // Cached config value for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            device: DeviceState::new(),
            cached_access_log,
        }
    }
}

/// Mutable fixture values simulating device status.
///
/// Counters are monotonically non-decreasing for the process lifetime and
/// nothing is persisted. `ap_active` stores the raw text of the last write,
/// not a parsed boolean, so clients see back exactly what they sent.
pub struct DeviceState {
    log_counter: AtomicU64,
    login_counter: AtomicU64,
    hostname: RwLock<String>,
    ap_active: RwLock<String>,
}

impl DeviceState {
    pub fn new() -> Self {
        Self {
            log_counter: AtomicU64::new(0),
            login_counter: AtomicU64::new(0),
            hostname: RwLock::new("A beatiful thing".to_string()),
            ap_active: RwLock::new("true".to_string()),
        }
    }

    /// Increment the log counter, returning the value before the increment.
    pub fn bump_log_counter(&self) -> u64 {
        self.log_counter.fetch_add(1, Ordering::SeqCst)
    }

    pub fn login_count(&self) -> u64 {
        self.login_counter.load(Ordering::SeqCst)
    }

    pub fn bump_login_counter(&self) {
        self.login_counter.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn hostname(&self) -> String {
        self.hostname.read().await.clone()
    }

    pub async fn set_hostname(&self, value: String) {
        *self.hostname.write().await = value;
    }

    pub async fn ap_active(&self) -> String {
        self.ap_active.read().await.clone()
    }

    pub async fn set_ap_active(&self, value: String) {
        *self.ap_active.write().await = value;
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}
