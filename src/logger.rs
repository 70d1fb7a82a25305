//! Logger module
//!
//! Plain stdout/stderr logging helpers. The wifi/password/time lines are
//! the diagnostic output the emulator produces instead of real device
//! actions; they never reach the client.

use crate::config::Config;
use hyper::{Method, Uri, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Device emulator started");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Static file root: {}", config.files.root);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(size: usize) {
    println!("[Response] Sent 200 OK ({size} bytes)");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Stopped accepting connections, releasing socket");
}

pub fn log_wifi_attempt(ssid: &str, pwd: &str) {
    println!("Tried to connect to wifi {ssid} with pwd {pwd}");
}

pub fn log_password_update(pwd: &str) {
    println!("Set password to: {pwd}");
}

pub fn log_time_update(value: &str) {
    println!("Set time to: {value}");
}
