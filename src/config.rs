//! Configuration module
//!
//! Layers an optional `emulator.toml` file, `EMULATOR_`-prefixed environment
//! variables, and coded defaults. The listening port can additionally be
//! overridden with `-p`/`--port` on the command line.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub files: FilesConfig,
}

/// Server listening configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

/// Static file fallback configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Directory served for any unmatched route
    pub root: String,
    /// File names tried when a directory is requested
    pub index_files: Vec<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("emulator")
    }

    /// Load configuration from the given file path (without extension).
    /// A missing file is fine; defaults cover every key.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("EMULATOR"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("files.root", ".")?
            .set_default("files.index_files", vec!["index.html", "index.htm"])?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Scan command-line arguments for `-p <port>`, `--port <port>` or
/// `--port=<port>` and return the override, if any.
pub fn port_override<I>(args: I) -> Result<Option<u16>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = if arg == "-p" || arg == "--port" {
            args.next()
                .ok_or_else(|| format!("Missing value for {arg}"))?
        } else if let Some(rest) = arg.strip_prefix("--port=") {
            rest.to_string()
        } else {
            continue;
        };

        let port = value
            .parse::<u16>()
            .map_err(|e| format!("Invalid port '{value}': {e}"))?;
        return Ok(Some(port));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_when_no_config_file() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.files.root, ".");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.files.index_files, vec!["index.html", "index.htm"]);
    }

    #[test]
    fn port_override_short_flag() {
        assert_eq!(port_override(to_args(&["-p", "9090"])), Ok(Some(9090)));
    }

    #[test]
    fn port_override_long_flag() {
        assert_eq!(port_override(to_args(&["--port", "8000"])), Ok(Some(8000)));
        assert_eq!(port_override(to_args(&["--port=8001"])), Ok(Some(8001)));
    }

    #[test]
    fn port_override_absent() {
        assert_eq!(port_override(to_args(&[])), Ok(None));
        assert_eq!(port_override(to_args(&["--verbose"])), Ok(None));
    }

    #[test]
    fn port_override_rejects_bad_values() {
        assert!(port_override(to_args(&["-p"])).is_err());
        assert!(port_override(to_args(&["--port", "not-a-port"])).is_err());
        assert!(port_override(to_args(&["--port", "70000"])).is_err());
    }
}
