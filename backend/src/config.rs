use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8092;
pub const DEFAULT_REFERENCE_PATH: &str = "scattered_lines.json";
pub const AUTH_HEADER: &str = "Authorization";
pub const EXPECTED_TOKEN: &str = "Authorization";

/// Fixed service settings.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    /// Reference set document, re-read on every request.
    pub reference_path: PathBuf,
    pub auth_header: String,
    pub expected_token: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            reference_path: PathBuf::from(DEFAULT_REFERENCE_PATH),
            auth_header: AUTH_HEADER.to_string(),
            expected_token: EXPECTED_TOKEN.to_string(),
        }
    }
}

impl ServiceConfig {
    #[cfg(test)]
    pub fn with_reference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_path = path.into();
        self
    }
}
