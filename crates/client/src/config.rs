/// Static client configuration; read-only after construction.
#[derive(Debug, Clone)]
pub struct Config {
    host: String,
}

impl Config {
    /// `host` is the controller's base URL, e.g. `https://api.example.com`
    /// (no trailing slash).
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}
