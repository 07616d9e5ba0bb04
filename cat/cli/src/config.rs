use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9090;
/// Budget for one remote call, measured from the moment it is issued.
pub const CALL_DEADLINE: Duration = Duration::from_secs(5);

/// Connection settings for one invocation, built once from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub deadline: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            deadline: CALL_DEADLINE,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// `host:port`, as reported in diagnostics.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }

    /// Plaintext HTTP/2 endpoint URI for the channel.
    pub fn endpoint_uri(&self) -> String {
        format!("http://{}", self.address())
    }
}
