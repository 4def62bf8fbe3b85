// librepeated/src/session/builder.rs

use crate::config::SessionConfig;
use crate::session::handle::Session;
use crate::transport::Transport;
use crate::Result;

/// Helper to construct a Session with optional configuration.
#[derive(Default)]
pub struct SessionBuilder {
    transport: Option<Box<dyn Transport>>,
    config: SessionConfig,
}

impl SessionBuilder {
    /// Builder with the default configuration and no transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `config` for the node path and family tag.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an open Session. Without an explicit
    /// transport the configured device node is opened, which requires the
    /// `chardev` feature; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Session> {
        match self.transport {
            Some(t) => Session::new_with_transport(t, &self.config),
            None => open_default(&self.config),
        }
    }
}

#[cfg(feature = "chardev")]
fn open_default(config: &SessionConfig) -> Result<Session> {
    let t = crate::transport::ChardevTransport::open(&config.device_path)?;
    Session::new_with_transport(Box::new(t), config)
}

#[cfg(not(feature = "chardev"))]
fn open_default(_config: &SessionConfig) -> Result<Session> {
    Err(crate::Error::DeviceNotFound)
}
