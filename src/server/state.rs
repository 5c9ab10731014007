//! Application state shared across HTTP handlers

use crate::core::Gateway;
use crate::core::router::Dispatcher;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        self.gateway.dispatcher()
    }
}
