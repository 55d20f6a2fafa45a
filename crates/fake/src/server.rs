//! Harness for running the fake controller on an ephemeral port.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::{ControllerState, build_router};

/// A fake controller serving on an ephemeral local port.
///
/// The serving task is aborted when the handle is dropped.
pub struct FakeCloudController {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeCloudController {
    /// Spawn a controller with fresh state and random GUIDs.
    pub async fn spawn() -> std::io::Result<Self> {
        Self::spawn_with_state(ControllerState::default()).await
    }

    /// Spawn over explicit state (deterministic GUID sources, pre-seeded
    /// stores).
    pub async fn spawn_with_state(state: ControllerState) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = build_router(state);

        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!(%err, "fake controller stopped serving");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Base URL clients should point their `Config` at.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for FakeCloudController {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
