use crate::config::Config;
use crate::framework::{DispatchClient, DispatchServer};
use crate::provider::DataProvider;
use tracing::{error, info, warn};

/// Runtime orchestrator for the dispatcher.
///
/// `DispatchSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the dispatch server
/// - **Provider Wiring**: handing the chosen [`DataProvider`] to the server loop
///
/// # Example
///
/// ```ignore
/// let system = DispatchSystem::new(&config, SpreadsheetProvider::new("database"));
/// let reply = transport::do_get(&system.client, event).await;
/// system.shutdown().await?;
/// ```
pub struct DispatchSystem {
    /// Client for sending requests to the dispatch server
    pub client: DispatchClient,

    handle: tokio::task::JoinHandle<()>,
}

impl DispatchSystem {
    /// Creates the server, injects `provider`, and spawns the loop.
    ///
    /// Must be called from within a Tokio runtime. A `channel_capacity` of zero
    /// is raised to one.
    pub fn new<P>(config: &Config, provider: P) -> Self
    where
        P: DataProvider + 'static,
    {
        if config.channel_capacity == 0 {
            warn!("channel_capacity is 0, using 1");
        }
        let (server, client) = DispatchServer::new(config.channel_capacity);
        let handle = tokio::spawn(server.run(provider));
        info!(
            spreadsheet = %config.spreadsheet_name,
            capacity = config.channel_capacity,
            "Dispatch system started"
        );
        Self { client, handle }
    }

    /// Drops the client and waits for the server to drain and exit.
    ///
    /// Clones of [`client`](Self::client) handed out earlier keep the server
    /// alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the server shut down cleanly
    /// - `Err(String)` if the server task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Dispatch server task failed: {:?}", e);
            return Err(format!("Dispatch server task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
