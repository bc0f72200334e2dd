//! Application state.

use std::sync::Arc;

use sreel_models::default_script;
use sreel_veo::{CredentialStore, VeoClient, VeoConfig};

use crate::config::ApiConfig;
use crate::controller::SceneController;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub controller: SceneController,
    pub credentials: CredentialStore,
}

impl AppState {
    /// Create new application state wired to the real Veo backend.
    pub fn new(config: ApiConfig, veo_config: VeoConfig) -> Self {
        let credentials = CredentialStore::from_env();
        let client = VeoClient::new(veo_config, credentials.clone());
        let controller = SceneController::new(
            default_script(),
            Arc::new(client),
            credentials.clone(),
            config.max_concurrent_generations,
        );

        Self {
            config,
            controller,
            credentials,
        }
    }
}
