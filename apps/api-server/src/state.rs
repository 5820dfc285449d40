//! Application state.

use std::sync::Arc;

use auth::JwtManager;
use registry::RegistryService;
use registry_store::RegistryStore;

use crate::config::Config;

/// Shared application state.
pub struct AppState<S: RegistryStore> {
    /// Server configuration.
    pub config: Config,
    /// The registry state machine.
    pub registry: RegistryService<S>,
    /// JWT manager.
    pub jwt_manager: JwtManager,
}

impl<S: RegistryStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, registry: RegistryService<S>, jwt_manager: JwtManager) -> Self {
        Self {
            config,
            registry,
            jwt_manager,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config, registry, and JWT manager.
pub fn create_shared_state<S: RegistryStore>(
    config: Config,
    registry: RegistryService<S>,
    jwt_manager: JwtManager,
) -> SharedState<S> {
    Arc::new(AppState::new(config, registry, jwt_manager))
}
