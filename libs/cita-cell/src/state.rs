// libs/cita-cell/src/state.rs
use std::sync::Arc;

use shared_config::AppConfig;
use shared_utils::clock::{Clock, SystemClock};

use crate::services::{AgendaService, CitaService, CitaStore, SupabaseCitaStore};

/// Shared, read-only state of the cita routes.
#[derive(Clone)]
pub struct CitaState {
    pub citas: CitaService,
    pub agenda: AgendaService,
}

impl CitaState {
    pub fn new(store: Arc<dyn CitaStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            citas: CitaService::new(Arc::clone(&store)),
            agenda: AgendaService::new(store, clock),
        }
    }

    /// Supabase-backed state reading the wall clock.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(Arc::new(SupabaseCitaStore::new(config)), Arc::new(SystemClock))
    }
}
