// libs/cita-cell/src/services/cita.rs
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::models::{Cita, CitaError, CitaUpdate, Lookup, NuevaCita};
use crate::services::store::CitaStore;
use crate::services::upstream;

/// Single-record operations on citas.
#[derive(Clone)]
pub struct CitaService {
    store: Arc<dyn CitaStore>,
}

impl CitaService {
    pub fn new(store: Arc<dyn CitaStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: Value) -> Result<Cita, CitaError> {
        let nueva: NuevaCita = serde_json::from_value(payload)
            .map_err(|e| CitaError::Validation(e.to_string()))?;

        require_reference("paciente_id", &nueva.paciente_id)?;
        require_reference("medico_id", &nueva.medico_id)?;

        let cita = self.store.insert(nueva).await.map_err(upstream)?;
        info!("Cita {} created for {}", cita.id, cita.fecha);

        Ok(cita)
    }

    pub async fn list(&self) -> Result<Vec<Cita>, CitaError> {
        let citas = self.store.find_all().await.map_err(upstream)?;
        debug!("Listed {} citas", citas.len());
        Ok(citas)
    }

    pub async fn get(&self, id: &str) -> Result<Lookup<Cita>, CitaError> {
        debug!("Fetching cita {}", id);
        let cita = self.store.find_by_id(id).await.map_err(upstream)?;
        Ok(cita.into())
    }

    /// An empty payload leaves the row untouched and returns it as stored.
    pub async fn update(&self, id: &str, payload: Value) -> Result<Lookup<Cita>, CitaError> {
        let changes: CitaUpdate = serde_json::from_value(payload)
            .map_err(|e| CitaError::Validation(e.to_string()))?;

        if let Some(paciente_id) = &changes.paciente_id {
            require_reference("paciente_id", paciente_id)?;
        }
        if let Some(medico_id) = &changes.medico_id {
            require_reference("medico_id", medico_id)?;
        }

        if changes.is_empty() {
            debug!("Empty update for cita {}, returning stored row", id);
            return self.get(id).await;
        }

        let updated = self.store.update(id, changes).await.map_err(upstream)?;
        if updated.is_some() {
            info!("Cita {} updated", id);
        }

        Ok(updated.into())
    }

    pub async fn delete(&self, id: &str) -> Result<Lookup<Cita>, CitaError> {
        let deleted = self.store.delete(id).await.map_err(upstream)?;
        if deleted.is_some() {
            info!("Cita {} deleted", id);
        }

        Ok(deleted.into())
    }
}

fn require_reference(field: &str, value: &str) -> Result<(), CitaError> {
    if value.trim().is_empty() {
        return Err(CitaError::Validation(format!("El campo {} es obligatorio", field)));
    }
    Ok(())
}
