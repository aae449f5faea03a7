// libs/cita-cell/src/services/store.rs
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use crate::models::{Cita, CitaUpdate, NuevaCita};
use crate::services::range::DateRange;

/// Which display fields of the patient and doctor a query joins in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaFields {
    Nombre,
    NombreApellido,
}

impl PersonaFields {
    pub fn columns(&self) -> &'static str {
        match self {
            PersonaFields::Nombre => "id,nombre",
            PersonaFields::NombreApellido => "id,nombre,apellido",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
}

impl SortOrder {
    pub fn as_postgrest(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
        }
    }
}

/// Citas whose `fecha` falls inside `range`, both ends included.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    pub range: DateRange<Utc>,
    pub populate: PersonaFields,
    pub sort: Option<SortOrder>,
}

/// Persistence capability behind the cita handlers.
///
/// Single-record operations return `Ok(None)` when no row matches; `Err` is
/// reserved for failures of the store itself.
#[async_trait]
pub trait CitaStore: Send + Sync {
    async fn insert(&self, cita: NuevaCita) -> Result<Cita>;

    async fn find_all(&self) -> Result<Vec<Cita>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Cita>>;

    async fn update(&self, id: &str, changes: CitaUpdate) -> Result<Option<Cita>>;

    async fn delete(&self, id: &str) -> Result<Option<Cita>>;

    async fn find_in_range(&self, query: RangeQuery) -> Result<Vec<Cita>>;
}
