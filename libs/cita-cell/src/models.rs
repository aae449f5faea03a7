// libs/cita-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ==============================================================================
// CORE CITA MODELS
// ==============================================================================

/// An appointment linking a patient and a doctor at `fecha`.
///
/// `paciente` and `medico` are only present when the store query joined the
/// referenced records. Any other column of the stored row is kept in
/// `detalles` and written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cita {
    pub id: String,
    pub fecha: DateTime<Utc>,
    pub paciente_id: String,
    pub medico_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paciente: Option<Persona>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medico: Option<Persona>,
    #[serde(flatten)]
    pub detalles: Map<String, Value>,
}

/// Display fields of a joined patient or doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Persona {
    pub id: String,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
}

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NuevaCita {
    pub fecha: DateTime<Utc>,
    pub paciente_id: String,
    pub medico_id: String,
    #[serde(flatten)]
    pub detalles: Map<String, Value>,
}

/// Partial update; absent fields are left as stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CitaUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paciente_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medico_id: Option<String>,
    #[serde(flatten)]
    pub detalles: Map<String, Value>,
}

impl CitaUpdate {
    pub fn is_empty(&self) -> bool {
        self.fecha.is_none()
            && self.paciente_id.is_none()
            && self.medico_id.is_none()
            && self.detalles.is_empty()
    }
}

/// Raw `?mes=&año=` parameters. Kept as strings so that a missing value and
/// a malformed one produce different errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitasMesQuery {
    pub mes: Option<String>,
    #[serde(rename = "año", alias = "anio")]
    pub anio: Option<String>,
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

pub const MSG_CITA_NO_ENCONTRADA: &str = "Cita no encontrada";
pub const MSG_CITA_ELIMINADA: &str = "Cita eliminada correctamente";
pub const MSG_FALTAN_MES_ANIO: &str = "Se requiere el mes y el año en los parámetros";
pub const MSG_SIN_CITAS_HOY: &str = "No hay citas programadas para hoy";
pub const MSG_CITAS_HOY: &str = "Citas del día recuperadas exitosamente";
pub const MSG_ERROR_CITAS_HOY: &str = "Error al obtener las citas del día";

/// Envelope of `GET /citas/hoy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyAgenda {
    pub mensaje: String,
    pub total: usize,
    pub data: Vec<Cita>,
}

impl DailyAgenda {
    pub fn from_citas(data: Vec<Cita>) -> Self {
        let mensaje = if data.is_empty() {
            MSG_SIN_CITAS_HOY
        } else {
            MSG_CITAS_HOY
        };

        Self {
            mensaje: mensaje.to_string(),
            total: data.len(),
            data,
        }
    }
}

/// Outcome of a single-record operation that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(found) => Lookup::Found(found),
            None => Lookup::NotFound,
        }
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitaError {
    /// A required query parameter was absent.
    #[error("{0}")]
    MissingParameter(String),

    /// A parameter was present but unusable (not a number, month out of range).
    #[error("{0}")]
    InvalidInput(String),

    /// The payload was rejected before reaching the store.
    #[error("{0}")]
    Validation(String),

    /// Any failure reported by the store.
    #[error("{0}")]
    Upstream(String),
}
