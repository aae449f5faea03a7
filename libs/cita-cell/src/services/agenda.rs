// libs/cita-cell/src/services/agenda.rs
use std::sync::Arc;

use chrono::Local;
use tracing::debug;

use shared_utils::clock::Clock;

use crate::models::{Cita, CitaError, CitasMesQuery, DailyAgenda, MSG_FALTAN_MES_ANIO};
use crate::services::range::{range_for_month, range_for_today};
use crate::services::store::{CitaStore, PersonaFields, RangeQuery, SortOrder};
use crate::services::upstream;

/// Date-filtered, read-only views over the citas.
#[derive(Clone)]
pub struct AgendaService {
    store: Arc<dyn CitaStore>,
    clock: Arc<dyn Clock>,
}

impl AgendaService {
    pub fn new(store: Arc<dyn CitaStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Citas of a calendar month with patient and doctor names joined in,
    /// in store order.
    pub async fn citas_por_mes(&self, query: CitasMesQuery) -> Result<Vec<Cita>, CitaError> {
        let (mes, anio) = match (non_blank(query.mes), non_blank(query.anio)) {
            (Some(mes), Some(anio)) => (mes, anio),
            _ => return Err(CitaError::MissingParameter(MSG_FALTAN_MES_ANIO.to_string())),
        };

        let range = range_for_month(&Local, &mes, &anio)?;
        debug!("Fetching citas for {}/{} between {} and {}", mes, anio, range.start, range.end);

        self.store
            .find_in_range(RangeQuery {
                range: range.to_utc(),
                populate: PersonaFields::Nombre,
                sort: None,
            })
            .await
            .map_err(upstream)
    }

    /// Today's citas, earliest first, with full patient and doctor names.
    pub async fn citas_de_hoy(&self) -> Result<DailyAgenda, CitaError> {
        let range = range_for_today(&self.clock.now());
        debug!("Fetching citas between {} and {}", range.start, range.end);

        let citas = self.store
            .find_in_range(RangeQuery {
                range: range.to_utc(),
                populate: PersonaFields::NombreApellido,
                sort: Some(SortOrder::Ascending),
            })
            .await
            .map_err(upstream)?;

        Ok(DailyAgenda::from_citas(citas))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
