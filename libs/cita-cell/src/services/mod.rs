pub mod agenda;
pub mod cita;
pub mod range;
pub mod store;
pub mod supabase_store;

pub use agenda::AgendaService;
pub use cita::CitaService;
pub use range::{DateRange, month_range, range_for_month, range_for_today};
pub use store::{CitaStore, PersonaFields, RangeQuery, SortOrder};
pub use supabase_store::SupabaseCitaStore;

use crate::models::CitaError;

// `{:#}` keeps the whole context chain in the client-facing message.
pub(crate) fn upstream(error: anyhow::Error) -> CitaError {
    CitaError::Upstream(format!("{:#}", error))
}
