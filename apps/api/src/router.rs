use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use cita_cell::{cita_routes, CitaState};
use shared_config::AppConfig;

pub fn create_router(config: Arc<AppConfig>) -> Router {
    let cita_state = Arc::new(CitaState::from_config(&config));

    Router::new()
        .route("/", get(|| async { "Citas API is running!" }))
        .nest("/citas", cita_routes(cita_state))
}
