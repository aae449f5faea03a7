// libs/cita-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::handlers;
use crate::state::CitaState;

pub fn cita_routes(state: Arc<CitaState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_citas).post(handlers::create_cita))
        // Static segments take precedence over `/{cita_id}`
        .route("/mes", get(handlers::list_citas_by_month))
        .route("/hoy", get(handlers::list_citas_today))
        .route(
            "/{cita_id}",
            get(handlers::get_cita)
                .put(handlers::update_cita)
                .delete(handlers::delete_cita),
        )
        .with_state(state)
}
