use std::sync::Arc;
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn with_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            supabase_service_role_key: None,
            citas_table: "citas".to_string(),
            pacientes_table: "pacientes".to_string(),
            medicos_table: "medicos".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
    
    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn cita_response(cita_id: &str, fecha: &str) -> serde_json::Value {
        json!({
            "id": cita_id,
            "fecha": fecha,
            "paciente_id": Uuid::new_v4().to_string(),
            "medico_id": Uuid::new_v4().to_string(),
            "motivo": "Control general",
            "estado": "pendiente",
            "created_at": "2024-01-01T00:00:00Z"
        })
    }

    pub fn cita_poblada_response(
        cita_id: &str,
        fecha: &str,
        paciente: &str,
        medico: &str,
    ) -> serde_json::Value {
        let paciente_id = Uuid::new_v4().to_string();
        let medico_id = Uuid::new_v4().to_string();
        json!({
            "id": cita_id,
            "fecha": fecha,
            "paciente_id": paciente_id,
            "medico_id": medico_id,
            "motivo": "Control general",
            "paciente": { "id": paciente_id, "nombre": paciente, "apellido": "Pérez" },
            "medico": { "id": medico_id, "nombre": medico, "apellido": "Gómez" }
        })
    }
    
    /// PostgREST error body.
    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "code": code,
            "details": null,
            "hint": null,
            "message": message
        })
    }
}
