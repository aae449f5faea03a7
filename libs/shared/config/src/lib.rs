use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_service_role_key: Option<String>,
    pub citas_table: String,
    pub pacientes_table: String,
    pub medicos_table: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            supabase_service_role_key: env::var("SUPABASE_SERVICE_ROLE_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            citas_table: env_or_default("CITAS_TABLE", "citas"),
            pacientes_table: env_or_default("PACIENTES_TABLE", "pacientes"),
            medicos_table: env_or_default("MEDICOS_TABLE", "medicos"),
            host: env_or_default("HOST", "0.0.0.0"),
            port: env::var("PORT")
                .ok()
                .and_then(|port| match port.parse::<u16>() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("PORT is not a valid port number ({}), using default", port);
                        None
                    }
                })
                .unwrap_or(3000),
        };
        
        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }
        
        config
    }
    
    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() 
            && !self.supabase_anon_key.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
