// libs/cita-cell/src/services/supabase_store.rs
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Cita, CitaUpdate, NuevaCita};
use crate::services::store::{CitaStore, RangeQuery};

/// [`CitaStore`] backed by the PostgREST API of a Supabase project.
pub struct SupabaseCitaStore {
    supabase: SupabaseClient,
    citas_table: String,
    pacientes_table: String,
    medicos_table: String,
}

impl SupabaseCitaStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            citas_table: config.citas_table.clone(),
            pacientes_table: config.pacientes_table.clone(),
            medicos_table: config.medicos_table.clone(),
        }
    }

    fn table_path(&self) -> String {
        format!("/rest/v1/{}", self.citas_table)
    }

    fn row_path(&self, id: &str) -> String {
        format!("{}?id=eq.{}", self.table_path(), urlencoding::encode(id))
    }

    fn range_path(&self, query: &RangeQuery) -> String {
        let columns = query.populate.columns();
        let mut path = format!(
            "{}?select=*,paciente:{}!paciente_id({}),medico:{}!medico_id({})&fecha=gte.{}&fecha=lte.{}",
            self.table_path(),
            self.pacientes_table,
            columns,
            self.medicos_table,
            columns,
            encode_instant(&query.range.start),
            encode_instant(&query.range.end),
        );

        if let Some(order) = query.sort {
            path.push_str(&format!("&order=fecha.{}", order.as_postgrest()));
        }

        path
    }
}

fn encode_instant(instant: &DateTime<Utc>) -> String {
    let formatted = instant.to_rfc3339_opts(SecondsFormat::Millis, true);
    urlencoding::encode(&formatted).into_owned()
}

fn parse_citas(rows: Vec<Value>) -> Result<Vec<Cita>> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).context("Failed to parse cita"))
        .collect()
}

fn first_cita(rows: Vec<Value>) -> Result<Option<Cita>> {
    Ok(parse_citas(rows)?.into_iter().next())
}

#[async_trait]
impl CitaStore for SupabaseCitaStore {
    async fn insert(&self, cita: NuevaCita) -> Result<Cita> {
        debug!("Inserting cita for paciente {} with medico {}", cita.paciente_id, cita.medico_id);

        let body = serde_json::to_value(&cita)?;
        let rows: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            &self.table_path(),
            None,
            Some(body),
            Some(SupabaseClient::return_representation()),
        ).await?;

        first_cita(rows)?.ok_or_else(|| anyhow!("Failed to create cita"))
    }

    async fn find_all(&self) -> Result<Vec<Cita>> {
        let path = format!("{}?select=*", self.table_path());
        let rows: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
            None,
        ).await?;

        parse_citas(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Cita>> {
        let path = format!("{}&select=*", self.row_path(id));
        let rows: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
            None,
        ).await?;

        first_cita(rows)
    }

    async fn update(&self, id: &str, changes: CitaUpdate) -> Result<Option<Cita>> {
        debug!("Updating cita {}", id);

        let body = serde_json::to_value(&changes)?;
        let rows: Vec<Value> = self.supabase.request_with_headers(
            Method::PATCH,
            &self.row_path(id),
            None,
            Some(body),
            Some(SupabaseClient::return_representation()),
        ).await?;

        first_cita(rows)
    }

    async fn delete(&self, id: &str) -> Result<Option<Cita>> {
        debug!("Deleting cita {}", id);

        let rows: Vec<Value> = self.supabase.request_with_headers(
            Method::DELETE,
            &self.row_path(id),
            None,
            None,
            Some(SupabaseClient::return_representation()),
        ).await?;

        first_cita(rows)
    }

    async fn find_in_range(&self, query: RangeQuery) -> Result<Vec<Cita>> {
        let path = self.range_path(&query);
        let rows: Vec<Value> = self.supabase.request(
            Method::GET,
            &path,
            None,
            None,
        ).await?;

        parse_citas(rows)
    }
}
