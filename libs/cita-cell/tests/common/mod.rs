#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use cita_cell::models::{Cita, CitaUpdate, NuevaCita, Persona};
use cita_cell::services::{CitaStore, PersonaFields, RangeQuery, SortOrder};

/// In-memory store that joins personas the way the PostgREST embed does.
pub struct MemoryCitaStore {
    citas: Mutex<Vec<Cita>>,
    personas: HashMap<String, Persona>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MemoryCitaStore {
    pub fn new() -> Self {
        Self {
            citas: Mutex::new(Vec::new()),
            personas: HashMap::new(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn with_persona(mut self, id: &str, nombre: &str, apellido: &str) -> Self {
        self.personas.insert(id.to_string(), Persona {
            id: id.to_string(),
            nombre: nombre.to_string(),
            apellido: Some(apellido.to_string()),
        });
        self
    }

    pub fn seed(&self, cita: Cita) {
        self.citas.lock().unwrap().push(cita);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Cita> {
        self.citas.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            bail!("{}", message);
        }
        Ok(())
    }

    fn join(&self, id: &str, fields: PersonaFields) -> Option<Persona> {
        self.personas.get(id).map(|persona| Persona {
            apellido: match fields {
                PersonaFields::Nombre => None,
                PersonaFields::NombreApellido => persona.apellido.clone(),
            },
            ..persona.clone()
        })
    }
}

#[async_trait]
impl CitaStore for MemoryCitaStore {
    async fn insert(&self, cita: NuevaCita) -> Result<Cita> {
        self.enter()?;
        let stored = Cita {
            id: Uuid::new_v4().to_string(),
            fecha: cita.fecha,
            paciente_id: cita.paciente_id,
            medico_id: cita.medico_id,
            paciente: None,
            medico: None,
            detalles: cita.detalles,
        };
        self.citas.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Cita>> {
        self.enter()?;
        Ok(self.stored())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Cita>> {
        self.enter()?;
        Ok(self.stored().into_iter().find(|c| c.id == id))
    }

    async fn update(&self, id: &str, changes: CitaUpdate) -> Result<Option<Cita>> {
        self.enter()?;
        let mut citas = self.citas.lock().unwrap();
        let Some(cita) = citas.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(fecha) = changes.fecha {
            cita.fecha = fecha;
        }
        if let Some(paciente_id) = changes.paciente_id {
            cita.paciente_id = paciente_id;
        }
        if let Some(medico_id) = changes.medico_id {
            cita.medico_id = medico_id;
        }
        cita.detalles.extend(changes.detalles);

        Ok(Some(cita.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Cita>> {
        self.enter()?;
        let mut citas = self.citas.lock().unwrap();
        let position = citas.iter().position(|c| c.id == id);
        Ok(position.map(|index| citas.remove(index)))
    }

    async fn find_in_range(&self, query: RangeQuery) -> Result<Vec<Cita>> {
        self.enter()?;
        let mut matching: Vec<Cita> = self.stored()
            .into_iter()
            .filter(|c| query.range.contains(&c.fecha))
            .map(|mut c| {
                c.paciente = self.join(&c.paciente_id, query.populate);
                c.medico = self.join(&c.medico_id, query.populate);
                c
            })
            .collect();

        if let Some(SortOrder::Ascending) = query.sort {
            matching.sort_by_key(|c| c.fecha);
        }

        Ok(matching)
    }
}

pub fn local(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .earliest()
        .expect("valid local time")
        .with_timezone(&Utc)
}

pub fn cita(id: &str, fecha: DateTime<Utc>, paciente_id: &str, medico_id: &str) -> Cita {
    let mut detalles = Map::new();
    detalles.insert("motivo".to_string(), json!("Control"));

    Cita {
        id: id.to_string(),
        fecha,
        paciente_id: paciente_id.to_string(),
        medico_id: medico_id.to_string(),
        paciente: None,
        medico: None,
        detalles,
    }
}

pub fn nueva_cita_payload() -> Value {
    json!({
        "fecha": "2024-03-15T10:00:00Z",
        "paciente_id": "p1",
        "medico_id": "m1",
        "motivo": "Dolor de cabeza"
    })
}
