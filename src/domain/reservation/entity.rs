// src/domain/reservation/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RESERVATION_COLUMNS: [&str; 7] = [
    "Id",
    "Fecha",
    "Hora",
    "Estado",
    "Detalle",
    "Usuario Responsable",
    "Mesa",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub i64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora")]
    pub time: NaiveTime,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "detalle")]
    pub detail: Option<String>,
    #[serde(rename = "usuario_responsable")]
    pub responsible_user: String,
    #[serde(rename = "numero_mesa")]
    pub table_number: i32,
}

impl Reservation {
    /// Display cells ordered as [`RESERVATION_COLUMNS`].
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.date.to_string(),
            self.time.to_string(),
            self.status.clone(),
            self.detail.clone().unwrap_or_default(),
            self.responsible_user.clone(),
            self.table_number.to_string(),
        ]
    }
}

/// Reservation as submitted to the reservation service; the service assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReservation {
    #[serde(rename = "fecha")]
    date: NaiveDate,
    #[serde(rename = "hora")]
    time: NaiveTime,
    #[serde(rename = "estado")]
    status: String,
    #[serde(rename = "detalle")]
    detail: String,
    #[serde(rename = "usuario_responsable")]
    responsible_user: String,
    #[serde(rename = "numero_mesa")]
    table_number: i32,
}

impl NewReservation {
    /// Build from raw form text.
    pub fn parse(
        date: &str,
        time: &str,
        status: &str,
        detail: &str,
        responsible_user: &str,
        table_number: &str,
    ) -> DomainResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::Validation("date must be YYYY-MM-DD".into()))?;
        let time = parse_time(time.trim())
            .ok_or_else(|| DomainError::Validation("time must be HH:MM".into()))?;

        let status = status.trim();
        if status.is_empty() {
            return Err(DomainError::Validation("status is required".into()));
        }
        let responsible_user = responsible_user.trim();
        if responsible_user.is_empty() {
            return Err(DomainError::Validation(
                "responsible user is required".into(),
            ));
        }

        let table_number = table_number
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                DomainError::Validation("table number must be a positive integer".into())
            })?;

        Ok(Self {
            date,
            time,
            status: status.to_string(),
            detail: detail.trim().to_string(),
            responsible_user: responsible_user.to_string(),
            table_number,
        })
    }
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}
