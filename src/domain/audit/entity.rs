// src/domain/audit/entity.rs
use super::value_objects::{AuditCode, LedgerTimestamp};
use serde::{Deserialize, Serialize};

/// Column headers of the audit table, in the fixed order of [`AuditRecord::cells`].
pub const AUDIT_COLUMNS: [&str; 6] = [
    "Código",
    "Acción",
    "Fecha y Hora",
    "Usuario Responsable",
    "Detalle",
    "Tabla Afectada",
];

/// One immutable fact about an action taken somewhere in the system.
///
/// Records are written by the ledger and are read-only here: fields are only
/// reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(rename = "codigo_indexacion")]
    code: AuditCode,
    #[serde(rename = "accion_realizada")]
    action: String,
    #[serde(rename = "fecha_hora")]
    timestamp: LedgerTimestamp,
    #[serde(rename = "usuario_responsable")]
    responsible_user: String,
    #[serde(rename = "detalle")]
    detail: String,
    #[serde(rename = "tabla_afectada")]
    affected_table: String,
}

impl AuditRecord {
    pub fn new(
        code: AuditCode,
        action: impl Into<String>,
        timestamp: LedgerTimestamp,
        responsible_user: impl Into<String>,
        detail: impl Into<String>,
        affected_table: impl Into<String>,
    ) -> Self {
        Self {
            code,
            action: action.into(),
            timestamp,
            responsible_user: responsible_user.into(),
            detail: detail.into(),
            affected_table: affected_table.into(),
        }
    }

    pub fn code(&self) -> &AuditCode {
        &self.code
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn timestamp(&self) -> &LedgerTimestamp {
        &self.timestamp
    }

    pub fn responsible_user(&self) -> &str {
        &self.responsible_user
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn affected_table(&self) -> &str {
        &self.affected_table
    }

    /// The six display cells, ordered as [`AUDIT_COLUMNS`].
    pub fn cells(&self) -> [String; 6] {
        [
            self.code.to_string(),
            self.action.clone(),
            self.timestamp.to_string(),
            self.responsible_user.clone(),
            self.detail.clone(),
            self.affected_table.clone(),
        ]
    }
}
