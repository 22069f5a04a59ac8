//! Integer codes carried by a complaint and their display labels.
//!
//! Every mapping is total: codes outside the known domain resolve to an
//! explicit fallback variant instead of failing, so aggregation stays total
//! over malformed or newer data.

use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;

/// Lifecycle status of a complaint, persisted as its integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    New,
    InProgress,
    Resolved,
    Closed,
    Unknown(i32),
}

impl ComplaintStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ComplaintStatus::New,
            1 => ComplaintStatus::InProgress,
            2 => ComplaintStatus::Resolved,
            3 => ComplaintStatus::Closed,
            other => ComplaintStatus::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ComplaintStatus::New => 0,
            ComplaintStatus::InProgress => 1,
            ComplaintStatus::Resolved => 2,
            ComplaintStatus::Closed => 3,
            ComplaintStatus::Unknown(code) => code,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplaintStatus::New => "Nuevo",
            ComplaintStatus::InProgress => "En Proceso",
            ComplaintStatus::Resolved => "Resuelto",
            ComplaintStatus::Closed => "Cerrado",
            ComplaintStatus::Unknown(_) => "Desconocido",
        }
    }

    /// Resolved or closed: the complaint carries a response
    pub fn is_resolved(self) -> bool {
        matches!(self, ComplaintStatus::Resolved | ComplaintStatus::Closed)
    }
}

impl From<i32> for ComplaintStatus {
    fn from(code: i32) -> Self {
        ComplaintStatus::from_code(code)
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn serialize_complaint_status<S>(value: &ComplaintStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i32(value.code())
}

pub fn deserialize_complaint_status<'de, D>(deserializer: D) -> Result<ComplaintStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let code = i32::deserialize(deserializer)?;
    Ok(ComplaintStatus::from_code(code))
}

/// Kind of request filed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintType {
    Petition,
    Complaint,
    Claim,
    Suggestion,
    Compliment,
    Other(i32),
}

impl ComplaintType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ComplaintType::Petition,
            1 => ComplaintType::Complaint,
            2 => ComplaintType::Claim,
            3 => ComplaintType::Suggestion,
            4 => ComplaintType::Compliment,
            other => ComplaintType::Other(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplaintType::Petition => "Petición",
            ComplaintType::Complaint => "Queja",
            ComplaintType::Claim => "Reclamo",
            ComplaintType::Suggestion => "Sugerencia",
            ComplaintType::Compliment => "Felicitación",
            ComplaintType::Other(_) => "Otro",
        }
    }
}

impl fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Service area the complaint is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintCategory {
    BusService,
    FaresAndPayments,
    Schedules,
    Routes,
    Infrastructure,
    CustomerService,
    Accessibility,
    Security,
    Others,
    Uncategorized(i32),
}

impl ComplaintCategory {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ComplaintCategory::BusService,
            1 => ComplaintCategory::FaresAndPayments,
            2 => ComplaintCategory::Schedules,
            3 => ComplaintCategory::Routes,
            4 => ComplaintCategory::Infrastructure,
            5 => ComplaintCategory::CustomerService,
            6 => ComplaintCategory::Accessibility,
            7 => ComplaintCategory::Security,
            8 => ComplaintCategory::Others,
            other => ComplaintCategory::Uncategorized(other),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplaintCategory::BusService => "Servicio de Buses",
            ComplaintCategory::FaresAndPayments => "Tarifas y Pagos",
            ComplaintCategory::Schedules => "Horarios",
            ComplaintCategory::Routes => "Rutas",
            ComplaintCategory::Infrastructure => "Infraestructura",
            ComplaintCategory::CustomerService => "Atención al Cliente",
            ComplaintCategory::Accessibility => "Accesibilidad",
            ComplaintCategory::Security => "Seguridad",
            ComplaintCategory::Others => "Otros",
            ComplaintCategory::Uncategorized(_) => "Sin Categoría",
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
