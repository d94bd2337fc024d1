use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod slot;

pub use slot::{AvailableSlot, SlotLabelError, SLOT_LABEL_FORMAT};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

/// A single transcript entry. Immutable once created; insertion order
/// in the transcript is the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            at: Utc::now(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// How a consultation is paid for: out of pocket, or through one of the
/// clinic's accepted insurers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "name")]
pub enum ConsultationType {
    Particular,
    Insurance(String),
}

impl Default for ConsultationType {
    fn default() -> Self {
        Self::Particular
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Particular => write!(f, "Particular"),
            Self::Insurance(name) => write!(f, "{name}"),
        }
    }
}

impl ConsultationType {
    /// The selectable set for the booking form: Particular first, then the
    /// clinic's accepted insurers in declared order.
    pub fn options(insurers: &[String]) -> Vec<Self> {
        let mut options = vec![Self::Particular];
        options.extend(insurers.iter().cloned().map(Self::Insurance));
        options
    }
}

/// Transient booking form input. Lives only for a single submission pass;
/// nothing here is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub consultation_type: ConsultationType,
    pub slot_label: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Outcome of a booking form submission. Rejection is a domain outcome,
/// not an error: the form stays open for correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SubmissionOutcome {
    Confirmed {
        name: String,
        phone: String,
        consultation_type: ConsultationType,
        slot_label: String,
        instructions: String,
    },
    Rejected {
        missing: Vec<String>,
    },
}

impl SubmissionOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Predefined shortcut that injects a canned user message and immediately
/// computes its reply, bypassing free-text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Book,
    Address,
    Insurance,
    Price,
}

impl QuickAction {
    /// The canned user message appended to the transcript.
    pub fn user_text(&self) -> &'static str {
        match self {
            Self::Book => "Quero agendar uma consulta",
            Self::Address => "Qual o endereço?",
            Self::Insurance => "Quais convênios aceitam?",
            Self::Price => "Qual o valor da consulta?",
        }
    }

    /// The responder keyword whose reply this shortcut triggers.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Book => "agendar",
            Self::Address => "endereço",
            Self::Insurance => "convenio",
            Self::Price => "valor",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown quick action: {0}")]
pub struct UnknownQuickAction(String);

impl FromStr for QuickAction {
    type Err = UnknownQuickAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "book" => Ok(Self::Book),
            "address" => Ok(Self::Address),
            "insurance" => Ok(Self::Insurance),
            "price" => Ok(Self::Price),
            other => Err(UnknownQuickAction(other.to_string())),
        }
    }
}
