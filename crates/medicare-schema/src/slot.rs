use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display format for a slot label, e.g. `02/03/2026 - 09:00`.
pub const SLOT_LABEL_FORMAT: &str = "%d/%m/%Y - %H:%M";

/// A (date, time) pair offered as a candidate appointment. Carries no
/// persisted reservation state; availability is recomputed on every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available: bool,
}

impl AvailableSlot {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            available: true,
        }
    }

    /// Human-facing label shown in the booking form's slot selector.
    pub fn label(&self) -> String {
        self.date.and_time(self.time).format(SLOT_LABEL_FORMAT).to_string()
    }

    /// Inverse of [`label`](Self::label). The parsed slot is marked
    /// available; the label encodes no reservation state.
    pub fn parse_label(label: &str) -> Result<Self, SlotLabelError> {
        let (date_part, time_part) = label
            .split_once(" - ")
            .ok_or_else(|| SlotLabelError::Malformed(label.to_string()))?;
        let date = NaiveDate::parse_from_str(date_part.trim(), "%d/%m/%Y")
            .map_err(|_| SlotLabelError::BadDate(date_part.trim().to_string()))?;
        let time = NaiveTime::parse_from_str(time_part.trim(), "%H:%M")
            .map_err(|_| SlotLabelError::BadTime(time_part.trim().to_string()))?;
        Ok(Self::new(date, time))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotLabelError {
    #[error("slot label is not in 'DD/MM/YYYY - HH:MM' form: {0}")]
    Malformed(String),
    #[error("invalid slot date: {0}")]
    BadDate(String),
    #[error("invalid slot time: {0}")]
    BadTime(String),
}
