use medicare_schema::{AppointmentRequest, SubmissionOutcome};

use crate::config::ClinicInfo;

/// Validate a booking form submission.
///
/// Rejected iff name or phone is blank; otherwise Confirmed, echoing the
/// submitted values plus the static instructions block. Accepting a
/// submission has no side effect: no ledger exists, and the chosen slot is
/// not removed from future availability.
pub fn submit(clinic: &ClinicInfo, request: &AppointmentRequest) -> SubmissionOutcome {
    let mut missing = Vec::new();
    if request.name.trim().is_empty() {
        missing.push("nome".to_string());
    }
    if request.phone.trim().is_empty() {
        missing.push("telefone".to_string());
    }
    if !missing.is_empty() {
        tracing::debug!(?missing, "booking rejected");
        return SubmissionOutcome::Rejected { missing };
    }

    tracing::info!(slot = %request.slot_label, "booking confirmed");
    SubmissionOutcome::Confirmed {
        name: request.name.clone(),
        phone: request.phone.clone(),
        consultation_type: request.consultation_type.clone(),
        slot_label: request.slot_label.clone(),
        instructions: booking_instructions(clinic),
    }
}

fn booking_instructions(clinic: &ClinicInfo) -> String {
    format!(
        "Chegue 15 minutos antes do horário.\n\
         Traga RG, CPF e carteirinha do convênio.\n\
         Para cancelar, ligue com 24h de antecedência.\n\
         Em caso de dúvidas, ligue: {}",
        clinic.phone
    )
}

#[cfg(test)]
mod tests {
    use medicare_schema::ConsultationType;

    use super::*;

    fn request(name: &str, phone: &str) -> AppointmentRequest {
        AppointmentRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            email: None,
            consultation_type: ConsultationType::Particular,
            slot_label: "02/03/2026 - 09:00".to_string(),
            notes: None,
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let outcome = submit(&ClinicInfo::default(), &request("", "123"));
        match outcome {
            SubmissionOutcome::Rejected { missing } => assert_eq!(missing, vec!["nome"]),
            _ => panic!("expected Rejected"),
        }
    }

    #[test]
    fn blank_phone_is_rejected() {
        let outcome = submit(&ClinicInfo::default(), &request("Ana", "   "));
        match outcome {
            SubmissionOutcome::Rejected { missing } => assert_eq!(missing, vec!["telefone"]),
            _ => panic!("expected Rejected"),
        }
    }

    #[test]
    fn both_blank_lists_both_fields() {
        let outcome = submit(&ClinicInfo::default(), &request(" ", ""));
        match outcome {
            SubmissionOutcome::Rejected { missing } => {
                assert_eq!(missing, vec!["nome", "telefone"]);
            }
            _ => panic!("expected Rejected"),
        }
    }

    #[test]
    fn valid_submission_echoes_fields() {
        let clinic = ClinicInfo::default();
        let outcome = submit(&clinic, &request("Ana", "11999999999"));
        match outcome {
            SubmissionOutcome::Confirmed {
                name,
                phone,
                slot_label,
                instructions,
                ..
            } => {
                assert_eq!(name, "Ana");
                assert_eq!(phone, "11999999999");
                assert_eq!(slot_label, "02/03/2026 - 09:00");
                assert!(instructions.contains(&clinic.phone));
                assert!(instructions.contains("15 minutos"));
            }
            _ => panic!("expected Confirmed"),
        }
    }

    #[test]
    fn submission_does_not_consume_the_slot() {
        use crate::slots::available_slots_from;
        let today = chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let before = available_slots_from(today).len();
        let _ = submit(&ClinicInfo::default(), &request("Ana", "11999999999"));
        assert_eq!(available_slots_from(today).len(), before);
    }
}
