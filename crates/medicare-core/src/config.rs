use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Static clinic profile. Loaded once at process start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    #[serde(default)]
    pub insurance: Vec<String>,
    pub private_consultation: String,
    pub doctor: String,
}

impl Default for ClinicInfo {
    fn default() -> Self {
        Self {
            name: "MediCare Clínica Geral".to_string(),
            address: "Rua da Saúde, 123 - Centro - São Paulo/SP".to_string(),
            phone: "(11) 3456-7890".to_string(),
            hours: "Segunda a Sexta: 8h às 18h".to_string(),
            insurance: vec![
                "SulAmérica".to_string(),
                "Bradesco Saúde".to_string(),
                "Amil".to_string(),
                "Unimed".to_string(),
                "NotreDame Intermédica".to_string(),
            ],
            private_consultation: "R$ 150,00".to_string(),
            doctor: "Dr. Silva - Clínico Geral".to_string(),
        }
    }
}

/// Replace `${VAR}` placeholders with the value of the environment variable,
/// or the empty string when unset. Unclosed brackets pass through untouched.
pub fn resolve_env_var(raw: &str) -> String {
    let mut output = String::new();
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);

        let candidate = &rest[start + 2..];
        let Some(end) = candidate.find('}') else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &candidate[..end];
        output.push_str(&std::env::var(key).unwrap_or_default());
        rest = &candidate[end + 1..];
    }

    output.push_str(rest);
    output
}

/// Load a clinic profile from a YAML file, resolve env placeholders and
/// validate it.
pub fn load_clinic(path: &Path) -> Result<ClinicInfo> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read clinic profile: {}", path.display()))?;
    let mut clinic: ClinicInfo = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse clinic profile: {}", path.display()))?;

    resolve_clinic_env(&mut clinic);
    validate_clinic(&clinic)?;
    tracing::info!("loaded clinic profile: {}", clinic.name);
    Ok(clinic)
}

pub fn validate_clinic(clinic: &ClinicInfo) -> Result<()> {
    if clinic.name.trim().is_empty() {
        return Err(anyhow!("clinic name must not be empty"));
    }
    if clinic.phone.trim().is_empty() {
        return Err(anyhow!("clinic phone must not be empty"));
    }
    if clinic.insurance.is_empty() {
        return Err(anyhow!("at least one accepted insurer is required"));
    }
    Ok(())
}

fn resolve_clinic_env(clinic: &mut ClinicInfo) {
    clinic.name = resolve_env_var(&clinic.name);
    clinic.address = resolve_env_var(&clinic.address);
    clinic.phone = resolve_env_var(&clinic.phone);
    clinic.hours = resolve_env_var(&clinic.hours);
    for insurer in &mut clinic.insurance {
        *insurer = resolve_env_var(insurer);
    }
    clinic.private_consultation = resolve_env_var(&clinic.private_consultation);
    clinic.doctor = resolve_env_var(&clinic.doctor);
}
