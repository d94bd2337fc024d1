use crate::config::ClinicInfo;

/// Maps free text to one fixed reply by scanning an ordered keyword table.
///
/// Table order is an observable contract: multiple keywords may match the
/// same input and the first declared one wins. Keep this an ordered list,
/// never an unordered map.
pub struct Responder {
    table: Vec<(&'static str, String)>,
    fallback: String,
    greeting: String,
}

impl Responder {
    pub fn new(clinic: &ClinicInfo) -> Self {
        let insurers = clinic.insurance.join(", ");
        let table = vec![
            // greetings
            ("oi", "Olá! Como posso ajudá-lo?".to_string()),
            ("olá", "Oi! Em que posso ser útil?".to_string()),
            ("bom dia", "Bom dia! Como posso ajudá-lo hoje?".to_string()),
            ("boa tarde", "Boa tarde! Em que posso ajudar?".to_string()),
            // booking
            (
                "agendar",
                "Perfeito! Vou ajudá-lo a agendar uma consulta. Preciso de algumas \
                 informações. Qual seu nome completo?"
                    .to_string(),
            ),
            (
                "consulta",
                "Para agendar uma consulta, preciso do seu nome completo. Pode me informar?"
                    .to_string(),
            ),
            // clinic info
            ("horário", format!("Funcionamos {}", clinic.hours)),
            ("endereço", format!("Estamos localizados na {}", clinic.address)),
            ("convenio", format!("Aceitamos: {insurers}")),
            ("convênio", format!("Aceitamos: {insurers}")),
            (
                "valor",
                format!("Consulta particular: {}", clinic.private_consultation),
            ),
            (
                "preço",
                format!("Consulta particular: {}", clinic.private_consultation),
            ),
            // cancellation
            (
                "cancelar",
                "Para cancelar uma consulta, preciso do seu nome e telefone. Lembrando que \
                 cancelamentos devem ser feitos com 24h de antecedência."
                    .to_string(),
            ),
            // help
            (
                "ajuda",
                "Posso ajudá-lo com:\n\n\
                 🗓️ Agendar consulta\n\
                 📞 Informações da clínica\n\
                 💰 Valores e convênios\n\
                 ❌ Cancelar consulta\n\
                 📍 Endereço e horários\n\n\
                 O que você gostaria de fazer?"
                    .to_string(),
            ),
        ];

        Self {
            table,
            fallback: "Desculpe, não entendi sua solicitação. Posso ajudá-lo com:\n\n\
                       🗓️ Agendar consulta\n\
                       📞 Informações da clínica\n\
                       💰 Valores e convênios\n\
                       ❌ Cancelar consulta\n\n\
                       Digite 'ajuda' para ver todas as opções."
                .to_string(),
            greeting: format!(
                "Olá! 👋 Sou o assistente virtual da {}. Como posso ajudá-lo hoje?",
                clinic.name
            ),
        }
    }

    /// Total over all inputs: trims and lowercases, returns the reply of the
    /// first keyword occurring as a substring, or the default help text.
    pub fn respond(&self, input: &str) -> &str {
        let normalized = input.trim().to_lowercase();
        for (keyword, reply) in &self.table {
            if normalized.contains(keyword) {
                tracing::debug!(%keyword, "matched keyword");
                return reply;
            }
        }
        tracing::debug!("no keyword matched, using fallback");
        &self.fallback
    }

    /// The bot message every new session starts with.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}
