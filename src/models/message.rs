use crate::models::submission::FormSubmission;

pub const BRAND: &str = "FisioAção";

/// Format a submission into the WhatsApp pré-atendimento message.
pub fn build_whatsapp_message(submission: &FormSubmission) -> String {
    format!(
        "👋 *Pré-Atendimento {BRAND}*\n\n\
         📍 *Nome:* {}\n\n\
         📝 *Motivo do contato:*\n{}\n\n\
         💊 *Tratamentos anteriores:*\n{}\n\n\
         ✅ *Aguardo orientações. Obrigado(a)!*",
        submission.name(),
        submission.complaint(),
        submission.prior_treatment(),
    )
}
