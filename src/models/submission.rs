use std::collections::HashMap;
use std::fmt;

/// Placeholder used when the prior-treatment field is left blank.
pub const NOT_INFORMED: &str = "Não informado";

/// The three inputs of the pré-atendimento form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Complaint,
    PriorTreatment,
}

impl FieldKey {
    /// Identifier of the input element on the page (and of the posted form field).
    pub fn field_id(self) -> &'static str {
        match self {
            FieldKey::Name => "nome",
            FieldKey::Complaint => "dor",
            FieldKey::PriorTreatment => "tratamento",
        }
    }
}

/// Anything that can hand out raw form values by key.
/// Returns `None` when the field does not exist at all.
pub trait FieldSource {
    fn get_field(&self, key: FieldKey) -> Option<String>;
}

impl FieldSource for HashMap<String, String> {
    fn get_field(&self, key: FieldKey) -> Option<String> {
        self.get(key.field_id()).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    ComplaintRequired,
    FieldNotFound(FieldKey),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "Por favor, insira seu nome completo"),
            ValidationError::ComplaintRequired => {
                write!(f, "Por favor, descreva seu desconforto ou dor")
            }
            ValidationError::FieldNotFound(key) => {
                write!(f, "Campo do formulário não encontrado: {}", key.field_id())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validated submission. Only `validate_and_get_form_data` builds one,
/// so name and complaint are always non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    name: String,
    complaint: String,
    prior_treatment: String,
}

impl FormSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn complaint(&self) -> &str {
        &self.complaint
    }

    pub fn prior_treatment(&self) -> &str {
        &self.prior_treatment
    }
}

fn read_trimmed(fields: &impl FieldSource, key: FieldKey) -> Result<String, ValidationError> {
    fields
        .get_field(key)
        .map(|value| value.trim().to_string())
        .ok_or(ValidationError::FieldNotFound(key))
}

/// Read, trim and validate the form fields.
///
/// Name is checked before complaint, so an empty name always wins.
/// Prior treatment is never rejected; blank becomes [`NOT_INFORMED`].
pub fn validate_and_get_form_data(
    fields: &impl FieldSource,
) -> Result<FormSubmission, ValidationError> {
    let name = read_trimmed(fields, FieldKey::Name)?;
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }

    let complaint = read_trimmed(fields, FieldKey::Complaint)?;
    if complaint.is_empty() {
        return Err(ValidationError::ComplaintRequired);
    }

    let prior_treatment = read_trimmed(fields, FieldKey::PriorTreatment)?;
    let prior_treatment = if prior_treatment.is_empty() {
        NOT_INFORMED.to_string()
    } else {
        prior_treatment
    };

    Ok(FormSubmission { name, complaint, prior_treatment })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, complaint: &str, prior: &str) -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("nome".to_string(), name.to_string());
        m.insert("dor".to_string(), complaint.to_string());
        m.insert("tratamento".to_string(), prior.to_string());
        m
    }

    #[test]
    fn trims_all_fields() {
        let sub = validate_and_get_form_data(&fields("  Ana  ", "\tjoelho\n", " pilates ")).unwrap();
        assert_eq!(sub.name(), "Ana");
        assert_eq!(sub.complaint(), "joelho");
        assert_eq!(sub.prior_treatment(), "pilates");
    }

    #[test]
    fn blank_prior_treatment_uses_placeholder() {
        let sub = validate_and_get_form_data(&fields("Ana", "joelho", "   ")).unwrap();
        assert_eq!(sub.prior_treatment(), NOT_INFORMED);
    }

    #[test]
    fn empty_name_wins_over_empty_complaint() {
        let err = validate_and_get_form_data(&fields(" ", "", "")).unwrap_err();
        assert_eq!(err, ValidationError::NameRequired);
    }

    #[test]
    fn empty_complaint_rejected() {
        let err = validate_and_get_form_data(&fields("Ana", "  ", "x")).unwrap_err();
        assert_eq!(err, ValidationError::ComplaintRequired);
    }

    #[test]
    fn missing_field_is_reported() {
        let mut m = fields("Ana", "joelho", "");
        m.remove("tratamento");
        let err = validate_and_get_form_data(&m).unwrap_err();
        assert_eq!(err, ValidationError::FieldNotFound(FieldKey::PriorTreatment));
        assert_eq!(err.to_string(), "Campo do formulário não encontrado: tratamento");
    }
}
