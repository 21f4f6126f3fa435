use askama::Template;

use crate::models::message::BRAND;

/// Values echoed back into the form when a submission is rejected.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub nome: String,
    pub dor: String,
    pub tratamento: String,
}

#[derive(Template)]
#[template(path = "pre_atendimento.html")]
pub struct PreAtendimentoTemplate {
    pub brand: String,
    pub error: Option<String>,
    pub values: FormValues,
}

impl PreAtendimentoTemplate {
    pub fn blank() -> Self {
        Self { brand: BRAND.to_string(), error: None, values: FormValues::default() }
    }

    pub fn with_error(error: String, values: FormValues) -> Self {
        Self { brand: BRAND.to_string(), error: Some(error), values }
    }
}
