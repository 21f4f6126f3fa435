use std::collections::HashMap;

use actix_web::{HttpResponse, http::StatusCode, web};
use askama::Template;
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::intake::{Feedback, FormIntake, Navigator, Outcome, SubmitEvent};
use crate::models::submission::{FieldKey, FieldSource};
use crate::templates_structs::{FormValues, PreAtendimentoTemplate};

/// All fields optional so a missing one reaches the intake as `FieldNotFound`.
#[derive(Deserialize)]
pub struct PreAtendimentoJson {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub dor: Option<String>,
    #[serde(default)]
    pub tratamento: Option<String>,
}

impl FieldSource for PreAtendimentoJson {
    fn get_field(&self, key: FieldKey) -> Option<String> {
        match key {
            FieldKey::Name => self.nome.clone(),
            FieldKey::Complaint => self.dor.clone(),
            FieldKey::PriorTreatment => self.tratamento.clone(),
        }
    }
}

/// The POST itself. Once prevented, the response is always built by the intake.
#[derive(Default)]
struct FormPost {
    default_prevented: bool,
}

impl SubmitEvent for FormPost {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Captures the outbound link so it can be turned into a redirect.
#[derive(Default)]
struct RedirectNavigator {
    location: Option<String>,
}

impl Navigator for RedirectNavigator {
    fn open(&mut self, url: &str, _target: &str, _features: &str) {
        // Same-tab 303; no opener exists and Referrer-Policy drops the referrer.
        self.location = Some(url.to_string());
    }
}

#[derive(Default)]
struct PageFeedback {
    error: Option<String>,
}

impl Feedback for PageFeedback {
    fn success(&mut self) {}

    fn error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

fn form_values(fields: &HashMap<String, String>) -> FormValues {
    let value = |key: FieldKey| fields.get_field(key).unwrap_or_default();
    FormValues {
        nome: value(FieldKey::Name),
        dor: value(FieldKey::Complaint),
        tratamento: value(FieldKey::PriorTreatment),
    }
}

pub async fn form_page() -> Result<HttpResponse, AppError> {
    render(PreAtendimentoTemplate::blank())
}

pub async fn submit(
    intake: web::Data<FormIntake>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let fields = form.into_inner();
    let mut event = FormPost::default();
    let mut navigator = RedirectNavigator::default();
    let mut feedback = PageFeedback::default();

    intake.handle_submit(&mut event, &fields, &mut navigator, &mut feedback);
    debug_assert!(event.default_prevented);

    if let Some(location) = navigator.location {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", location))
            .insert_header(("Referrer-Policy", "no-referrer"))
            .finish());
    }

    let error = feedback.error.unwrap_or_default();
    let html = PreAtendimentoTemplate::with_error(error, form_values(&fields)).render()?;
    Ok(HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
        .content_type("text/html; charset=utf-8")
        .body(html))
}

pub async fn api_submit(
    intake: web::Data<FormIntake>,
    body: web::Json<PreAtendimentoJson>,
) -> HttpResponse {
    let mut event = FormPost::default();
    let mut navigator = RedirectNavigator::default();
    let mut feedback = PageFeedback::default();

    match intake.handle_submit(&mut event, &body.into_inner(), &mut navigator, &mut feedback) {
        Outcome::Sent { message, url } => HttpResponse::Ok().json(serde_json::json!({
            "message": message,
            "url": url,
        })),
        Outcome::Rejected(e) => HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": e.to_string(),
        })),
    }
}
