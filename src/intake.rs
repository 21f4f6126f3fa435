//! Form intake: one submission, end to end.
//!
//! The platform pieces (the submit event, the outbound navigation and the
//! user-facing notices) sit behind small traits so the flow can be driven
//! by the HTTP handlers and by tests alike.

use crate::models::message::build_whatsapp_message;
use crate::models::submission::{FieldSource, ValidationError, validate_and_get_form_data};
use crate::models::whatsapp::{Destination, open_whatsapp_with_message};

/// The submit event that triggered the intake.
pub trait SubmitEvent {
    /// Stop the platform's own form navigation.
    fn prevent_default(&mut self);
}

/// Opens a URL in a browsing context.
pub trait Navigator {
    fn open(&mut self, url: &str, target: &str, features: &str);
}

/// Where the outcome is reported to the user.
pub trait Feedback {
    fn success(&mut self);
    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent { message: String, url: String },
    Rejected(ValidationError),
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

/// Stateless between calls; holds only the fixed destination.
#[derive(Debug, Clone, Default)]
pub struct FormIntake {
    destination: Destination,
}

impl FormIntake {
    pub fn new(destination: Destination) -> Self {
        Self { destination }
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn handle_submit(
        &self,
        event: &mut impl SubmitEvent,
        fields: &impl FieldSource,
        navigator: &mut impl Navigator,
        feedback: &mut impl Feedback,
    ) -> Outcome {
        event.prevent_default();

        match validate_and_get_form_data(fields) {
            Ok(submission) => {
                let message = build_whatsapp_message(&submission);
                let url = open_whatsapp_with_message(navigator, &self.destination, &message);
                log::info!("Formulário enviado com sucesso!");
                feedback.success();
                Outcome::Sent { message, url }
            }
            Err(e) => {
                log::error!("Erro no processamento do formulário: {e}");
                feedback.error(&e.to_string());
                Outcome::Rejected(e)
            }
        }
    }
}
