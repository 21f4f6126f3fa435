//! Shared test infrastructure for intake tests.
//!
//! Provides a field map builder and recording doubles for the intake
//! collaborators (submit event, navigator, feedback).

#![allow(dead_code)]

use std::collections::HashMap;

use pre_atendimento::intake::{Feedback, Navigator, SubmitEvent};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const WA_PREFIX: &str = "https://wa.me/5582994318109?text=";

// ============================================================================
// FIELDS
// ============================================================================

/// Form values keyed by the page's input ids.
pub fn form_fields(nome: &str, dor: &str, tratamento: &str) -> HashMap<String, String> {
    HashMap::from([
        ("nome".to_string(), nome.to_string()),
        ("dor".to_string(), dor.to_string()),
        ("tratamento".to_string(), tratamento.to_string()),
    ])
}

// ============================================================================
// RECORDING DOUBLES
// ============================================================================

#[derive(Default)]
pub struct RecordingEvent {
    pub prevented: bool,
}

impl SubmitEvent for RecordingEvent {
    fn prevent_default(&mut self) {
        self.prevented = true;
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub opened: Vec<(String, String, String)>,
}

impl Navigator for RecordingNavigator {
    fn open(&mut self, url: &str, target: &str, features: &str) {
        self.opened
            .push((url.to_string(), target.to_string(), features.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingFeedback {
    pub successes: usize,
    pub errors: Vec<String>,
}

impl Feedback for RecordingFeedback {
    fn success(&mut self) {
        self.successes += 1;
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
