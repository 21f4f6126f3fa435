pub mod message;
pub mod submission;
pub mod whatsapp;
