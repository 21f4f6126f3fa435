pub mod config;
pub mod errors;
pub mod handlers;
pub mod intake;
pub mod models;
pub mod templates_structs;
