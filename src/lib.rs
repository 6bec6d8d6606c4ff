pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;
