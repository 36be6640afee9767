pub mod app;
pub mod cli;
pub mod config;
pub mod contact_store;
pub mod lead_client;
pub mod logging;
pub mod report;
pub mod state;
pub mod utils;
