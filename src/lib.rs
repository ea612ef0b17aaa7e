pub mod collect;
pub mod config;
pub mod error;
pub mod models;
pub mod oauth;
pub mod sdm;

pub use collect::collect_reading;
pub use config::Config;
pub use error::{AppError, Result};
pub use models::ThermostatReading;
