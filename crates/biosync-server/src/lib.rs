//! BioSync Server
//!
//! HTTP front end for stress classification. Accepts a JSON feature set on
//! `POST /predict_stress` and answers with the model used, the binary label,
//! the stress score and a coping suggestion.

pub mod cli;
pub mod config;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::ServerConfig;
pub use routes::{create_router, AppError};
pub use state::AppState;
