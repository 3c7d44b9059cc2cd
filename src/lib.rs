pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod translate;

pub use config::Config;
pub use error::TranslateError;
pub use routes::create_routes;
pub use state::AppState;
