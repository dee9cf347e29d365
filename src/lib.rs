//! Items API: an in-memory CRUD resource behind a static API key.
//!
//! The binary (`main.rs`) only calls [`app::run`]; everything else lives here so the
//! router can be driven directly from tests.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;

pub use app::build_router;
pub use config::Config;
pub use state::AppState;
