pub mod anim;
pub mod config;
pub mod routes;
pub mod server;

pub use config::Config;
pub use server::{run_server, AppState, ServerHandle};
