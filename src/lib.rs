pub mod assets;
pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use db::create_pool;
pub use routes::{AppState, router};
