//! # monhan-api
//!
//! Read-mostly REST API over a fixed Monster Hunter dataset: monsters,
//! quests, and endemic life, loaded once at startup from JSON.
//!
//! The interesting part is the filter-and-paginate engine: multi-valued
//! AND/OR query-string filters over array-typed attributes evaluated as
//! in-memory predicates, plus shared pagination arithmetic across the
//! three resource families.
//!
//! ## Example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use monhan_api::{routes, AppState, Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     monhan_api::init_tracing(&config)?;
//!
//!     let state = AppState::from_config(config.clone())?;
//!     let app = routes::router(state);
//!
//!     Server::new(config).serve(app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod lookup;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod pagination;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use observability::init_tracing;
pub use server::Server;
pub use state::{AppState, Datasets};
