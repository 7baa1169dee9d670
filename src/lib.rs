//! Borealis DB - connection management and the constellation catalog
//!
//! This crate owns two things: the `constellation` entity persisted in
//! PostgreSQL, and the plumbing that connects to the database - building
//! connection URLs from parameters or environment variables, constructing
//! pools, and handing out session factories.
//!
//! # Example
//! ```ignore
//! use borealis_db::db::session_factory_from_env;
//! use borealis_db::NewConstellation;
//!
//! #[tokio::main]
//! async fn main() -> borealis_db::Result<()> {
//!     let factory = session_factory_from_env()?;
//!     let mut session = factory.session();
//!
//!     let orion = session
//!         .add(&NewConstellation {
//!             name: Some("Orion".to_string()),
//!         })
//!         .await?;
//!     session.commit().await?;
//!
//!     // Sessions from this factory do not expire records on commit.
//!     println!("created {}", orion.id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub use config::ConnectionConfig;
pub use db::{
    create_lazy_pool, create_pool, session_factory_from_env, Constellation, DbPool, JsonMap,
    NewConstellation, Session, SessionFactory,
};
pub use error::{DbError, Result};
