//! Database module for borealis-db
//!
//! Provides PostgreSQL connection management, sessions, and operations on
//! the constellation table.

pub mod connection;
pub mod constellations;
pub mod models;
pub mod schema;
pub mod session;

pub use connection::{create_lazy_pool, create_pool, session_factory_from_env, DbPool};
pub use models::*;
pub use schema::ensure_schema;
pub use session::{Session, SessionFactory};
