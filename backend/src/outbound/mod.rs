//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed vehicle store using Diesel ORM.

pub mod persistence;
