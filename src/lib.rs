//! Job matching and application tracking for KaziKE candidates and employers.

pub mod analytics;
pub mod candidates;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod interactions;
pub mod matching;
pub mod models;
pub mod profile;
pub mod tracker;

pub use error::{KazikeError, Result};
