//! epubdb - diagnostic and seeding tools for EPUB document databases
//!
//! This crate provides:
//! - Read-only inspection of the `metadata` and `chapters_html` JSON columns
//! - A seeder that fills `chapters_html` with placeholder pages per chapter
//! - A thin SQLite handle over the `documents` table

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
