//! CNPJ Search - find Brazilian companies by founding date.
//!
//! This crate queries the CNPJá `office` collection for MEI companies
//! founded within a date range and renders the matches through a
//! pluggable view.
//!
//! # Example
//!
//! ```
//! use cnpj_search::format::{localize_date, mask_tax_id};
//! use cnpj_search::types::DateRange;
//!
//! assert!(DateRange::parse("2024-01-01", "2024-06-30").is_ok());
//! assert_eq!(mask_tax_id("12345678000199"), "12.345.678/0001-99");
//! assert_eq!(localize_date("2024-03-10"), "10/03/2024");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, date validation, URL building, environment config
//! - [`types`]: Date range, registry records, debug trace
//! - [`error`]: Error types and Result alias
//! - [`format`]: CNPJ masking and date localization
//! - [`render`]: Record-to-row mapping
//! - [`view`]: View port trait and in-memory view
//! - [`client`]: HTTP client for the registry
//! - [`controller`]: The search pipeline
//! - [`terminal`]: Terminal view
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod render;
pub mod terminal;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use client::{CnpjaClient, HttpReply, RegistryApi};
pub use config::SearchConfig;
pub use controller::{SearchController, SearchOutcome};
pub use error::{Result, SearchError};
pub use types::{CompanyRecord, DateRange, DebugTrace};
pub use view::{MemoryView, Panel, ViewPort};
