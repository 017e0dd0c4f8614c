//! Launch Dashboard - an interactive launch records dashboard
//!
//! Loads a CSV of launch records once at startup, serves a page with a site
//! dropdown, a payload range slider and two charts, and re-renders those
//! charts whenever a control changes.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: one-shot commands (`inspect`, `config generate`)
//!
//! # Architecture
//! - `dataset`: CSV loading and the immutable in-memory table
//! - `dashboard`: controls, filters, figures, layout and callback registry
//! - `api`: HTTP services and middleware
//! - `interfaces`: command-line commands
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: logging

#[cfg(feature = "server")]
pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod system;
pub mod utils;
