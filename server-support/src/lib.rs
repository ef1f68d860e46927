//! Plumbing shared by the HTTP services in this workspace.
//!
//! # Overview
//! Both services load their settings the same way, log through the same
//! subscriber, wrap their router in the same request span and stop on
//! Ctrl-C. Keeping that here leaves each service crate with nothing but its
//! routes and handlers.

pub mod config;
pub mod error;
pub mod logging;
pub mod serve;

pub use config::{get_configuration, ServerSettings, Settings};
pub use error::SupportError;
pub use logging::{init_tracing, with_request_tracing};
pub use serve::{bind, serve};
