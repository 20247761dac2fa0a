//! yd_client — HTTP client for the Youdu enterprise-messaging API
//!
//! The shared [`App`] context owns the configuration, the decoded message
//! key, and the transport; [`Group`] and [`Media`] resource clients share it
//! and map each API operation onto one encrypted envelope round trip.
//!
//! # Modules
//! - `config`    — Tenant credentials and connection settings
//! - `app`       — Shared application context and envelope helpers
//! - `transport` — HTTP transport seam (`reqwest` implementation)
//! - `group`     — Group management operations
//! - `media`     — Media upload/download/info
//! - `error`     — Client error taxonomy

pub mod app;
pub mod config;
pub mod error;
pub mod group;
pub mod media;
pub mod transport;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use group::Group;
pub use media::Media;
