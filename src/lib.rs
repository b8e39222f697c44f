//! WAN Manager diagram library for TR-181 data model dumps
//!
//! This library reads a flat `Device.Path=Value` dump of a TR-181 data model
//! and renders the `X_PRPLWARE-COM_WANManager` WAN modes, together with the
//! interface stack each one is built from, as a terminal-width-aware text
//! report.
//!
//! # Modules
//!
//! - [`config`] - Optional TOML configuration (WANManager prefix, widths)
//! - [`discover`] - Instance discovery for WAN modes and their interfaces
//! - [`error`] - Custom error types for the library
//! - [`layout`] - Box drawing, fixed-width cells and layout selection
//! - [`loader`] - Dump file parsing
//! - [`model`] - Flat path/value model and the discovered value types
//! - [`render`] - Overview, per-mode panels and summary table
//! - [`report`] - Whole-report assembly
//! - [`terminal`] - Terminal width detection
//!
//! # Example Usage
//!
//! ```
//! use wan_manager_view::{loader, report::{render_report, ReportSettings}};
//!
//! let model = loader::parse_str(
//!     "Device.X_PRPLWARE-COM_WANManager.WANMode=\"ETH\"\n\
//!      Device.X_PRPLWARE-COM_WANManager.WAN.1.Alias=\"ETH\"\n",
//! );
//! let text = render_report(&model, &ReportSettings::default());
//! assert!(text.contains("WAN.1: ETH ★ ACTIVE"));
//! ```

/// Configuration file handling.
/// Reads the optional per-user TOML file with serde.
pub mod config;

/// Discovery of `WAN.{i}` and `WAN.{i}.Intf.{j}` instances by their `Alias` keys.
pub mod discover;

/// Error module defining custom error types for the library.
/// Uses `thiserror` for ergonomic error handling.
pub mod error;

/// Text layout helpers shared by the renderers.
pub mod layout;

/// Loader turning dump text into a [`FlatModel`].
pub mod loader;

/// Flat model with the two-form attribute accessor, plus the WAN value types.
pub mod model;

/// Section renderers producing text for a fixed width.
pub mod render;

/// Report assembly from a model and settings.
pub mod report;

/// Terminal width detection with `COLUMNS` and fallback handling.
pub mod terminal;

// Re-export the main error type for library users
pub use error::WanViewError;

// Re-export the model types most callers need
pub use model::{FlatModel, Overview, WanInterface, WanProfile};

pub use discover::{discover_interfaces, discover_wan_modes, read_overview};
pub use report::{ReportSettings, render_report};
