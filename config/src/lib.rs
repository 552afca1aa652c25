//! # Config Crate
//!
//! Centralized configuration constants for the Ogre XML mesh exporter.
//! Every formatting rule and schema limit is defined here so the builder and
//! the emitter never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ExportConfig, FLOAT_PRECISION, INDENT_WIDTH};
//!
//! let cfg = ExportConfig::default();
//! assert_eq!(cfg.float_precision, FLOAT_PRECISION);
//! assert_eq!(cfg.indent_width, INDENT_WIDTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Locale-Free**: Formatting parameters never depend on the host
//! - **Schema Compatible**: Defaults reproduce the fixed mesh XML layout

pub mod constants;
