//! Centralized configuration values shared across the exporter crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Digits written after the decimal point for every floating-point attribute.
///
/// # Examples
/// ```
/// use config::constants::FLOAT_PRECISION;
/// assert_eq!(format!("{:.*}", FLOAT_PRECISION, 0.5), "0.500000");
/// ```
pub const FLOAT_PRECISION: usize = 6;

/// Spaces of indentation per XML nesting level.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert_eq!(INDENT_WIDTH, 4);
/// ```
pub const INDENT_WIDTH: usize = 4;

/// Suffix appended to the object name to form the output file name.
///
/// # Examples
/// ```
/// use config::constants::MESH_FILE_SUFFIX;
/// assert_eq!(format!("Cube{MESH_FILE_SUFFIX}"), "Cube.mesh.xml");
/// ```
pub const MESH_FILE_SUFFIX: &str = ".mesh.xml";

/// Prolog written before the root element of every mesh document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Fewest corners a source face may have.
pub const MIN_FACE_CORNERS: usize = 3;

/// Most corners a source face may have (quads are fan-split).
pub const MAX_FACE_CORNERS: usize = 4;

/// Largest vertex buffer still addressable with 16-bit indices.
///
/// # Examples
/// ```
/// use config::constants::MAX_16BIT_VERTEX_COUNT;
/// assert_eq!(MAX_16BIT_VERTEX_COUNT, u16::MAX as usize + 1);
/// ```
pub const MAX_16BIT_VERTEX_COUNT: usize = 65_536;

/// Upper bound accepted for [`ExportConfig::float_precision`].
///
/// 17 significant digits round-trip any `f64`.
pub const MAX_FLOAT_PRECISION: usize = 17;

/// Upper bound accepted for [`ExportConfig::indent_width`].
pub const MAX_INDENT_WIDTH: usize = 16;

/// Immutable snapshot of the text formatting used by the emitter.
///
/// The default reproduces the fixed schema byte for byte.
///
/// # Examples
/// ```
/// use config::constants::ExportConfig;
/// let config = ExportConfig::default();
/// assert_eq!(config.float_precision, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Digits after the decimal point for float attributes.
    pub float_precision: usize,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl ExportConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// precision and indentation.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ExportConfig;
    /// let cfg = ExportConfig::new(4, 2).expect("valid config");
    /// assert_eq!(cfg.indent_width, 2);
    /// ```
    pub fn new(float_precision: usize, indent_width: usize) -> Result<Self, ConfigError> {
        if float_precision == 0 || float_precision > MAX_FLOAT_PRECISION {
            return Err(ConfigError::InvalidPrecision(float_precision));
        }
        if indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::InvalidIndentWidth(indent_width));
        }
        Ok(Self {
            float_precision,
            indent_width,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            float_precision: FLOAT_PRECISION,
            indent_width: INDENT_WIDTH,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when precision is zero or above [`MAX_FLOAT_PRECISION`].
    InvalidPrecision(usize),
    /// Raised when indentation exceeds [`MAX_INDENT_WIDTH`].
    InvalidIndentWidth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrecision(value) => {
                write!(f, "float_precision must be in 1..={MAX_FLOAT_PRECISION}: {value}")
            }
            ConfigError::InvalidIndentWidth(value) => {
                write!(f, "indent_width must be <= {MAX_INDENT_WIDTH}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
