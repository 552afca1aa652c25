//! # Attribute Formatting
//!
//! One formatter per attribute type. Call sites pick the formatter from the
//! declared field type, so nothing here inspects values at runtime.

use std::borrow::Cow;

/// Formats a float with exactly `precision` digits after the point.
///
/// Uses Rust's own float formatting, which never consults the locale.
/// Negative zero keeps its sign.
///
/// # Examples
/// ```
/// use ogre_mesh::xml::format::format_float;
/// assert_eq!(format_float(1.0, 6), "1.000000");
/// assert_eq!(format_float(-0.0, 6), "-0.000000");
/// ```
pub fn format_float(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Formats a boolean as `true` or `false`.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Formats an unsigned integer in plain decimal.
pub fn format_int(value: u64) -> String {
    value.to_string()
}

/// Escapes the five XML special characters for use inside an attribute.
///
/// # Examples
/// ```
/// use ogre_mesh::xml::format::escape_text;
/// assert_eq!(escape_text("Rock & \"Roll\""), "Rock &amp; &quot;Roll&quot;");
/// assert_eq!(escape_text("Plain"), "Plain");
/// ```
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// A formatted `name="value"` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr<'a> {
    /// Attribute name.
    pub name: &'static str,
    /// Already formatted and escaped value.
    pub value: Cow<'a, str>,
}

impl<'a> Attr<'a> {
    /// Float attribute.
    pub fn float(name: &'static str, value: f64, precision: usize) -> Self {
        Self {
            name,
            value: Cow::Owned(format_float(value, precision)),
        }
    }

    /// Boolean attribute.
    pub fn boolean(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: Cow::Borrowed(format_bool(value)),
        }
    }

    /// Integer attribute.
    pub fn int(name: &'static str, value: u64) -> Self {
        Self {
            name,
            value: Cow::Owned(format_int(value)),
        }
    }

    /// Text attribute, escaped.
    pub fn text(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value: escape_text(value),
        }
    }
}
