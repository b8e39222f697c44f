//! Data model dump loading.
//!
//! A dump is plain text with one assignment per line:
//!
//! ```text
//! Device.X_PRPLWARE-COM_WANManager.WANMode="Ethernet_DHCP"
//! Device.X_PRPLWARE-COM_WANManager.WAN.1.Alias="Ethernet_DHCP"
//! ```
//!
//! Anything that does not look like a `Device.` assignment (banners, blank
//! lines, prompts, comments) is skipped without complaint.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::WanViewError;
use crate::model::FlatModel;

// Path is everything up to the first '=', and must start with "Device."
lazy_static! {
    static ref ASSIGNMENT: Regex = Regex::new(r"^(Device\..+?)=(.*)$").unwrap();
}

/// Parses a single dump line into a `(path, value)` pair.
///
/// Surrounding whitespace is trimmed before matching. One leading and one
/// trailing double quote are removed from the value when present.
///
/// # Example
/// ```
/// use wan_manager_view::loader::parse_line;
///
/// assert_eq!(
///     parse_line(r#"Device.A.B="foo""#),
///     Some(("Device.A.B".to_string(), "foo".to_string()))
/// );
/// assert_eq!(parse_line("# comment"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let caps = ASSIGNMENT.captures(line.trim())?;
    let path = caps.get(1)?.as_str();
    let raw = caps.get(2).map_or("", |m| m.as_str());

    let value = raw.strip_prefix('"').unwrap_or(raw);
    let value = value.strip_suffix('"').unwrap_or(value);

    Some((path.to_string(), value.to_string()))
}

/// Builds a [`FlatModel`] from the full text of a dump.
///
/// Lines may end in `\n`, `\r\n` or a bare `\r`. They are applied in order,
/// so a path assigned twice keeps its last value.
pub fn parse_str(content: &str) -> FlatModel {
    let mut model = FlatModel::new();
    let mut skipped = 0usize;

    for line in content.split(['\r', '\n']).filter(|l| !l.is_empty()) {
        match parse_line(line) {
            Some((path, value)) => model.insert(path, value),
            None => skipped += 1,
        }
    }

    tracing::debug!(entries = model.len(), skipped, "parsed data model dump");
    model
}

/// Reads and parses the dump at `path`.
///
/// # Errors
/// Returns [`WanViewError::InputRead`] if the file cannot be read. Invalid
/// UTF-8 is replaced rather than rejected, since dumps are often captured
/// from serial consoles.
pub fn load(path: &Path) -> Result<FlatModel, WanViewError> {
    let bytes = fs::read(path).map_err(|source| WanViewError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "reading data model dump");

    Ok(parse_str(&String::from_utf8_lossy(&bytes)))
}
