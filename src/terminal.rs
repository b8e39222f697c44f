use std::env;

use terminal_size::{Width, terminal_size};

/// Determine the report width in columns.
///
/// A positive `COLUMNS` environment value wins, then the size of the terminal
/// on stdout, then `fallback`. A zero width counts as unknown.
pub fn detect_width(fallback: usize) -> usize {
    if let Some(columns) = columns_from_env(env::var("COLUMNS").ok().as_deref()) {
        tracing::debug!(columns, "width from COLUMNS");
        return columns;
    }

    match terminal_size() {
        Some((Width(w), _)) if w > 0 => {
            tracing::debug!(width = w, "width from terminal");
            usize::from(w)
        }
        _ => {
            tracing::debug!(fallback, "terminal size unavailable");
            fallback
        }
    }
}

fn columns_from_env(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|&c| c > 0)
}
