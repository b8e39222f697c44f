//! Text layout primitives: box borders, fixed-width cells and the
//! compact/wide layout choice.

/// Widest report the renderers will lay out. Larger requests are clamped.
pub const MAX_WIDTH: usize = 1024;

/// Which rendering variant a report uses, fixed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Stacked lines per interface, for narrow terminals.
    Compact,
    /// Interface tables with one column per attribute.
    Wide,
}

impl Layout {
    /// Chooses the layout for a report `width` columns wide.
    ///
    /// # Arguments
    /// * `width` - Report width in columns
    /// * `wide_threshold` - Smallest width that should use the wide layout
    ///
    /// # Returns
    /// [`Layout::Wide`] when `width` reaches `wide_threshold` and the wide
    /// interface table fits in `width`; [`Layout::Compact`] otherwise. A low
    /// threshold therefore never produces a table wider than the report.
    pub fn for_width(width: usize, wide_threshold: usize) -> Self {
        if width < wide_threshold || IntfColumns::for_width(width).total() > width {
            Layout::Compact
        } else {
            Layout::Wide
        }
    }
}

/// Intf, Alias, IPv4Mode, IPv6Mode, Type, VLAN, IPv4Ref
const FIXED_INTF_COLUMNS: [usize; 7] = [6, 10, 10, 10, 10, 6, 20];
const MIN_ROUTE_COLUMN: usize = 10;
/// Box prefix, column separators and right margin.
const INTF_TABLE_OVERHEAD: usize = 12;

/// Column widths of the wide interface table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntfColumns {
    /// Intf, Alias, IPv4Mode, IPv6Mode, Type, VLAN, IPv4Ref and DefRoute,
    /// in display order.
    pub widths: [usize; 8],
}

impl IntfColumns {
    /// The trailing default-route column takes whatever the fixed columns
    /// leave over, but never less than ten.
    pub fn for_width(width: usize) -> Self {
        let fixed: usize = FIXED_INTF_COLUMNS.iter().sum();
        let route = width
            .saturating_sub(fixed + INTF_TABLE_OVERHEAD)
            .max(MIN_ROUTE_COLUMN);

        let mut widths = [0; 8];
        widths[..7].copy_from_slice(&FIXED_INTF_COLUMNS);
        widths[7] = route;
        IntfColumns { widths }
    }

    /// Columns plus the single-space separators between them.
    pub fn total(&self) -> usize {
        self.widths.iter().sum::<usize>() + self.widths.len() - 1
    }
}

/// Summary table columns for the wide layout:
/// ID, Alias, PhysType, Status, DNS, Sens, Intfs.
pub const SUMMARY_WIDE: [usize; 7] = [4, 20, 10, 10, 10, 5, 6];
/// Summary table columns for the compact layout: ID, Alias, Phys, Status, Sn, If.
pub const SUMMARY_COMPACT: [usize; 6] = [3, 16, 9, 9, 4, 4];

/// A horizontal rule `width` characters long, with optional end caps.
pub fn hline(fill: char, width: usize, left: &str, right: &str) -> String {
    let caps = left.chars().count() + right.chars().count();
    let inner = width.saturating_sub(caps);
    let mut line = String::with_capacity(width.saturating_mul(fill.len_utf8()));
    line.push_str(left);
    line.extend(std::iter::repeat_n(fill, inner));
    line.push_str(right);
    line
}

/// A content line inside a box. Boxes have no right border on content lines.
pub fn boxline(text: &str) -> String {
    format!("│  {text}")
}

/// Left-align `text` in exactly `width` characters.
///
/// Longer text is cut and marked with "..." (or hard-cut when the cell is
/// too narrow to hold the marker).
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text:<width$}");
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Join cells with single spaces, fitting each to its column width.
pub fn row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| fit(cell, w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join cells with single spaces, padding each to its column width.
///
/// Unlike [`row`], longer cells are kept whole and push the rest of the row
/// right, so no value is ever hidden.
pub fn padded_row(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Separator row made of `─` runs matching `widths`.
pub fn rule_row(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&w| "─".repeat(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten a `Device.*` reference for display. Empty references show as `-`.
pub fn shorten_ref(reference: &str) -> String {
    if reference.is_empty() {
        return "-".to_string();
    }
    reference
        .replace("Device.", "")
        .trim_end_matches('.')
        .to_string()
}
