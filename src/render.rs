//! Report rendering.
//!
//! Every function here returns the rendered text instead of printing it, so
//! the binary decides where output goes and tests can inspect it directly.
//!
//! # Output Format (wide layout)
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────────────────────┐
//! │  🟢 WAN.1: Ethernet_DHCP ★ ACTIVE
//! │  Physical: Ethernet  Ref: Ethernet.Interface.5  📡 Sensing  Status: Enabled  DNS: Dynamic  IPv6DNS: Dynamic
//! ├──────────────────────────────────────────────────────────────────────────────────────────┤
//! │  Intf   Alias      IPv4Mode   IPv6Mode   Type       VLAN   IPv4Ref              DefRoute
//! │  ────── ────────── ────────── ────────── ────────── ────── ──────────────────── ──────────
//! │  1      data       dhcp4      dhcp6      ethernet   -      IP.Interface.2       -
//! └──────────────────────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::layout::{
    IntfColumns, Layout, MAX_WIDTH, SUMMARY_COMPACT, SUMMARY_WIDE, boxline, hline, padded_row,
    row, rule_row, shorten_ref,
};
use crate::model::{Overview, WanInterface, WanProfile};

const ACTIVE_MARK: &str = "★";

/// One line of the summary table.
#[derive(Debug, Clone)]
pub struct SummaryRow<'a> {
    /// Instance number of the `WAN.{i}` profile.
    pub id: u32,

    /// The profile being summarised.
    pub profile: &'a WanProfile,

    /// Number of `Intf.{j}` instances discovered under the profile.
    pub interface_count: usize,

    /// Whether the profile is the currently selected WAN mode.
    /// Active rows are prefixed with `★`.
    pub active: bool,
}

/// Renders report sections for a fixed width and layout.
///
/// The layout is resolved once in [`Renderer::new`], so every section of a
/// report agrees on compact versus wide.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: usize,
    layout: Layout,
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn status_marker(profile: &WanProfile) -> &'static str {
    if profile.is_disabled() { "🔴" } else { "🟢" }
}

fn sensing_marker(profile: &WanProfile) -> &'static str {
    if profile.sensing_enabled() { "📡" } else { "  " }
}

impl Renderer {
    /// Creates a renderer for reports `width` columns wide.
    ///
    /// # Arguments
    /// * `width` - Report width in columns, clamped to [`MAX_WIDTH`]
    /// * `wide_threshold` - Smallest width that uses the wide layout
    ///
    /// # Returns
    /// A renderer whose layout comes from [`Layout::for_width`].
    pub fn new(width: usize, wide_threshold: usize) -> Self {
        let width = width.min(MAX_WIDTH);
        Renderer {
            width,
            layout: Layout::for_width(width, wide_threshold),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Bordered box with the global WANManager settings.
    pub fn overview(&self, overview: &Overview) -> String {
        let width = self.width;
        let inner = width.saturating_sub(2);
        let mut out = String::new();

        push_line(&mut out, &hline('═', width, "╔", "╗"));
        push_line(&mut out, &format!("║{:^inner$}║", "WAN MANAGER OVERVIEW"));
        push_line(&mut out, &hline('═', width, "╠", "╣"));
        push_line(
            &mut out,
            &boxline(&format!(
                "OperationMode: {}   SensingPolicy: {}   SensingTimeout: {}s",
                overview.operation_mode, overview.sensing_policy, overview.sensing_timeout
            )),
        );
        push_line(&mut out, &boxline(&format!("Active WANMode: {}", overview.wan_mode)));
        push_line(&mut out, &hline('═', width, "╚", "╝"));
        out.push('\n');
        out
    }

    /// Panel for one WAN profile and its interface stack.
    pub fn profile_panel(
        &self,
        id: u32,
        profile: &WanProfile,
        interfaces: &BTreeMap<u32, WanInterface>,
        active: bool,
    ) -> String {
        let width = self.width;
        let active_tag = if active {
            format!(" {ACTIVE_MARK} ACTIVE")
        } else {
            String::new()
        };
        let sense = sensing_marker(profile);
        let phys_ref = shorten_ref(&profile.phys_ref);
        let mut out = String::new();

        push_line(&mut out, &hline('─', width, "┌", "┐"));
        push_line(
            &mut out,
            &boxline(&format!(
                "{} WAN.{id}: {}{active_tag}",
                status_marker(profile),
                profile.alias
            )),
        );

        match self.layout {
            Layout::Compact => {
                push_line(
                    &mut out,
                    &boxline(&format!(
                        "Physical: {}  Ref: {phys_ref}  {sense} Sensing",
                        profile.phys_type
                    )),
                );
                push_line(
                    &mut out,
                    &boxline(&format!(
                        "DNS: {}  IPv6DNS: {}  Status: {}",
                        profile.dns_mode, profile.ipv6_dns_mode, profile.status
                    )),
                );
            }
            Layout::Wide => {
                push_line(
                    &mut out,
                    &boxline(&format!(
                        "Physical: {}  Ref: {phys_ref}  {sense} Sensing  \
                         Status: {}  DNS: {}  IPv6DNS: {}",
                        profile.phys_type,
                        profile.status,
                        profile.dns_mode,
                        profile.ipv6_dns_mode
                    )),
                );
            }
        }
        push_line(&mut out, &hline('─', width, "├", "┤"));

        if interfaces.is_empty() {
            push_line(&mut out, &boxline("(no interfaces)"));
        } else {
            match self.layout {
                Layout::Compact => self.compact_interfaces(&mut out, interfaces),
                Layout::Wide => self.wide_interfaces(&mut out, interfaces),
            }
        }

        push_line(&mut out, &hline('─', width, "└", "┘"));
        out.push('\n');
        out
    }

    fn compact_interfaces(&self, out: &mut String, interfaces: &BTreeMap<u32, WanInterface>) {
        for (id, intf) in interfaces {
            let mut line = format!(
                "Intf.{id} \"{}\"  IPv4:{}  IPv6:{}  {}",
                intf.alias, intf.ipv4_mode, intf.ipv6_mode, intf.link_type
            );
            if intf.is_vlan() {
                line.push_str(&format!(" vlan:{}", intf.vlan_id));
            }
            push_line(out, &boxline(&line));

            let refs: Vec<String> = [
                ("IPv4", &intf.ipv4_ref),
                ("DHCPv4", &intf.dhcpv4_ref),
                ("DHCPv6", &intf.dhcpv6_ref),
                ("Route", &intf.default_route),
            ]
            .into_iter()
            .filter(|(_, reference)| !reference.is_empty())
            .map(|(label, reference)| format!("{label}→{}", shorten_ref(reference)))
            .collect();

            if !refs.is_empty() {
                push_line(out, &boxline(&format!("  {}", refs.join(" | "))));
            }
        }
    }

    fn wide_interfaces(&self, out: &mut String, interfaces: &BTreeMap<u32, WanInterface>) {
        let columns = IntfColumns::for_width(self.width);
        let widths = &columns.widths;

        push_line(
            out,
            &boxline(&row(
                &["Intf", "Alias", "IPv4Mode", "IPv6Mode", "Type", "VLAN", "IPv4Ref", "DefRoute"],
                widths,
            )),
        );
        push_line(out, &boxline(&rule_row(widths)));

        for (id, intf) in interfaces {
            let id = id.to_string();
            let vlan = if intf.is_vlan() { intf.vlan_id.as_str() } else { "-" };
            let ipv4_ref = shorten_ref(&intf.ipv4_ref);
            let route = shorten_ref(&intf.default_route);
            push_line(
                out,
                &boxline(&row(
                    &[
                        &id,
                        &intf.alias,
                        &intf.ipv4_mode,
                        &intf.ipv6_mode,
                        &intf.link_type,
                        vlan,
                        &ipv4_ref,
                        &route,
                    ],
                    widths,
                )),
            );
        }
    }

    /// One-row-per-profile table closing the report.
    ///
    /// The wide layout adds a DNS column and spells out the status. Cells are
    /// padded to their column but never cut, so long aliases stay readable.
    pub fn summary(&self, rows: &[SummaryRow<'_>]) -> String {
        let width = self.width;
        let mut out = String::new();

        push_line(&mut out, &hline('═', width, "", ""));
        push_line(&mut out, "  WAN MODE SUMMARY");
        push_line(&mut out, &hline('═', width, "", ""));

        match self.layout {
            Layout::Wide => {
                let header = padded_row(
                    &["ID", "Alias", "PhysType", "Status", "DNS", "Sens", "Intfs"],
                    &SUMMARY_WIDE,
                );
                push_line(&mut out, &format!("  {header}"));
                push_line(&mut out, &format!("  {}", rule_row(&SUMMARY_WIDE)));
            }
            Layout::Compact => {
                let header =
                    padded_row(&["ID", "Alias", "Phys", "Status", "Sn", "If"], &SUMMARY_COMPACT);
                push_line(&mut out, &format!("  {header}"));
                push_line(&mut out, &format!("  {}", rule_row(&SUMMARY_COMPACT)));
            }
        }

        for summary in rows {
            let profile = summary.profile;
            let lead = if summary.active { ACTIVE_MARK } else { " " };
            let id = summary.id.to_string();
            let count = summary.interface_count.to_string();
            let status = status_marker(profile);
            let sense = sensing_marker(profile);

            let cells = match self.layout {
                Layout::Wide => padded_row(
                    &[
                        &id,
                        &profile.alias,
                        &profile.phys_type,
                        &format!("{status} {}", profile.status),
                        &profile.dns_mode,
                        sense,
                        &count,
                    ],
                    &SUMMARY_WIDE,
                ),
                Layout::Compact => padded_row(
                    &[&id, &profile.alias, &profile.phys_type, status, sense, &count],
                    &SUMMARY_COMPACT,
                ),
            };
            push_line(&mut out, &format!(" {lead}{cells}"));
        }

        out.push('\n');
        out
    }
}
