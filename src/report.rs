use std::collections::BTreeMap;

use crate::config::{Config, DEFAULT_FALLBACK_WIDTH, DEFAULT_PREFIX, DEFAULT_WIDE_THRESHOLD};
use crate::discover::{discover_interfaces, discover_wan_modes, read_overview};
use crate::model::FlatModel;
use crate::render::{Renderer, SummaryRow};

pub const NO_MODES_MESSAGE: &str = "No WANManager WAN modes found.";

/// Inputs that shape a report besides the model itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    /// WANManager root path.
    pub prefix: String,
    /// Report width in columns.
    pub width: usize,
    /// Widths at or above this use the wide layout.
    pub wide_threshold: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            prefix: DEFAULT_PREFIX.to_string(),
            width: DEFAULT_FALLBACK_WIDTH,
            wide_threshold: DEFAULT_WIDE_THRESHOLD,
        }
    }
}

impl ReportSettings {
    pub fn from_config(config: &Config, width: usize) -> Self {
        ReportSettings {
            prefix: config.prefix.clone(),
            width,
            wide_threshold: config.wide_threshold,
        }
    }
}

/// Render the complete report: overview, one panel per WAN mode in id
/// order, then the summary table.
pub fn render_report(model: &FlatModel, settings: &ReportSettings) -> String {
    let renderer = Renderer::new(settings.width, settings.wide_threshold);
    tracing::debug!(width = settings.width, layout = ?renderer.layout(), "rendering report");

    let overview = read_overview(model, &settings.prefix);
    let mut out = renderer.overview(&overview);

    let modes = discover_wan_modes(model, &settings.prefix);
    if modes.is_empty() {
        out.push_str(NO_MODES_MESSAGE);
        out.push('\n');
        return out;
    }

    let interfaces: BTreeMap<u32, _> = modes
        .keys()
        .map(|&id| (id, discover_interfaces(model, &settings.prefix, id)))
        .collect();

    let mut rows = Vec::with_capacity(modes.len());
    for (&id, profile) in &modes {
        let intfs = &interfaces[&id];
        let active = overview.is_active(&profile.alias);
        out.push_str(&renderer.profile_panel(id, profile, intfs, active));
        rows.push(SummaryRow {
            id,
            profile,
            interface_count: intfs.len(),
            active,
        });
    }

    out.push_str(&renderer.summary(&rows));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_str;

    const DUMP: &str = r#"
root@prplOS:~# ba-cli 'Device.X_PRPLWARE-COM_WANManager.?'
Device.X_PRPLWARE-COM_WANManager.OperationMode="Automatic"
Device.X_PRPLWARE-COM_WANManager.SensingPolicy="Sequential"
Device.X_PRPLWARE-COM_WANManager.SensingTimeout="20"
Device.X_PRPLWARE-COM_WANManager.WANMode="Backup"
Device.X_PRPLWARE-COM_WANManager.WAN.1.Alias="Primary"
Device.X_PRPLWARE-COM_WANManager.WAN.1.Status="Enabled"
Device.X_PRPLWARE-COM_WANManager.WAN.1.PhysicalType="Ethernet"
Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.1.Alias="data"
Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.1.IPv4Mode="dhcp4"
Device.X_PRPLWARE-COM_WANManager.WAN.2.Alias="Backup"
Device.X_PRPLWARE-COM_WANManager.WAN.2.Status="Disabled"
Device.X_PRPLWARE-COM_WANManager.WAN.2.EnableSensing="1"
"#;

    fn settings(width: usize) -> ReportSettings {
        ReportSettings { width, ..ReportSettings::default() }
    }

    #[test]
    fn only_active_profile_is_marked() {
        let model = parse_str(DUMP);
        for width in [80, 120] {
            let report = render_report(&model, &settings(width));
            assert_eq!(report.matches("★ ACTIVE").count(), 1);
            assert!(report.contains("WAN.2: Backup ★ ACTIVE"));
            assert!(report.contains("WAN.1: Primary\n"));
            assert!(report.lines().any(|l| l.starts_with(" ★2")));
            assert!(!report.lines().any(|l| l.starts_with(" ★1")));
        }
    }

    #[test]
    fn panels_in_numeric_order() {
        let model = parse_str(
            "Device.X_PRPLWARE-COM_WANManager.WAN.10.Alias=ten\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.2.Alias=two\n",
        );
        let report = render_report(&model, &settings(100));
        let two = report.find("WAN.2: two").unwrap();
        let ten = report.find("WAN.10: ten").unwrap();
        assert!(two < ten);
    }

    #[test]
    fn layout_switches_at_threshold() {
        let model = parse_str(DUMP);
        let narrow = render_report(&model, &settings(89));
        let wide = render_report(&model, &settings(90));

        assert!(narrow.contains("Intf.1 \"data\""));
        assert!(!narrow.contains("IPv4Mode"));
        assert!(narrow.contains("  ID  Alias"));

        assert!(wide.contains("Intf   Alias      IPv4Mode"));
        assert!(wide.contains("PhysType"));
        assert!(wide.contains("  ID   Alias"));
    }

    #[test]
    fn empty_model() {
        let report = render_report(&FlatModel::new(), &settings(80));
        assert!(report.contains("OperationMode: ?   SensingPolicy: ?   SensingTimeout: ?s"));
        assert!(report.contains("Active WANMode: ?"));
        assert!(report.ends_with("No WANManager WAN modes found.\n"));
        assert!(!report.contains("WAN MODE SUMMARY"));
    }

    #[test]
    fn profile_without_interfaces() {
        let model = parse_str(DUMP);
        let report = render_report(&model, &settings(80));
        let backup = report.split("WAN.2: Backup").nth(1).unwrap();
        assert!(backup.contains("(no interfaces)"));
    }
}
