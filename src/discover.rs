use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

use crate::model::{FlatModel, Overview, WanInterface, WanProfile};

// Instance marker relative to a parent path: "<id>.Alias"
lazy_static! {
    static ref INSTANCE_ALIAS: Regex = Regex::new(r"^(\d+)\.Alias$").unwrap();
}

/// Find every `<parent>.<id>.Alias` key and return the ids with their alias.
///
/// The `Alias` key is what makes an instance exist; other attributes of an
/// id without one are ignored.
fn find_instances<'a>(model: &'a FlatModel, parent: &str) -> BTreeMap<u32, &'a str> {
    let scope = format!("{parent}.");
    let mut found = BTreeMap::new();

    for (key, value) in model.entries_under(&scope) {
        let Some(caps) = INSTANCE_ALIAS.captures(&key[scope.len()..]) else {
            continue;
        };
        let digits = &caps[1];
        match digits.parse::<u32>() {
            Ok(id) => {
                found.insert(id, value);
            }
            Err(_) => tracing::warn!(key, "instance id out of range, skipping"),
        }
    }

    found
}

/// Read the global WANManager settings at `prefix`.
pub fn read_overview(model: &FlatModel, prefix: &str) -> Overview {
    let active_mode = model
        .attr(prefix, "WANMode")
        .filter(|mode| !mode.is_empty())
        .map(str::to_string);

    Overview {
        operation_mode: model.attr_or(prefix, "OperationMode", "?"),
        sensing_policy: model.attr_or(prefix, "SensingPolicy", "?"),
        sensing_timeout: model.attr_or(prefix, "SensingTimeout", "?"),
        wan_mode: active_mode.clone().unwrap_or_else(|| "?".to_string()),
        active_mode,
    }
}

/// Discover all `WAN.{i}` profiles under the WANManager root `prefix`.
pub fn discover_wan_modes(model: &FlatModel, prefix: &str) -> BTreeMap<u32, WanProfile> {
    let modes: BTreeMap<u32, WanProfile> = find_instances(model, &format!("{prefix}.WAN"))
        .into_iter()
        .map(|(id, alias)| {
            let wan = format!("{prefix}.WAN.{id}");
            let profile = WanProfile {
                alias: alias.to_string(),
                status: model.attr_or(&wan, "Status", "?"),
                phys_type: model.attr_or(&wan, "PhysicalType", "?"),
                phys_ref: model.attr_or(&wan, "PhysicalReference", ""),
                dns_mode: model.attr_or(&wan, "DNSMode", "?"),
                ipv6_dns_mode: model.attr_or(&wan, "IPv6DNSMode", "?"),
                sensing: model.attr_or(&wan, "EnableSensing", "0"),
                sensing_priority: model.attr_or(&wan, "SensingPriority", "0"),
                sfp_type: model.attr_or(&wan, "SFPType", ""),
                origin: model.attr_or(&wan, "Origin", ""),
            };
            (id, profile)
        })
        .collect();

    tracing::debug!(count = modes.len(), "discovered WAN modes");
    modes
}

/// Discover the `Intf.{j}` instances of profile `wan_id`.
pub fn discover_interfaces(
    model: &FlatModel,
    prefix: &str,
    wan_id: u32,
) -> BTreeMap<u32, WanInterface> {
    let parent = format!("{prefix}.WAN.{wan_id}.Intf");

    find_instances(model, &parent)
        .into_iter()
        .map(|(id, alias)| {
            let intf = format!("{parent}.{id}");
            let interface = WanInterface {
                alias: alias.to_string(),
                name: model.attr_or(&intf, "Name", ""),
                ipv4_mode: model.attr_or(&intf, "IPv4Mode", "-"),
                ipv6_mode: model.attr_or(&intf, "IPv6Mode", "-"),
                ipv4_ref: model.attr_or(&intf, "IPv4Reference", ""),
                ipv6_ref: model.attr_or(&intf, "IPv6Reference", ""),
                dhcpv4_ref: model.attr_or(&intf, "DHCPv4Reference", ""),
                dhcpv6_ref: model.attr_or(&intf, "DHCPv6Reference", ""),
                link_type: model.attr_or(&intf, "Type", "-"),
                vlan_id: model.attr_or(&intf, "VlanID", "-"),
                default_route: model.attr_or(&intf, "DefaultRouteReference", ""),
                bridge_ref: model.attr_or(&intf, "BridgeReference", ""),
                pppv4_ref: model.attr_or(&intf, "PPPv4Reference", ""),
                pppv6_ref: model.attr_or(&intf, "PPPv6Reference", ""),
            };
            (id, interface)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_str;

    const P: &str = "Device.X_PRPLWARE-COM_WANManager";

    fn model(lines: &str) -> FlatModel {
        parse_str(lines)
    }

    #[test]
    fn ids_are_exactly_those_with_alias() {
        let m = model(
            "Device.X_PRPLWARE-COM_WANManager.WAN.1.Alias=\"ETH\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.2.Status=\"Enabled\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.10.Alias=\"GPON\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.3.Intf.1.Alias=\"nested\"\n",
        );
        let ids: Vec<u32> = discover_wan_modes(&m, P).into_keys().collect();
        assert_eq!(ids, vec![1, 10]);
    }

    #[test]
    fn alias_only_profile_gets_defaults() {
        let m = model("Device.X_PRPLWARE-COM_WANManager.WAN.0.Alias=\"bare\"\n");
        let modes = discover_wan_modes(&m, P);
        let profile = &modes[&0];
        assert_eq!(profile.alias, "bare");
        assert_eq!(profile.status, "?");
        assert_eq!(profile.phys_type, "?");
        assert_eq!(profile.phys_ref, "");
        assert_eq!(profile.dns_mode, "?");
        assert_eq!(profile.ipv6_dns_mode, "?");
        assert_eq!(profile.sensing, "0");
        assert_eq!(profile.sensing_priority, "0");
        assert_eq!(profile.sfp_type, "");
        assert_eq!(profile.origin, "");
    }

    #[test]
    fn profile_attributes_use_double_separator_fallback() {
        let m = model(
            "Device.X_PRPLWARE-COM_WANManager.WAN.0.Alias=\"a\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.0..Status=\"Up\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.0.PhysicalType=\"Ethernet\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.0.EnableSensing=\"1\"\n",
        );
        let profile = &discover_wan_modes(&m, P)[&0];
        assert_eq!(profile.status, "Up");
        assert_eq!(profile.phys_type, "Ethernet");
        assert!(profile.sensing_enabled());
    }

    #[test]
    fn interfaces_are_scoped_to_their_profile() {
        let m = model(
            "Device.X_PRPLWARE-COM_WANManager.WAN.1.Alias=\"one\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.1.Alias=\"data\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.2.Alias=\"voip\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.2.Type=\"vlan\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.2.VlanID=\"835\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.1.Intf.3.Type=\"vlan\"\n\
             Device.X_PRPLWARE-COM_WANManager.WAN.11.Intf.1.Alias=\"other\"\n",
        );
        let intfs = discover_interfaces(&m, P, 1);
        assert_eq!(intfs.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(intfs[&1].ipv4_mode, "-");
        assert_eq!(intfs[&1].link_type, "-");
        assert_eq!(intfs[&1].default_route, "");
        assert!(intfs[&2].is_vlan());
        assert_eq!(intfs[&2].vlan_id, "835");

        assert!(discover_interfaces(&m, P, 2).is_empty());
        assert_eq!(discover_interfaces(&m, P, 11).len(), 1);
    }

    #[test]
    fn oversized_ids_are_skipped() {
        let m = model("Device.X_PRPLWARE-COM_WANManager.WAN.99999999999.Alias=\"big\"\n");
        assert!(discover_wan_modes(&m, P).is_empty());
    }

    #[test]
    fn overview_defaults() {
        let overview = read_overview(&FlatModel::new(), P);
        assert_eq!(overview.operation_mode, "?");
        assert_eq!(overview.sensing_policy, "?");
        assert_eq!(overview.sensing_timeout, "?");
        assert_eq!(overview.wan_mode, "?");
        assert_eq!(overview.active_mode, None);
    }

    #[test]
    fn overview_reads_globals() {
        let m = model(
            "Device.X_PRPLWARE-COM_WANManager.OperationMode=\"Automatic\"\n\
             Device.X_PRPLWARE-COM_WANManager.SensingPolicy=\"Sequential\"\n\
             Device.X_PRPLWARE-COM_WANManager.SensingTimeout=\"30\"\n\
             Device.X_PRPLWARE-COM_WANManager.WANMode=\"Backup\"\n",
        );
        let overview = read_overview(&m, P);
        assert_eq!(overview.operation_mode, "Automatic");
        assert_eq!(overview.sensing_timeout, "30");
        assert_eq!(overview.wan_mode, "Backup");
        assert!(overview.is_active("Backup"));
        assert!(!overview.is_active("Primary"));
    }

    #[test]
    fn custom_prefix() {
        let m = model("Device.X_PRPL-COM_WANManager.WAN.4.Alias=\"x\"\n");
        assert!(discover_wan_modes(&m, P).is_empty());
        assert_eq!(discover_wan_modes(&m, "Device.X_PRPL-COM_WANManager").len(), 1);
    }
}
