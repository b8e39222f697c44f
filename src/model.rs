//! In-memory view of a data model dump.
//!
//! [`FlatModel`] holds the raw `path -> value` assignments. The structured
//! types ([`WanProfile`], [`WanInterface`], [`Overview`]) are produced from it
//! by the [`discover`](crate::discover) module.

use std::collections::BTreeMap;
use std::ops::Bound;

/// Flat mapping from full dotted path to string value.
///
/// Keys are kept ordered so that instance discovery is deterministic and
/// prefix scans can walk a contiguous key range.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlatModel {
    entries: BTreeMap<String, String>,
}

impl FlatModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value. A path that is already present is overwritten.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(path.into(), value.into());
    }

    /// Exact lookup of a full dotted path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `attr` of the object at `prefix`.
    ///
    /// `<prefix>.<attr>` is tried first, then `<prefix>..<attr>`; some dump
    /// producers emit the doubled separator. The first key present wins.
    pub fn attr(&self, prefix: &str, attr: &str) -> Option<&str> {
        [format!("{prefix}.{attr}"), format!("{prefix}..{attr}")]
            .iter()
            .find_map(|key| self.get(key))
    }

    /// Like [`attr`](Self::attr), substituting `default` when the attribute
    /// is absent or holds an empty string.
    pub fn attr_or(&self, prefix: &str, attr: &str, default: &str) -> String {
        match self.attr(prefix, attr) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => default.to_string(),
        }
    }

    /// Iterate over all `(path, value)` pairs whose path starts with `prefix`.
    pub fn entries_under<'a>(&'a self, prefix: &str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatModel {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut model = FlatModel::new();
        for (path, value) in iter {
            model.insert(path, value);
        }
        model
    }
}

/// Global WANManager settings shown in the overview box.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    /// How the active WAN mode is chosen (e.g., "Automatic", "Manual").
    pub operation_mode: String,
    /// Order in which sensing walks the profiles (e.g., "Sequential").
    pub sensing_policy: String,
    /// Seconds, as written in the dump.
    pub sensing_timeout: String,
    /// Display value of the active WAN mode (`?` when unknown).
    pub wan_mode: String,
    /// Raw active WAN mode name used to flag the matching profile.
    pub active_mode: Option<String>,
}

impl Overview {
    /// Whether a profile with this alias is the currently selected WAN mode.
    pub fn is_active(&self, alias: &str) -> bool {
        self.active_mode.as_deref() == Some(alias)
    }
}

/// One `WAN.{i}` instance: a WAN connection profile.
///
/// Built by [`discover_wan_modes`](crate::discover::discover_wan_modes).
/// Attributes missing from the dump hold `?` (enumerations), `0` (sensing
/// flags) or an empty string (references and optional text).
#[derive(Debug, Clone, PartialEq)]
pub struct WanProfile {
    /// Display name of the profile (e.g., "Ethernet_DHCP").
    /// Also the name `WANMode` refers to when this profile is active.
    pub alias: String,

    /// Profile status as written in the dump (e.g., "Enabled", "Disabled").
    pub status: String,

    /// Physical link type (e.g., "Ethernet", "GPON").
    pub phys_type: String,

    /// Path of the physical interface (e.g., "Device.Ethernet.Interface.5.").
    pub phys_ref: String,

    /// IPv4 DNS server selection mode.
    pub dns_mode: String,

    /// IPv6 DNS server selection mode.
    pub ipv6_dns_mode: String,

    /// `"1"` when link sensing is enabled.
    pub sensing: String,

    /// Order in which sensing tries this profile.
    pub sensing_priority: String,

    /// SFP module type for optical profiles, empty otherwise.
    pub sfp_type: String,

    /// Where the profile came from (e.g., "Default", "User").
    pub origin: String,
}

impl WanProfile {
    pub fn is_disabled(&self) -> bool {
        self.status == "Disabled"
    }

    pub fn sensing_enabled(&self) -> bool {
        self.sensing == "1"
    }
}

/// One `WAN.{i}.Intf.{j}` instance: a layer of the interface stack.
///
/// Mode and type fields default to `-`; reference fields default to an empty
/// string and are shown as `-` once shortened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WanInterface {
    /// Display name of the interface (e.g., "data", "voip").
    pub alias: String,

    /// Underlying network device name (e.g., "eth0").
    pub name: String,

    /// IPv4 address assignment mode (e.g., "dhcp4", "static").
    pub ipv4_mode: String,

    /// IPv6 address assignment mode (e.g., "dhcp6", "none").
    pub ipv6_mode: String,

    /// Path of the `IP.Interface` carrying IPv4.
    pub ipv4_ref: String,

    /// Path of the `IP.Interface` carrying IPv6.
    pub ipv6_ref: String,

    /// Path of the DHCPv4 client.
    pub dhcpv4_ref: String,

    /// Path of the DHCPv6 client.
    pub dhcpv6_ref: String,

    /// Link type (e.g., "ethernet", "vlan").
    pub link_type: String,

    /// VLAN tag. Only meaningful when `link_type` is `vlan`.
    pub vlan_id: String,

    /// Path of the default route installed for this interface.
    pub default_route: String,

    /// Path of the bridge the interface is attached to, if any.
    pub bridge_ref: String,

    /// Path of the PPP interface used for IPv4.
    pub pppv4_ref: String,

    /// Path of the PPP interface used for IPv6.
    pub pppv6_ref: String,
}

impl WanInterface {
    pub fn is_vlan(&self) -> bool {
        self.link_type == "vlan"
    }
}
