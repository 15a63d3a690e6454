use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data", default)]
    pub data: WlanCfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanCfgData {
    pub wlan_cfg_entries: Option<WlanCfgEntries>,
    pub wlan_policies: Option<WlanPolicies>,
    pub policy_list_entries: Option<PolicyListEntries>,
    pub wireless_aaa_policy_configs: Option<Value>,
    pub dot11ac_mcs_entries: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanCfgEntries {
    pub wlan_cfg_entry: Vec<WlanCfgEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanCfgEntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entries", default)]
    pub wlan_cfg_entries: Option<WlanCfgEntries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanCfgEntryResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entry", default)]
    pub wlan_cfg_entry: Vec<WlanCfgEntry>,
}

/// A WLAN profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanCfgEntry {
    pub profile_name: String,
    pub wlan_id: Option<u32>,
    pub auth_key_mgmt_psk: Option<bool>,
    pub auth_key_mgmt_dot1x: Option<bool>,
    pub auth_key_mgmt_sae: Option<bool>,
    pub psk: Option<String>,
    pub wpa2_enabled: Option<bool>,
    pub wpa3_enabled: Option<bool>,
    pub auth_list_name: Option<String>,
    pub apf_vap_id_data: Option<ApfVapIdData>,
    pub wlan_radio_policies: Option<Value>,
    pub mdns_sd_mode: Option<String>,
}

impl WlanCfgEntry {
    pub fn ssid(&self) -> Option<&str> {
        self.apf_vap_id_data.as_ref()?.ssid.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.apf_vap_id_data
            .as_ref()
            .and_then(|d| d.wlan_status)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApfVapIdData {
    pub ssid: Option<String>,
    pub wlan_status: Option<bool>,
    pub broadcast_ssid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanPolicies {
    pub wlan_policy: Vec<WlanPolicy>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanPoliciesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-policies", default)]
    pub wlan_policies: Option<WlanPolicies>,
}

/// A policy profile
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanPolicy {
    pub policy_profile_name: String,
    pub description: Option<String>,
    pub status: Option<bool>,
    pub interface_name: Option<String>,
    pub wlan_switching_policy: Option<WlanSwitchingPolicy>,
    pub wlan_timeout: Option<Value>,
    pub per_ssid_qos: Option<Value>,
    pub policy_proxy_settings: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanSwitchingPolicy {
    pub central_switching: Option<bool>,
    pub central_authentication: Option<bool>,
    pub central_dhcp: Option<bool>,
    pub central_assoc_enable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PolicyListEntries {
    pub policy_list_entry: Vec<PolicyListEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyListEntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entries", default)]
    pub policy_list_entries: Option<PolicyListEntries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyListEntryResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry", default)]
    pub policy_list_entry: Vec<PolicyListEntry>,
}

/// A policy tag: which policy profile applies to which WLAN profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PolicyListEntry {
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wlan_policies: Option<PolicyTagWlanPolicies>,
    /// Leaves not modelled above, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolicyListEntry {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    pub fn mappings(&self) -> &[WlanPolicyMap] {
        self.wlan_policies
            .as_ref()
            .map_or(&[], |p| p.wlan_policy.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PolicyTagWlanPolicies {
    pub wlan_policy: Vec<WlanPolicyMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanPolicyMap {
    pub wlan_profile_name: String,
    pub policy_profile_name: String,
}

/// `Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WlanGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data", default)]
    pub data: WlanGlobalOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanGlobalOperData {
    pub wlan_info: Vec<WlanInfo>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanInfo {
    pub wlan_profile_name: String,
    pub curr_clients_count: Option<u32>,
    pub per_wlan_max_client_syslog: Option<bool>,
}
