use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-general-oper:general-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneralOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:general-oper-data", default)]
    pub data: GeneralOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneralOperData {
    pub mgmt_intf_data: Option<MgmtIntfData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MgmtIntfDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-oper:mgmt-intf-data", default)]
    pub mgmt_intf_data: Option<MgmtIntfData>,
}

/// Wireless management interface of the controller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MgmtIntfData {
    pub intf_name: Option<String>,
    pub intf_type: Option<String>,
    pub intf_id: Option<u32>,
    pub mgmt_vlan: Option<u16>,
    pub mgmt_ip: Option<String>,
    pub net_mask: Option<String>,
    pub mgmt_mac: Option<String>,
}

/// `Cisco-IOS-XE-wireless-general-cfg:general-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneralCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data", default)]
    pub data: GeneralCfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneralCfgData {
    pub mewlc_config: Option<MewlcConfig>,
    pub cac_config: Option<CacConfig>,
    pub mfp: Option<Mfp>,
    pub fips_cfg: Option<FipsCfg>,
    pub wsa_ap_client_event: Option<Value>,
    pub sim_l3_interface_cache_data: Option<SimL3InterfaceCacheData>,
    pub wlc_management_data: Option<WlcManagementData>,
    pub laginfo: Option<Laginfo>,
    pub multicast_config: Option<MulticastConfig>,
    pub feature_usage_cfg: Option<Value>,
    pub threshold_warn_cfg: Option<ThresholdWarnCfg>,
    pub ap_loc_ranging_cfg: Option<ApLocRangingCfg>,
    pub geolocation_cfg: Option<GeolocationCfg>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MewlcConfig {
    pub mewlc_platform: Option<bool>,
    pub mewlc_vrrp_vrid: Option<u32>,
    pub preferred_master_name: Option<String>,
    pub ewc_image_download_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CacConfig {
    pub ip_mac_binding: Option<bool>,
    pub sip_snooping_ports: Option<Value>,
}

/// Management frame protection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Mfp {
    pub global_mfp_state: Option<bool>,
    pub ap_impersonation_detection: Option<bool>,
    pub mfp_key_refresh_interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MfpResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-cfg:mfp", default)]
    pub mfp: Option<Mfp>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FipsCfg {
    pub dtls_version: Option<String>,
    pub dtls_ciphersuite: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SimL3InterfaceCacheData {
    pub interface_name: Option<String>,
    pub interface_name_v6: Option<String>,
    pub nat_ip_address: Option<String>,
    pub nat_enable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlcManagementData {
    pub pki_trustpoint_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Laginfo {
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MulticastConfig {
    pub is_mdns_enabled: Option<bool>,
    pub multicast_over_multicast_ipv4_addr: Option<String>,
    pub multicast_over_multicast_ipv6_addr: Option<String>,
    pub is_non_ip_multicast_enabled: Option<bool>,
    pub wireless_multicast_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MulticastConfigResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-general-cfg:multicast-config", default)]
    pub multicast_config: Option<MulticastConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ThresholdWarnCfg {
    pub threshold_warning: Option<bool>,
    pub warning_period: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApLocRangingCfg {
    pub ranging_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeolocationCfg {
    pub ap_geolocation_update_freq: Option<u32>,
    pub enable_derivation: Option<bool>,
}
