use super::yang::{self, counter};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data", default)]
    pub data: ApOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApOperData {
    pub ap_radio_neighbor: Vec<ApRadioNeighbor>,
    pub radio_oper_data: Vec<RadioOperData>,
    pub radio_reset_stats: Vec<RadioResetStats>,
    pub capwap_data: Vec<CapwapData>,
    pub ap_name_mac_map: Vec<ApNameMacMap>,
    pub wtp_slot_wlan_stats: Vec<WtpSlotWlanStats>,
    pub ethernet_mac_wtp_mac_map: Vec<EthernetMacWtpMacMap>,
    pub radio_oper_stats: Vec<RadioOperStats>,
    pub ethernet_if_stats: Vec<EthernetIfStats>,
    pub oper_data: Vec<ApOperInternalData>,
    pub rlan_oper: Vec<RlanOper>,
    pub cdp_cache_data: Vec<CdpCacheData>,
    pub lldp_neigh: Vec<LldpNeigh>,
    pub capwap_pkts: Vec<CapwapPkts>,
    pub country_oper: Vec<CountryOper>,
    pub supp_country_oper: Vec<SuppCountryOper>,
    pub ap_nh_global_data: Option<ApNhGlobalData>,
    pub tp_cert_info: Option<TpCertInfo>,
    pub qos_client_data: Vec<Value>,
    pub ap_io_oper_data: Vec<Value>,
    pub disc_data: Vec<Value>,
}

/// Response for a `capwap-data` list or entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApCapwapDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:capwap-data", default)]
    pub capwap_data: Vec<CapwapData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApRadioOperDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:radio-oper-data", default)]
    pub radio_oper_data: Vec<RadioOperData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApNameMacMapResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:ap-name-mac-map", default)]
    pub ap_name_mac_map: Vec<ApNameMacMap>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApRadioNeighborResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:ap-radio-neighbor", default)]
    pub ap_radio_neighbor: Vec<ApRadioNeighbor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApCdpCacheResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:cdp-cache-data", default)]
    pub cdp_cache_data: Vec<CdpCacheData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApLldpNeighResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:lldp-neigh", default)]
    pub lldp_neigh: Vec<LldpNeigh>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApEthernetIfStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-access-point-oper:ethernet-if-stats", default)]
    pub ethernet_if_stats: Vec<EthernetIfStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApRadioNeighbor {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub bssid: Option<String>,
    pub ssid: Option<String>,
    pub rssi: Option<i16>,
    pub channel: Option<u16>,
    pub primary_channel: Option<u16>,
    pub last_update_rcvd: Option<String>,
}

impl ApRadioNeighbor {
    pub fn last_update(&self) -> Option<DateTime<FixedOffset>> {
        self.last_update_rcvd.as_deref().and_then(yang::parse_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioOperData {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub slot_id: Option<u8>,
    pub radio_type: Option<String>,
    pub admin_state: Option<String>,
    pub oper_state: Option<String>,
    pub radio_mode: Option<String>,
    pub radio_sub_mode: Option<String>,
    pub radio_subtype: Option<String>,
    pub radio_subband: Option<String>,
    pub current_band_id: Option<u8>,
    pub current_active_band: Option<String>,
    pub xor_radio_mode: Option<String>,
    pub antenna_pid: Option<String>,
    pub slot_antenna_type: Option<String>,
    pub radio_band_info: Vec<RadioBandInfo>,
    pub vap_oper_config: Vec<VapOperConfig>,
    pub phy_ht_cfg: Option<Value>,
    pub phy_ht_cap: Option<Value>,
    pub radio_fra_cap: Option<String>,
}

impl RadioOperData {
    pub fn is_up(&self) -> bool {
        self.oper_state.as_deref() == Some("radio-up")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioBandInfo {
    pub band_id: Option<u8>,
    pub regulatory_domain: Option<Value>,
    pub phy_tx_pwr_cfg: Option<Value>,
    pub phy_tx_pwr_lvl_cfg: Option<Value>,
    pub antenna_gain: Option<i16>,
    pub secondary_antenna_gain: Option<i16>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VapOperConfig {
    pub ap_vap_id: Option<u16>,
    pub wlan_id: Option<u32>,
    pub bssid_mac: Option<String>,
    pub wtp_mac: Option<String>,
    pub wlan_profile_name: Option<String>,
    pub ssid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioResetStats {
    pub ap_mac: String,
    pub radio_id: Option<u8>,
    pub cause: Option<String>,
    pub detail_cause: Option<String>,
    pub count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CapwapData {
    pub wtp_mac: String,
    pub ip_addr: Option<String>,
    pub name: Option<String>,
    pub device_detail: Option<DeviceDetail>,
    pub ap_location: Option<ApLocation>,
    pub ap_state: Option<ApState>,
    pub ap_mode_data: Option<ApModeData>,
    pub ap_time_info: Option<ApTimeInfo>,
    pub tag_info: Option<TagInfo>,
    pub tunnel: Option<Value>,
    pub external_module_data: Option<Value>,
    pub country_code: Option<String>,
    pub num_radio_slots: Option<u8>,
    pub ipv6_joined: Option<u8>,
    pub ap_lag_enabled: Option<bool>,
}

impl CapwapData {
    pub fn boot_time(&self) -> Option<DateTime<FixedOffset>> {
        self.ap_time_info
            .as_ref()?
            .boot_time
            .as_deref()
            .and_then(yang::parse_timestamp)
    }

    pub fn join_time(&self) -> Option<DateTime<FixedOffset>> {
        self.ap_time_info
            .as_ref()?
            .join_time
            .as_deref()
            .and_then(yang::parse_timestamp)
    }

    /// Serial number reported in the static board data
    pub fn serial_number(&self) -> Option<&str> {
        self.device_detail
            .as_ref()?
            .static_info
            .as_ref()?
            .board_data
            .as_ref()?
            .wtp_serial_num
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeviceDetail {
    pub static_info: Option<StaticInfo>,
    pub dynamic_info: Option<Value>,
    pub wtp_version: Option<WtpVersion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StaticInfo {
    pub board_data: Option<BoardData>,
    pub board_data_opt: Option<Value>,
    pub descriptor_data: Option<Value>,
    pub ap_prov: Option<Value>,
    pub ap_models: Option<ApModels>,
    pub num_ports: Option<u8>,
    pub num_slots: Option<u8>,
    pub wtp_model_type: Option<u8>,
    pub ap_capability: Option<String>,
    pub is_mm_opt: Option<String>,
    pub ap_image_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BoardData {
    pub wtp_serial_num: Option<String>,
    pub wtp_enet_mac: Option<String>,
    pub ap_sys_info: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApModels {
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WtpVersion {
    pub backup_sw_version: Option<Value>,
    pub mini_ios_version: Option<Value>,
    pub sw_version: Option<Value>,
    pub boot_version: Option<Value>,
    pub hw_version: Option<Value>,
    pub sw_ver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApLocation {
    pub floor: Option<u32>,
    pub location: Option<String>,
    pub ap_profile: Option<String>,
    pub site_tag_name: Option<String>,
    pub floor_id: Option<Value>,
    pub range: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApState {
    pub ap_admin_state: Option<String>,
    pub ap_operation_state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApModeData {
    pub home_ap_enabled: Option<bool>,
    pub clear_mode: Option<bool>,
    pub ap_submode: Option<String>,
    pub wtp_mode: Option<String>,
    pub ap_fabric_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApTimeInfo {
    pub boot_time: Option<String>,
    pub join_time: Option<String>,
    pub join_time_taken: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TagInfo {
    pub tag_source: Option<String>,
    pub is_ap_misconfigured: Option<bool>,
    pub resolved_tag_info: Option<Value>,
    pub policy_tag_info: Option<PolicyTagInfo>,
    pub site_tag: Option<SiteTagInfo>,
    pub rf_tag: Option<RfTagInfo>,
    pub filter_info: Option<Value>,
    pub is_dtls_lsc_fallback: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PolicyTagInfo {
    pub policy_tag_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteTagInfo {
    pub site_tag_name: Option<String>,
    pub ap_profile: Option<String>,
    pub flex_profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfTagInfo {
    pub rf_tag_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApNameMacMap {
    pub wtp_name: String,
    pub wtp_mac: String,
    pub eth_mac: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WtpSlotWlanStats {
    pub wtp_mac: String,
    pub slot_id: Option<u8>,
    pub wlan_id: Option<u32>,
    pub bssid_mac: Option<String>,
    pub ssid: Option<String>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub bytes_rx: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub bytes_tx: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub pkts_rx: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub pkts_tx: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub data_retries: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EthernetMacWtpMacMap {
    pub ethernet_mac: String,
    pub wtp_mac: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioOperStats {
    pub ap_mac: String,
    pub slot_id: Option<u8>,
    pub aid_user_list: Option<u16>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_fragment_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub multicast_tx_frame_cnt: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub failed_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub retry_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub multiple_retry_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub frame_duplicate_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rts_success_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rts_failure_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub ack_failure_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_fragment_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub multicast_rx_frame_cnt: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub fcs_error_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_frame_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub wep_undecryptable_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_error_frame_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_data_frame_count: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_data_frame_count: Option<u64>,
    pub noise_floor: Option<i16>,
    pub ap_radio_stats: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EthernetIfStats {
    pub wtp_mac: String,
    pub if_index: Option<u32>,
    pub if_name: Option<String>,
    pub oper_status: Option<String>,
    pub link_speed: Option<u32>,
    pub duplex: Option<u32>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_ucast_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_non_ucast_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_ucast_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_non_ucast_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rx_total_bytes: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub tx_total_bytes: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub input_crc: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub input_errors: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub output_errors: Option<u64>,
}

/// An entry of the `oper-data` list (per-AP system data)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApOperInternalData {
    pub wtp_mac: String,
    pub radio_id: Option<u8>,
    pub ap_antenna_band_mode: Option<String>,
    pub link_encryption_enabled: Option<bool>,
    pub ap_remote_debug_mode: Option<bool>,
    pub ap_ip_data: Option<ApIpData>,
    pub ap_pow: Option<ApPow>,
    pub ap_sys_stats: Option<ApSysStats>,
    pub ap_prime_info: Option<Value>,
    pub ap_mgmt: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApIpData {
    pub ap_prefix: Option<u8>,
    pub mtu: Option<u16>,
    pub is_static_ap_ipaddr: Option<bool>,
    pub domain_name: Option<String>,
    pub ap_ip_addr: Option<String>,
    pub ap_ipv6_addr: Option<String>,
    pub static_ip: Option<String>,
    pub static_gw_ip: Option<String>,
    pub static_netmask: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApPow {
    pub power_injector_sel: Option<String>,
    pub power_injector_macaddr: Option<String>,
    pub pre_std_switch_enabled: Option<bool>,
    pub power_injector_enabled: Option<bool>,
    pub power_type: Option<String>,
    pub power_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApSysStats {
    pub cpu_usage: Option<u8>,
    pub memory_usage: Option<u8>,
    pub avg_cpu_usage: Option<u8>,
    pub avg_memory_usage: Option<u8>,
    pub window_size: Option<u8>,
    pub last_ap_reload_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RlanOper {
    pub wtp_mac: String,
    pub rlan_port_id: Option<u8>,
    pub rlan_oper_state: Option<bool>,
    pub rlan_port_status: Option<bool>,
    pub rlan_vlan_valid: Option<bool>,
    pub rlan_vlan_id: Option<u16>,
    pub rlan_poe_state: Option<String>,
    pub power_level_id: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CdpCacheData {
    pub mac_addr: String,
    pub cdp_cache_device_id: Option<String>,
    pub ap_name: Option<String>,
    pub last_updated_time: Option<String>,
    pub version: Option<u32>,
    pub device_index: Option<u32>,
    pub ip_addr: Option<Value>,
    pub cdp_cache_platform: Option<String>,
    pub cdp_cache_port_id: Option<String>,
    pub cdp_cache_local_port: Option<String>,
    pub cdp_cache_version: Option<String>,
    pub cdp_cache_duplex: Option<String>,
    pub cdp_cache_interface_speed: Option<u32>,
    pub wtp_mac_addr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LldpNeigh {
    pub wtp_mac: String,
    pub neighbor_mac: Option<String>,
    pub port_id: Option<String>,
    pub local_port: Option<String>,
    pub system_name: Option<String>,
    pub port_description: Option<String>,
    pub capabilities: Option<Value>,
    pub mgmt_addr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CapwapPkts {
    pub wtp_mac: String,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub cntrl_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub data_keep_alive_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub capwap_error_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub rfid_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub dot1x_eap_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub dot1x_mgmt_pkts: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub dot1x_ctrl_pkts: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CountryOper {
    pub country_code: String,
    pub country_string: Option<String>,
    pub reg_dom_str_80211bg: Option<String>,
    pub reg_dom_str_80211a: Option<String>,
    pub country_supported: Option<bool>,
    pub channels_string_11bg: Option<String>,
    pub channels_string_11a: Option<String>,
    pub dca_channels_string_11bg: Option<String>,
    pub dca_channels_string_11a: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SuppCountryOper {
    pub country_code: String,
    pub country_string: Option<String>,
    pub country_code_iso: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApNhGlobalData {
    pub algorithm_running: Option<bool>,
    pub algorithm_itr_count: Option<u32>,
    pub ideal_capacity_per_rg: Option<u8>,
    pub num_of_neighborhood: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TpCertInfo {
    pub trustpoint: Option<Trustpoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Trustpoint {
    pub trustpoint_name: Option<String>,
    pub is_cert_available: Option<bool>,
    pub is_privkey_available: Option<bool>,
    pub cert_hash: Option<String>,
    pub cert_type: Option<String>,
    pub fips_suitability: Option<String>,
}

/// `Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data", default)]
    pub data: ApCfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApCfgData {
    pub tag_source_priority_configs: Option<TagSourcePriorityConfigs>,
    pub ap_tags: Option<ApTags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TagSourcePriorityConfigs {
    pub tag_source_priority_config: Vec<TagSourcePriorityConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TagSourcePriorityConfig {
    pub priority: u8,
    pub tag_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApTags {
    pub ap_tag: Vec<ApTag>,
}

/// Static tag assignment for one AP, keyed by its ethernet MAC
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApTag {
    pub ap_mac: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_tag: Option<String>,
    /// Leaves not modelled above, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApTag {
    pub fn new(ap_mac: impl Into<String>) -> Self {
        Self {
            ap_mac: ap_mac.into(),
            ..Self::default()
        }
    }

    pub fn policy_tag(mut self, tag: impl Into<String>) -> Self {
        self.policy_tag = Some(tag.into());
        self
    }

    pub fn site_tag(mut self, tag: impl Into<String>) -> Self {
        self.site_tag = Some(tag.into());
        self
    }

    pub fn rf_tag(mut self, tag: impl Into<String>) -> Self {
        self.rf_tag = Some(tag.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApTagsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-tags", default)]
    pub ap_tags: Option<ApTags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApTagResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-cfg:ap-tag", default)]
    pub ap_tag: Vec<ApTag>,
}

/// `Cisco-IOS-XE-wireless-ap-global-oper:ap-global-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-global-oper:ap-global-oper-data", default)]
    pub data: ApGlobalOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApGlobalOperData {
    pub ap_history: Vec<ApHistory>,
    pub ewlc_ap_stats: Option<Value>,
    pub ap_join_stats: Vec<ApJoinStats>,
    pub wlan_client_stats: Vec<WlanClientStats>,
    pub emltd_join_count_stat: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApJoinStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-global-oper:ap-join-stats", default)]
    pub ap_join_stats: Vec<ApJoinStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApHistoryResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-ap-global-oper:ap-history", default)]
    pub ap_history: Vec<ApHistory>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApHistory {
    pub ethernet_mac: String,
    pub ap_name: Option<String>,
    pub wtp_mac: Option<String>,
    pub ap_history_event: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApJoinStats {
    pub wtp_mac: String,
    pub ap_join_info: Option<ApJoinInfo>,
    pub ap_discovery_info: Option<Value>,
    pub dtls_sess_info: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApJoinInfo {
    pub ap_ip_addr: Option<String>,
    pub ap_ethernet_mac: Option<String>,
    pub ap_name: Option<String>,
    pub is_joined: Option<bool>,
    pub num_join_req_recvd: Option<u32>,
    pub num_config_req_recvd: Option<u32>,
    pub last_join_failure_type: Option<String>,
    pub last_config_failure_type: Option<String>,
    pub last_error_type: Option<String>,
    pub last_error_time: Option<String>,
    pub last_msg_decr_fail_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WlanClientStats {
    pub wlan_id: u32,
    pub wlan_profile_name: Option<String>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub data_usage: Option<u64>,
    pub total_random_mac_clients: Option<u32>,
    pub client_current_state_l2auth: Option<u32>,
    pub client_current_state_mobility: Option<u32>,
    pub client_current_state_iplearn: Option<u32>,
    pub curr_state_webauth_pending: Option<u32>,
    pub client_current_state_run: Option<u32>,
}

/// Input of the `set-ap-admin-state` RPC
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApAdminStateInput {
    pub mode: bool,
    pub wtp_mac: String,
}

/// Input of the `set-ap-slot-admin-state` RPC
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApSlotAdminStateInput {
    pub mode: bool,
    pub wtp_mac: String,
    pub slot_id: u8,
    pub band: String,
}

/// Input of the `ap-reset` RPC
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApResetInput {
    pub mac_addr: String,
}
