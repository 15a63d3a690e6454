use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RrmOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data", default)]
    pub data: RrmOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmOperData {
    pub ap_auto_rf_dot11_data: Vec<ApAutoRfDot11Data>,
    pub ap_dot11_radar_data: Vec<ApDot11RadarData>,
    pub ap_dot11_spectrum_data: Vec<ApDot11SpectrumData>,
    pub rrm_measurement: Vec<RrmMeasurement>,
    pub radio_slot: Vec<RadioSlot>,
    pub main_data: Vec<RrmMainData>,
    pub reg_domain_oper: Option<Value>,
    pub spectrum_device_table: Vec<Value>,
    pub spectrum_aq_table: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RrmMeasurementResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-oper:rrm-measurement", default)]
    pub rrm_measurement: Vec<RrmMeasurement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApAutoRfDot11DataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-oper:ap-auto-rf-dot11-data", default)]
    pub ap_auto_rf_dot11_data: Vec<ApAutoRfDot11Data>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApAutoRfDot11Data {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub neighbor_radio_info: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApDot11RadarData {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub last_radar_on_radio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApDot11SpectrumData {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub config: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmMeasurement {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub foreign: Option<Value>,
    pub noise: Option<Value>,
    pub load: Option<RrmLoad>,
}

/// Channel load as measured by the radio
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmLoad {
    pub rx_util_percentage: Option<u8>,
    pub tx_util_percentage: Option<u8>,
    pub cca_util_percentage: Option<u8>,
    pub stations: Option<u16>,
    pub rx_noise_channel_utilization: Option<u8>,
    pub non_wifi_inter: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RadioSlot {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub radio_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmMainData {
    pub phy_type: String,
    pub grouping: Option<Value>,
    pub dca: Option<Value>,
    pub tpc: Option<Value>,
}

/// `Cisco-IOS-XE-wireless-rrm-global-oper:rrm-global-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RrmGlobalOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-global-oper:rrm-global-oper-data", default)]
    pub data: RrmGlobalOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmGlobalOperData {
    pub rrm_one_shot_counters: Vec<RrmOneShotCounters>,
    pub rrm_channel_params: Vec<RrmChannelParams>,
    pub radio_oper_data_24g: Vec<RrmRadioOperData>,
    pub radio_oper_data_5g: Vec<RrmRadioOperData>,
    pub radio_oper_data_6ghz: Vec<RrmRadioOperData>,
    pub spectrum_band_config_data: Vec<Value>,
    pub rrm_client_data: Vec<Value>,
    pub rrm_fra_stats: Option<RrmFraStats>,
    pub rrm_coverage: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmOneShotCounters {
    pub phy_type: String,
    pub power_counter: Option<u32>,
    pub dca_counter: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmChannelParams {
    pub phy_type: String,
    pub min_dwell: Option<u16>,
    pub avg_dwell: Option<u16>,
    pub max_dwell: Option<u16>,
    pub min_rssi: Option<i16>,
    pub max_rssi: Option<i16>,
    pub avg_rssi: Option<i16>,
    pub channel_counter: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmRadioOperData {
    pub wtp_mac: String,
    pub radio_slot_id: Option<u8>,
    pub ap_name: Option<String>,
    pub spectrum_capable: Option<Value>,
    pub num_slots: Option<u8>,
    pub mesh_radio_role: Option<String>,
    pub ap_up_time: Option<String>,
    pub capwap_up_time: Option<String>,
}

/// Flexible radio assignment counters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmFraStats {
    pub dual_band_monitor_to_24ghz: Option<u16>,
    pub dual_band_monitor_to_5ghz: Option<u16>,
    pub dual_band_24ghz_to_5ghz: Option<u16>,
    pub dual_band_24ghz_to_monitor: Option<u16>,
    pub dual_band_5ghz_to_24ghz: Option<u16>,
    pub dual_band_5ghz_to_monitor: Option<u16>,
    pub sb_monitor_to_5ghz: Option<u16>,
    pub sb_5ghz_to_monitor: Option<u16>,
}

/// `Cisco-IOS-XE-wireless-rrm-emul-oper:rrm-emul-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RrmEmulOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-emul-oper:rrm-emul-oper-data", default)]
    pub data: RrmEmulOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmEmulOperData {
    pub rrm_fra_stats: Option<RrmFraStats>,
}

/// `Cisco-IOS-XE-wireless-rrm-cfg:rrm-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RrmCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rrm-cfg:rrm-cfg-data", default)]
    pub data: RrmCfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmCfgData {
    pub rrms: Option<Rrms>,
    pub rrm_mgr_cfg_entries: Option<RrmMgrCfgEntries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rrms {
    pub rrm: Vec<RrmCfgEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmCfgEntry {
    pub band: String,
    pub rrm: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmMgrCfgEntries {
    pub rrm_mgr_cfg_entry: Vec<RrmMgrCfgEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RrmMgrCfgEntry {
    pub band: String,
    pub power_assignment_mode: Option<String>,
    pub channel_assignment_mode: Option<String>,
    pub dca_interval: Option<u8>,
    pub tpc_threshold: Option<i16>,
}
