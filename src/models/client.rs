use super::yang::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-client-oper:client-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:client-oper-data", default)]
    pub data: ClientOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClientOperData {
    pub common_oper_data: Vec<CommonOperData>,
    pub dot11_oper_data: Vec<Dot11OperData>,
    pub traffic_stats: Vec<TrafficStats>,
    pub sisf_db_mac: Vec<SisfDbMac>,
    pub mobility_oper_data: Vec<Value>,
    pub policy_data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommonOperDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:common-oper-data", default)]
    pub common_oper_data: Vec<CommonOperData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dot11OperDataResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:dot11-oper-data", default)]
    pub dot11_oper_data: Vec<Dot11OperData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrafficStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-client-oper:traffic-stats", default)]
    pub traffic_stats: Vec<TrafficStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommonOperData {
    pub client_mac: String,
    pub ap_name: Option<String>,
    pub ms_ap_slot_id: Option<u8>,
    pub ms_radio_type: Option<String>,
    pub wlan_id: Option<u32>,
    pub client_type: Option<String>,
    pub co_state: Option<String>,
    pub username: Option<String>,
    pub vrf_name: Option<String>,
    pub is_tvi_enabled: Option<bool>,
}

impl CommonOperData {
    pub fn is_run_state(&self) -> bool {
        self.co_state.as_deref() == Some("client-status-run")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11OperData {
    pub ms_mac_address: String,
    pub dot11_state: Option<String>,
    pub ms_bssid: Option<String>,
    pub ap_mac_address: Option<String>,
    pub current_channel: Option<u16>,
    pub ms_wlan_id: Option<u32>,
    pub vap_ssid: Option<String>,
    pub policy_profile: Option<String>,
    pub ms_ap_slot_id: Option<u8>,
    pub radio_type: Option<String>,
    pub ms_assoc_time: Option<String>,
    pub is_11g_client: Option<bool>,
    pub ewlc_ms_phy_type: Option<String>,
    pub encryption_type: Option<String>,
    pub security_mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TrafficStats {
    pub ms_mac_address: String,
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
    pub most_recent_rssi: Option<i16>,
    pub most_recent_snr: Option<i16>,
    pub speed: Option<u32>,
    pub spatial_stream: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SisfDbMac {
    pub mac_addr: String,
    pub ipv4_binding: Option<Value>,
    pub ipv6_binding: Vec<Value>,
}
