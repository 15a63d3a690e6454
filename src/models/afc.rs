use super::yang::counter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-afc-oper:afc-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AfcOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-afc-oper:afc-oper-data", default)]
    pub data: AfcOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AfcOperData {
    pub ewlc_afc_ap_resp: Vec<EwlcAfcApResp>,
    pub ewlc_afc_ap_req: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EwlcAfcApRespResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-afc-oper:ewlc-afc-ap-resp", default)]
    pub ewlc_afc_ap_resp: Vec<EwlcAfcApResp>,
}

/// Automated frequency coordination answer for one 6 GHz radio
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EwlcAfcApResp {
    pub ap_mac: String,
    pub slot: Option<u8>,
    pub resp_data: Option<AfcRespData>,
    pub slot_id: Option<u8>,
    pub expire_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AfcRespData {
    pub request_id: Option<String>,
    pub ruleset_id: Option<String>,
    pub resp_code: Option<Value>,
    pub avail_exp_time: Option<String>,
    pub avail_chan: Option<Value>,
    pub avail_freq: Option<Value>,
}

/// `Cisco-IOS-XE-wireless-afc-cloud-oper:afc-cloud-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AfcCloudOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-afc-cloud-oper:afc-cloud-oper-data", default)]
    pub data: AfcCloudOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AfcCloudOperData {
    pub afc_cloud_stats: Option<AfcCloudStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AfcCloudStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-afc-cloud-oper:afc-cloud-stats", default)]
    pub afc_cloud_stats: Option<AfcCloudStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AfcCloudStats {
    pub num_afc_ap: Option<u32>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub afc_msg_sent: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub afc_msg_rcvd: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub afc_msg_err: Option<u64>,
    pub afc_msg_pending: Option<u32>,
    pub last_msg_sent: Option<Value>,
    pub last_msg_rcvd: Option<Value>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub min_msg_rtt: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub max_msg_rtt: Option<u64>,
    #[serde(with = "counter", skip_serializing_if = "Option::is_none")]
    pub avg_rtt: Option<u64>,
    pub healthcheck: Option<Value>,
}
