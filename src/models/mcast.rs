use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-mcast-oper:mcast-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct McastOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-mcast-oper:mcast-oper-data", default)]
    pub data: McastOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct McastOperData {
    pub flex_mediastream_client_summary: Vec<FlexMediastreamClientSummary>,
    pub vlan_l2_mgid_op: Vec<VlanL2MgidOp>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlexMediastreamClientSummaryResponse {
    #[serde(
        rename = "Cisco-IOS-XE-wireless-mcast-oper:flex-mediastream-client-summary",
        default
    )]
    pub flex_mediastream_client_summary: Vec<FlexMediastreamClientSummary>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VlanL2MgidOpResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-mcast-oper:vlan-l2-mgid-op", default)]
    pub vlan_l2_mgid_op: Vec<VlanL2MgidOp>,
}

/// Multicast-direct clients on FlexConnect APs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FlexMediastreamClientSummary {
    pub client_mac: String,
    pub vlan_id: Option<u16>,
    pub flex_mcast_client_group: Vec<FlexMcastClientGroup>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FlexMcastClientGroup {
    pub mcast_ip: String,
    pub stream_name: Option<String>,
    pub ap_mac: Option<String>,
    pub is_ipv4: Option<bool>,
}

/// Layer 2 multicast group id state per VLAN
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VlanL2MgidOp {
    pub vlan_index: u16,
    pub is_nonip_multicast_enabled: Option<bool>,
    pub is_broadcast_enable: Option<bool>,
    pub mgid_info: Option<Value>,
}
