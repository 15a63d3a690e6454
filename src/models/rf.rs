use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RfCfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data", default)]
    pub data: RfCfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfCfgData {
    pub multi_bssid_profiles: Option<Value>,
    pub atf_policies: Option<Value>,
    pub rf_tags: Option<RfTags>,
    pub rf_profiles: Option<RfProfiles>,
    pub rf_profile_default_entries: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfTags {
    pub rf_tag: Vec<RfTag>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RfTagsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-tags", default)]
    pub rf_tags: Option<RfTags>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RfTagResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-tag", default)]
    pub rf_tag: Vec<RfTag>,
}

/// Binds an RF profile to each band
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfTag {
    pub tag_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot11a_rf_profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot11b_rf_profile_name: Option<String>,
    #[serde(
        rename = "dot11-6ghz-rf-prof-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub dot11_6ghz_rf_profile_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_tag_radio_profiles: Option<Value>,
    /// Leaves not modelled above, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RfTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfProfiles {
    pub rf_profile: Vec<RfProfile>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RfProfilesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-profiles", default)]
    pub rf_profiles: Option<RfProfiles>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RfProfileResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-rf-cfg:rf-profile", default)]
    pub rf_profile: Vec<RfProfile>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RfProfile {
    pub name: String,
    pub description: Option<String>,
    pub band: Option<String>,
    pub status: Option<bool>,
    pub transmit_power_min: Option<i8>,
    pub transmit_power_max: Option<i8>,
    pub transmit_power_threshold_v1: Option<i16>,
    pub data_rate_54m: Option<String>,
    pub rf_dca_chan_width: Option<String>,
    pub rf_mcs_entries: Option<Value>,
}
