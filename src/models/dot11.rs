use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-dot11-cfg:dot11-cfg-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dot11CfgResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-dot11-cfg:dot11-cfg-data", default)]
    pub data: Dot11CfgData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11CfgData {
    pub configured_countries: Option<ConfiguredCountries>,
    pub dot11_entries: Option<Dot11Entries>,
    pub dot11ac_mcs_entries: Option<Dot11acMcsEntries>,
    pub dot11ax_mcs_entries: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfiguredCountries {
    pub configured_country: Vec<ConfiguredCountry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfiguredCountriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-dot11-cfg:configured-countries", default)]
    pub configured_countries: Option<ConfiguredCountries>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConfiguredCountry {
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11Entries {
    pub dot11_entry: Vec<Dot11Entry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dot11EntriesResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-dot11-cfg:dot11-entries", default)]
    pub dot11_entries: Option<Dot11Entries>,
}

/// Global per-band 802.11 parameters
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11Entry {
    pub band: String,
    pub voice_adm_ctrl_support: Option<bool>,
    pub video_adm_ctrl_support: Option<bool>,
    pub beacon_interval: Option<u16>,
    pub dtpc_enable: Option<bool>,
    pub dot11ax_cfg: Option<Value>,
    pub dot11ac_cfg: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11acMcsEntries {
    pub dot11ac_mcs_entry: Vec<Dot11acMcsEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Dot11acMcsEntry {
    pub spatial_stream: u8,
    pub index: String,
    pub mcs_supported: Option<bool>,
}
