use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `Cisco-IOS-XE-wireless-geolocation-oper:geolocation-oper-data`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeolocationOperResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-geolocation-oper:geolocation-oper-data", default)]
    pub data: GeolocationOperData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeolocationOperData {
    pub ap_geo_loc_stats: Option<ApGeoLocStats>,
    pub ap_geo_loc_data: Vec<ApGeoLocData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApGeoLocStatsResponse {
    #[serde(rename = "Cisco-IOS-XE-wireless-geolocation-oper:ap-geo-loc-stats", default)]
    pub ap_geo_loc_stats: Option<ApGeoLocStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApGeoLocStats {
    pub num_ap_gnss: Option<u32>,
    pub num_ap_man_height: Option<u32>,
    pub num_ap_derived: Option<u32>,
    pub last_derivation_timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ApGeoLocData {
    pub ap_mac: String,
    pub loc: Option<GeoLocation>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeoLocation {
    pub ellipse: Option<GeoEllipse>,
    pub height: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeoEllipse {
    pub center: Option<GeoPoint>,
    pub major_axis: Option<f64>,
    pub minor_axis: Option<f64>,
    pub orientation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeoPoint {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
}
