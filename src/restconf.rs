//! RESTCONF path composition and the standard error envelope (RFC 8040).

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// Media type for every request and response body
pub const YANG_DATA_JSON: &str = "application/yang-data+json";

/// Root of the datastore resource
pub const DATA_ROOT: &str = "restconf/data";

/// Root of the operations resource (RPCs)
pub const OPERATIONS_ROOT: &str = "restconf/operations";

// Access points
pub const AP_OPER: &str = "Cisco-IOS-XE-wireless-access-point-oper:access-point-oper-data";
pub const AP_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-access-point-oper";
pub const AP_CFG: &str = "Cisco-IOS-XE-wireless-ap-cfg:ap-cfg-data";
pub const AP_CFG_MODULE: &str = "Cisco-IOS-XE-wireless-ap-cfg";
pub const AP_GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-ap-global-oper:ap-global-oper-data";
pub const AP_GLOBAL_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-ap-global-oper";
pub const AP_CMD_RPC_MODULE: &str = "Cisco-IOS-XE-wireless-access-point-cmd-rpc";

// General
pub const GENERAL_OPER: &str = "Cisco-IOS-XE-wireless-general-oper:general-oper-data";
pub const GENERAL_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-general-oper";
pub const GENERAL_CFG: &str = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data";
pub const GENERAL_CFG_MODULE: &str = "Cisco-IOS-XE-wireless-general-cfg";

// RRM
pub const RRM_OPER: &str = "Cisco-IOS-XE-wireless-rrm-oper:rrm-oper-data";
pub const RRM_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-rrm-oper";
pub const RRM_GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-rrm-global-oper:rrm-global-oper-data";
pub const RRM_EMUL_OPER: &str = "Cisco-IOS-XE-wireless-rrm-emul-oper:rrm-emul-oper-data";
pub const RRM_CFG: &str = "Cisco-IOS-XE-wireless-rrm-cfg:rrm-cfg-data";

// WLAN
pub const WLAN_CFG: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data";
pub const WLAN_CFG_MODULE: &str = "Cisco-IOS-XE-wireless-wlan-cfg";
pub const WLAN_GLOBAL_OPER: &str = "Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data";

// RF
pub const RF_CFG: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data";
pub const RF_CFG_MODULE: &str = "Cisco-IOS-XE-wireless-rf-cfg";

// Multicast, AFC, 802.11, geolocation, clients
pub const MCAST_OPER: &str = "Cisco-IOS-XE-wireless-mcast-oper:mcast-oper-data";
pub const MCAST_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-mcast-oper";
pub const AFC_OPER: &str = "Cisco-IOS-XE-wireless-afc-oper:afc-oper-data";
pub const AFC_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-afc-oper";
pub const AFC_CLOUD_OPER: &str = "Cisco-IOS-XE-wireless-afc-cloud-oper:afc-cloud-oper-data";
pub const AFC_CLOUD_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-afc-cloud-oper";
pub const DOT11_CFG: &str = "Cisco-IOS-XE-wireless-dot11-cfg:dot11-cfg-data";
pub const DOT11_CFG_MODULE: &str = "Cisco-IOS-XE-wireless-dot11-cfg";
pub const GEOLOCATION_OPER: &str = "Cisco-IOS-XE-wireless-geolocation-oper:geolocation-oper-data";
pub const GEOLOCATION_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-geolocation-oper";
pub const CLIENT_OPER: &str = "Cisco-IOS-XE-wireless-client-oper:client-oper-data";
pub const CLIENT_OPER_MODULE: &str = "Cisco-IOS-XE-wireless-client-oper";

/// Append child nodes to a resource path: `base/seg1/seg2`
pub fn child(base: &str, segments: &[&str]) -> String {
    let mut path = base.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment.trim_matches('/'));
    }
    path
}

/// Encode one list key value.
///
/// Everything outside the RFC 3986 unreserved set is percent-encoded,
/// which covers the `,` key separator and the `:` of MAC addresses.
pub fn encode_key(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Address a list entry: `container/list=k1,k2`
pub fn list_entry(container: &str, list: &str, keys: &[&str]) -> String {
    let keys = keys
        .iter()
        .map(|k| encode_key(k))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}={}", child(container, &[list]), keys)
}

/// Module-qualified member name used in request bodies, e.g.
/// `Cisco-IOS-XE-wireless-rf-cfg:rf-tag`
pub fn qualified(module: &str, node: &str) -> String {
    format!("{}:{}", module, node)
}

/// `<module>:input` wrapper member for an RPC body
pub fn rpc_input_key(operation: &str) -> String {
    match operation.split_once(':') {
        Some((module, _)) => qualified(module, "input"),
        None => "input".to_string(),
    }
}

/// Request body writing list entries: `{"<module>:<list>": [entry, ...]}`
pub struct ListBody<'a, T> {
    member: String,
    entries: &'a [T],
}

impl<'a, T> ListBody<'a, T> {
    pub fn new(module: &str, list: &str, entries: &'a [T]) -> Self {
        Self {
            member: qualified(module, list),
            entries,
        }
    }

    pub fn single(module: &str, list: &str, entry: &'a T) -> Self {
        Self::new(module, list, std::slice::from_ref(entry))
    }
}

impl<T: Serialize> Serialize for ListBody<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.member, self.entries)?;
        map.end()
    }
}

/// `{"ietf-restconf:errors": {"error": [...]}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestconfErrors {
    #[serde(rename = "ietf-restconf:errors", alias = "errors")]
    pub errors: ErrorList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorList {
    #[serde(default)]
    pub error: Vec<RestconfError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RestconfError {
    pub error_type: Option<String>,
    pub error_tag: Option<String>,
    pub error_app_tag: Option<String>,
    pub error_path: Option<String>,
    pub error_message: Option<String>,
    pub error_info: Option<serde_json::Value>,
}

impl RestconfErrors {
    /// One line per reported error: message, falling back to the tag
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = self
            .errors
            .error
            .iter()
            .filter_map(|e| {
                let text = e.error_message.as_deref().or(e.error_tag.as_deref())?;
                Some(match &e.error_path {
                    Some(path) => format!("{} ({})", text, path),
                    None => text.to_string(),
                })
            })
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
