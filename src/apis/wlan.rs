use crate::{
    client::WncClient,
    error::WncResult,
    models::{
        WlanCfgEntriesResponse, WlanCfgEntry, WlanCfgEntryResponse, WlanCfgResponse,
        WlanGlobalOperResponse, WlanPoliciesResponse, WlanPolicy,
    },
    restconf::{self, WLAN_CFG, WLAN_GLOBAL_OPER},
};
use log::info;

/// WLAN and policy profiles
pub struct WlanApi<'a> {
    client: &'a WncClient,
}

impl<'a> WlanApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_cfg(&self) -> WncResult<WlanCfgResponse> {
        info!("Getting WLAN configuration");
        self.client.get(WLAN_CFG).await
    }

    pub async fn list_wlan_cfg_entries(&self) -> WncResult<Vec<WlanCfgEntry>> {
        info!("Listing WLAN profiles");
        let response: WlanCfgEntriesResponse = self
            .client
            .get(&restconf::child(WLAN_CFG, &["wlan-cfg-entries"]))
            .await?;
        Ok(response
            .wlan_cfg_entries
            .map(|e| e.wlan_cfg_entry)
            .unwrap_or_default())
    }

    pub async fn get_wlan_by_profile(&self, profile_name: &str) -> WncResult<Option<WlanCfgEntry>> {
        info!("Getting WLAN profile {}", profile_name);
        let path = restconf::list_entry(
            &restconf::child(WLAN_CFG, &["wlan-cfg-entries"]),
            "wlan-cfg-entry",
            &[profile_name],
        );
        let response: Option<WlanCfgEntryResponse> = self.client.get_optional(&path).await?;
        Ok(response.and_then(|r| {
            r.wlan_cfg_entry
                .into_iter()
                .find(|e| e.profile_name == profile_name)
        }))
    }

    pub async fn list_wlan_policies(&self) -> WncResult<Vec<WlanPolicy>> {
        info!("Listing policy profiles");
        let response: WlanPoliciesResponse = self
            .client
            .get(&restconf::child(WLAN_CFG, &["wlan-policies"]))
            .await?;
        Ok(response
            .wlan_policies
            .map(|p| p.wlan_policy)
            .unwrap_or_default())
    }

    pub async fn get_global_oper(&self) -> WncResult<WlanGlobalOperResponse> {
        info!("Getting WLAN global operational data");
        self.client.get(WLAN_GLOBAL_OPER).await
    }
}
