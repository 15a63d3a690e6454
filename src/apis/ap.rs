use crate::{
    client::WncClient,
    error::{WncError, WncResult},
    models::{
        ApAdminStateInput, ApCapwapDataResponse, ApCdpCacheResponse, ApCfgResponse,
        ApEthernetIfStatsResponse, ApGlobalOperResponse, ApHistoryResponse, ApJoinStatsResponse,
        ApLldpNeighResponse, ApNameMacMapResponse, ApOperResponse, ApRadioNeighborResponse,
        ApRadioOperDataResponse, ApResetInput, ApSlotAdminStateInput, ApTag, ApTagResponse,
        ApTagsResponse, CapwapData,
    },
    restconf::{self, ListBody, AP_CFG, AP_CFG_MODULE, AP_CMD_RPC_MODULE, AP_GLOBAL_OPER, AP_OPER},
};
use log::{debug, info};

/// Access point operational data, tag assignment and admin RPCs
pub struct ApApi<'a> {
    client: &'a WncClient,
}

impl<'a> ApApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    /// Full `access-point-oper-data` tree
    pub async fn get_oper(&self) -> WncResult<ApOperResponse> {
        info!("Getting AP operational data");
        self.client.get(AP_OPER).await
    }

    pub async fn get_capwap_data(&self) -> WncResult<ApCapwapDataResponse> {
        info!("Getting CAPWAP data for all APs");
        self.client
            .get(&restconf::child(AP_OPER, &["capwap-data"]))
            .await
    }

    /// CAPWAP data for one AP, keyed by its radio (wtp) MAC
    pub async fn get_capwap_data_by_mac(&self, wtp_mac: &str) -> WncResult<Option<CapwapData>> {
        info!("Getting CAPWAP data for AP {}", wtp_mac);
        let path = restconf::list_entry(AP_OPER, "capwap-data", &[wtp_mac]);
        let response: Option<ApCapwapDataResponse> = self.client.get_optional(&path).await?;
        Ok(response.and_then(|r| {
            r.capwap_data
                .into_iter()
                .find(|d| d.wtp_mac.eq_ignore_ascii_case(wtp_mac))
        }))
    }

    pub async fn get_radio_oper_data(&self) -> WncResult<ApRadioOperDataResponse> {
        info!("Getting radio operational data");
        self.client
            .get(&restconf::child(AP_OPER, &["radio-oper-data"]))
            .await
    }

    pub async fn get_name_mac_map(&self) -> WncResult<ApNameMacMapResponse> {
        info!("Getting AP name to MAC map");
        self.client
            .get(&restconf::child(AP_OPER, &["ap-name-mac-map"]))
            .await
    }

    pub async fn get_radio_neighbors(&self) -> WncResult<ApRadioNeighborResponse> {
        info!("Getting AP radio neighbors");
        self.client
            .get(&restconf::child(AP_OPER, &["ap-radio-neighbor"]))
            .await
    }

    pub async fn get_cdp_cache(&self) -> WncResult<ApCdpCacheResponse> {
        info!("Getting AP CDP cache");
        self.client
            .get(&restconf::child(AP_OPER, &["cdp-cache-data"]))
            .await
    }

    pub async fn get_lldp_neighbors(&self) -> WncResult<ApLldpNeighResponse> {
        info!("Getting AP LLDP neighbors");
        self.client
            .get(&restconf::child(AP_OPER, &["lldp-neigh"]))
            .await
    }

    pub async fn get_ethernet_if_stats(&self) -> WncResult<ApEthernetIfStatsResponse> {
        info!("Getting AP ethernet interface statistics");
        self.client
            .get(&restconf::child(AP_OPER, &["ethernet-if-stats"]))
            .await
    }

    /// Resolve an AP name to its radio MAC via `ap-name-mac-map`
    pub async fn find_mac_by_name(&self, ap_name: &str) -> WncResult<Option<String>> {
        let map = self.get_name_mac_map().await?;
        let found = map
            .ap_name_mac_map
            .into_iter()
            .find(|entry| entry.wtp_name == ap_name)
            .map(|entry| entry.wtp_mac);
        debug!("AP {} resolved to {:?}", ap_name, found);
        Ok(found)
    }

    pub async fn get_global_oper(&self) -> WncResult<ApGlobalOperResponse> {
        info!("Getting AP global operational data");
        self.client.get(AP_GLOBAL_OPER).await
    }

    pub async fn get_join_stats(&self) -> WncResult<ApJoinStatsResponse> {
        info!("Getting AP join statistics");
        self.client
            .get(&restconf::child(AP_GLOBAL_OPER, &["ap-join-stats"]))
            .await
    }

    pub async fn get_history(&self) -> WncResult<ApHistoryResponse> {
        info!("Getting AP history");
        self.client
            .get(&restconf::child(AP_GLOBAL_OPER, &["ap-history"]))
            .await
    }

    pub async fn get_cfg(&self) -> WncResult<ApCfgResponse> {
        info!("Getting AP configuration");
        self.client.get(AP_CFG).await
    }

    /// All static AP to tag assignments
    pub async fn list_tag_assignments(&self) -> WncResult<Vec<ApTag>> {
        info!("Listing AP tag assignments");
        let response: ApTagsResponse = self
            .client
            .get(&restconf::child(AP_CFG, &["ap-tags"]))
            .await?;
        Ok(response.ap_tags.map(|t| t.ap_tag).unwrap_or_default())
    }

    pub async fn get_tag_assignment(&self, ap_mac: &str) -> WncResult<Option<ApTag>> {
        info!("Getting tag assignment for AP {}", ap_mac);
        let path = restconf::list_entry(&restconf::child(AP_CFG, &["ap-tags"]), "ap-tag", &[ap_mac]);
        let response: Option<ApTagResponse> = self.client.get_optional(&path).await?;
        Ok(response.and_then(|r| {
            r.ap_tag
                .into_iter()
                .find(|t| t.ap_mac.eq_ignore_ascii_case(ap_mac))
        }))
    }

    /// Create or replace the static tag assignment of one AP
    pub async fn assign_tags(&self, tag: &ApTag) -> WncResult<()> {
        if tag.ap_mac.is_empty() {
            return Err(WncError::invalid_param("AP MAC must not be empty"));
        }
        info!("Assigning tags to AP {}", tag.ap_mac);
        let path = restconf::list_entry(
            &restconf::child(AP_CFG, &["ap-tags"]),
            "ap-tag",
            &[tag.ap_mac.as_str()],
        );
        self.client
            .put_void(&path, &ListBody::single(AP_CFG_MODULE, "ap-tag", tag))
            .await
    }

    pub async fn remove_tag_assignment(&self, ap_mac: &str) -> WncResult<()> {
        info!("Removing tag assignment for AP {}", ap_mac);
        let path = restconf::list_entry(&restconf::child(AP_CFG, &["ap-tags"]), "ap-tag", &[ap_mac]);
        self.client.delete(&path).await
    }

    /// Administratively enable or disable an AP
    pub async fn set_admin_state(&self, wtp_mac: &str, enabled: bool) -> WncResult<()> {
        info!("Setting admin state of AP {} to {}", wtp_mac, enabled);
        let input = ApAdminStateInput {
            mode: enabled,
            wtp_mac: wtp_mac.to_string(),
        };
        self.client
            .rpc(&rpc_name("set-ap-admin-state"), &input)
            .await
    }

    /// Administratively enable or disable one radio slot
    pub async fn set_slot_admin_state(
        &self,
        wtp_mac: &str,
        slot_id: u8,
        band: &str,
        enabled: bool,
    ) -> WncResult<()> {
        info!(
            "Setting admin state of AP {} slot {} ({}) to {}",
            wtp_mac, slot_id, band, enabled
        );
        let input = ApSlotAdminStateInput {
            mode: enabled,
            wtp_mac: wtp_mac.to_string(),
            slot_id,
            band: band.to_string(),
        };
        self.client
            .rpc(&rpc_name("set-ap-slot-admin-state"), &input)
            .await
    }

    pub async fn reload(&self, wtp_mac: &str) -> WncResult<()> {
        info!("Reloading AP {}", wtp_mac);
        let input = ApResetInput {
            mac_addr: wtp_mac.to_string(),
        };
        self.client.rpc(&rpc_name("ap-reset"), &input).await
    }
}

fn rpc_name(operation: &str) -> String {
    restconf::qualified(AP_CMD_RPC_MODULE, operation)
}
