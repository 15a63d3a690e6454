use crate::{
    client::WncClient,
    error::WncResult,
    models::{
        GeneralCfgResponse, GeneralOperResponse, MfpResponse, MgmtIntfData, MgmtIntfDataResponse,
        Mfp, MulticastConfig, MulticastConfigResponse,
    },
    restconf::{self, GENERAL_CFG, GENERAL_OPER},
};
use log::info;

/// Controller-wide operational and configuration data
pub struct GeneralApi<'a> {
    client: &'a WncClient,
}

impl<'a> GeneralApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<GeneralOperResponse> {
        info!("Getting general operational data");
        self.client.get(GENERAL_OPER).await
    }

    /// Wireless management interface; `None` when the controller has none configured
    pub async fn get_mgmt_intf_data(&self) -> WncResult<Option<MgmtIntfData>> {
        info!("Getting wireless management interface");
        let response: MgmtIntfDataResponse = self
            .client
            .get(&restconf::child(GENERAL_OPER, &["mgmt-intf-data"]))
            .await?;
        Ok(response.mgmt_intf_data)
    }

    pub async fn get_cfg(&self) -> WncResult<GeneralCfgResponse> {
        info!("Getting general configuration");
        self.client.get(GENERAL_CFG).await
    }

    pub async fn get_mfp(&self) -> WncResult<Option<Mfp>> {
        info!("Getting management frame protection settings");
        let response: MfpResponse = self
            .client
            .get(&restconf::child(GENERAL_CFG, &["mfp"]))
            .await?;
        Ok(response.mfp)
    }

    pub async fn get_multicast_config(&self) -> WncResult<Option<MulticastConfig>> {
        info!("Getting multicast configuration");
        let response: MulticastConfigResponse = self
            .client
            .get(&restconf::child(GENERAL_CFG, &["multicast-config"]))
            .await?;
        Ok(response.multicast_config)
    }
}
