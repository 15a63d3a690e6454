use crate::{
    client::WncClient,
    error::WncResult,
    models::{
        ApAutoRfDot11DataResponse, RrmCfgResponse, RrmEmulOperResponse, RrmGlobalOperResponse,
        RrmMeasurementResponse, RrmOperResponse,
    },
    restconf::{self, RRM_CFG, RRM_EMUL_OPER, RRM_GLOBAL_OPER, RRM_OPER},
};
use log::info;

/// Radio resource management
pub struct RrmApi<'a> {
    client: &'a WncClient,
}

impl<'a> RrmApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<RrmOperResponse> {
        info!("Getting RRM operational data");
        self.client.get(RRM_OPER).await
    }

    /// Per-radio load, noise and foreign interference measurements
    pub async fn get_measurements(&self) -> WncResult<RrmMeasurementResponse> {
        info!("Getting RRM measurements");
        self.client
            .get(&restconf::child(RRM_OPER, &["rrm-measurement"]))
            .await
    }

    pub async fn get_auto_rf_dot11_data(&self) -> WncResult<ApAutoRfDot11DataResponse> {
        info!("Getting RRM neighbor data");
        self.client
            .get(&restconf::child(RRM_OPER, &["ap-auto-rf-dot11-data"]))
            .await
    }

    pub async fn get_global_oper(&self) -> WncResult<RrmGlobalOperResponse> {
        info!("Getting RRM global operational data");
        self.client.get(RRM_GLOBAL_OPER).await
    }

    pub async fn get_emul_oper(&self) -> WncResult<RrmEmulOperResponse> {
        info!("Getting RRM emulation operational data");
        self.client.get(RRM_EMUL_OPER).await
    }

    pub async fn get_cfg(&self) -> WncResult<RrmCfgResponse> {
        info!("Getting RRM configuration");
        self.client.get(RRM_CFG).await
    }
}
