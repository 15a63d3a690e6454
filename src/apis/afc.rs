use crate::{
    client::WncClient,
    error::WncResult,
    models::{AfcCloudOperResponse, AfcCloudStats, AfcCloudStatsResponse, AfcOperResponse, EwlcAfcApRespResponse},
    restconf::{self, AFC_CLOUD_OPER, AFC_OPER},
};
use log::info;

/// Automated Frequency Coordination for 6 GHz standard power
pub struct AfcApi<'a> {
    client: &'a WncClient,
}

impl<'a> AfcApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<AfcOperResponse> {
        info!("Getting AFC operational data");
        self.client.get(AFC_OPER).await
    }

    /// Spectrum inquiry responses received per AP radio
    pub async fn get_ap_responses(&self) -> WncResult<EwlcAfcApRespResponse> {
        info!("Getting AFC AP responses");
        self.client
            .get(&restconf::child(AFC_OPER, &["ewlc-afc-ap-resp"]))
            .await
    }

    pub async fn get_cloud_oper(&self) -> WncResult<AfcCloudOperResponse> {
        info!("Getting AFC cloud operational data");
        self.client.get(AFC_CLOUD_OPER).await
    }

    pub async fn get_cloud_stats(&self) -> WncResult<Option<AfcCloudStats>> {
        info!("Getting AFC cloud statistics");
        let response: AfcCloudStatsResponse = self
            .client
            .get(&restconf::child(AFC_CLOUD_OPER, &["afc-cloud-stats"]))
            .await?;
        Ok(response.afc_cloud_stats)
    }
}
