use crate::{
    client::WncClient,
    error::WncResult,
    models::{
        ClientOperResponse, CommonOperData, CommonOperDataResponse, Dot11OperDataResponse,
        TrafficStatsResponse,
    },
    restconf::{self, CLIENT_OPER},
};
use log::info;

/// Associated wireless clients
pub struct ClientApi<'a> {
    client: &'a WncClient,
}

impl<'a> ClientApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<ClientOperResponse> {
        info!("Getting client operational data");
        self.client.get(CLIENT_OPER).await
    }

    pub async fn get_common_oper_data(&self) -> WncResult<CommonOperDataResponse> {
        info!("Getting client common operational data");
        self.client
            .get(&restconf::child(CLIENT_OPER, &["common-oper-data"]))
            .await
    }

    pub async fn get_dot11_oper_data(&self) -> WncResult<Dot11OperDataResponse> {
        info!("Getting client 802.11 operational data");
        self.client
            .get(&restconf::child(CLIENT_OPER, &["dot11-oper-data"]))
            .await
    }

    pub async fn get_traffic_stats(&self) -> WncResult<TrafficStatsResponse> {
        info!("Getting client traffic statistics");
        self.client
            .get(&restconf::child(CLIENT_OPER, &["traffic-stats"]))
            .await
    }

    /// Common data for one client; `None` when it is not associated
    pub async fn get_by_mac(&self, client_mac: &str) -> WncResult<Option<CommonOperData>> {
        info!("Getting client {}", client_mac);
        let path = restconf::list_entry(CLIENT_OPER, "common-oper-data", &[client_mac]);
        let response: Option<CommonOperDataResponse> = self.client.get_optional(&path).await?;
        Ok(response.and_then(|r| {
            r.common_oper_data
                .into_iter()
                .find(|c| c.client_mac.eq_ignore_ascii_case(client_mac))
        }))
    }
}
