use crate::{
    client::WncClient,
    error::WncResult,
    models::{FlexMediastreamClientSummaryResponse, McastOperResponse, VlanL2MgidOpResponse},
    restconf::{self, MCAST_OPER},
};
use log::info;

pub struct McastApi<'a> {
    client: &'a WncClient,
}

impl<'a> McastApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<McastOperResponse> {
        info!("Getting multicast operational data");
        self.client.get(MCAST_OPER).await
    }

    /// FlexConnect mediastream clients and their groups
    pub async fn get_flex_mediastream_clients(
        &self,
    ) -> WncResult<FlexMediastreamClientSummaryResponse> {
        info!("Getting FlexConnect mediastream clients");
        self.client
            .get(&restconf::child(
                MCAST_OPER,
                &["flex-mediastream-client-summary"],
            ))
            .await
    }

    pub async fn get_vlan_l2_mgid(&self) -> WncResult<VlanL2MgidOpResponse> {
        info!("Getting VLAN layer 2 MGID data");
        self.client
            .get(&restconf::child(MCAST_OPER, &["vlan-l2-mgid-op"]))
            .await
    }
}
