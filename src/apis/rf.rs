use crate::{
    client::WncClient,
    error::WncResult,
    models::{RfCfgResponse, RfProfile, RfProfileResponse, RfProfilesResponse},
    restconf::{self, RF_CFG},
};
use log::info;

/// RF profiles and the rest of `rf-cfg-data`
pub struct RfApi<'a> {
    client: &'a WncClient,
}

impl<'a> RfApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_cfg(&self) -> WncResult<RfCfgResponse> {
        info!("Getting RF configuration");
        self.client.get(RF_CFG).await
    }

    pub async fn list_rf_profiles(&self) -> WncResult<Vec<RfProfile>> {
        info!("Listing RF profiles");
        let response: RfProfilesResponse = self
            .client
            .get(&restconf::child(RF_CFG, &["rf-profiles"]))
            .await?;
        Ok(response
            .rf_profiles
            .map(|p| p.rf_profile)
            .unwrap_or_default())
    }

    pub async fn get_rf_profile(&self, name: &str) -> WncResult<Option<RfProfile>> {
        info!("Getting RF profile {}", name);
        let path = restconf::list_entry(
            &restconf::child(RF_CFG, &["rf-profiles"]),
            "rf-profile",
            &[name],
        );
        let response: Option<RfProfileResponse> = self.client.get_optional(&path).await?;
        Ok(response.and_then(|r| r.rf_profile.into_iter().find(|p| p.name == name)))
    }
}
