use crate::{
    client::WncClient,
    error::WncResult,
    models::{ApGeoLocStats, ApGeoLocStatsResponse, GeolocationOperResponse},
    restconf::{self, GEOLOCATION_OPER},
};
use log::info;

pub struct GeolocationApi<'a> {
    client: &'a WncClient,
}

impl<'a> GeolocationApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_oper(&self) -> WncResult<GeolocationOperResponse> {
        info!("Getting geolocation operational data");
        self.client.get(GEOLOCATION_OPER).await
    }

    /// Counts of APs located by GNSS, manual height or derivation
    pub async fn get_ap_geo_loc_stats(&self) -> WncResult<Option<ApGeoLocStats>> {
        info!("Getting AP geolocation statistics");
        let response: ApGeoLocStatsResponse = self
            .client
            .get(&restconf::child(GEOLOCATION_OPER, &["ap-geo-loc-stats"]))
            .await?;
        Ok(response.ap_geo_loc_stats)
    }
}
