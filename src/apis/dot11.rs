use crate::{
    client::WncClient,
    error::WncResult,
    models::{
        ConfiguredCountriesResponse, ConfiguredCountry, Dot11CfgResponse, Dot11Entries,
        Dot11EntriesResponse, Dot11Entry,
    },
    restconf::{self, DOT11_CFG},
};
use log::info;

/// 802.11 band and regulatory configuration
pub struct Dot11Api<'a> {
    client: &'a WncClient,
}

impl<'a> Dot11Api<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn get_cfg(&self) -> WncResult<Dot11CfgResponse> {
        info!("Getting 802.11 configuration");
        self.client.get(DOT11_CFG).await
    }

    pub async fn list_configured_countries(&self) -> WncResult<Vec<ConfiguredCountry>> {
        info!("Listing configured countries");
        let response: ConfiguredCountriesResponse = self
            .client
            .get(&restconf::child(DOT11_CFG, &["configured-countries"]))
            .await?;
        Ok(response
            .configured_countries
            .map(|c| c.configured_country)
            .unwrap_or_default())
    }

    pub async fn list_dot11_entries(&self) -> WncResult<Vec<Dot11Entry>> {
        info!("Listing 802.11 band entries");
        let response: Dot11EntriesResponse = self
            .client
            .get(&restconf::child(DOT11_CFG, &["dot11-entries"]))
            .await?;
        Ok(response
            .dot11_entries
            .map(|Dot11Entries { dot11_entry }| dot11_entry)
            .unwrap_or_default())
    }
}
