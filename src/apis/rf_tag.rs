use crate::{
    client::WncClient,
    error::{WncError, WncResult},
    models::{RfTag, RfTagResponse, RfTagsResponse},
    restconf::{self, ListBody, RF_CFG, RF_CFG_MODULE},
};
use log::{debug, info};

/// RF tags: per-band RF profile bindings
pub struct RfTagApi<'a> {
    client: &'a WncClient,
}

impl<'a> RfTagApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> WncResult<Vec<RfTag>> {
        info!("Listing RF tags");
        let response: RfTagsResponse = self.client.get(&tags_path()).await?;
        Ok(response.rf_tags.map(|t| t.rf_tag).unwrap_or_default())
    }

    /// Fetch one RF tag; `None` when it does not exist
    pub async fn get(&self, tag_name: &str) -> WncResult<Option<RfTag>> {
        info!("Getting RF tag {}", tag_name);
        let response: Option<RfTagResponse> = self.client.get_optional(&tag_path(tag_name)).await?;
        Ok(response.and_then(|r| r.rf_tag.into_iter().find(|t| t.tag_name == tag_name)))
    }

    pub async fn create(&self, tag: &RfTag) -> WncResult<()> {
        validate(tag)?;
        info!("Creating RF tag {}", tag.tag_name);
        self.client
            .post_void(&tags_path(), &ListBody::single(RF_CFG_MODULE, "rf-tag", tag))
            .await
    }

    /// Replace an RF tag with `tag`
    pub async fn set(&self, tag: &RfTag) -> WncResult<()> {
        validate(tag)?;
        info!("Replacing RF tag {}", tag.tag_name);
        self.client
            .put_void(
                &tag_path(&tag.tag_name),
                &ListBody::single(RF_CFG_MODULE, "rf-tag", tag),
            )
            .await
    }

    pub async fn delete(&self, tag_name: &str) -> WncResult<()> {
        info!("Deleting RF tag {}", tag_name);
        self.client.delete(&tag_path(tag_name)).await
    }

    /// Bind the 5 GHz RF profile
    pub async fn set_dot11a_profile(&self, tag_name: &str, profile: &str) -> WncResult<()> {
        self.modify(tag_name, |tag| {
            replace(&mut tag.dot11a_rf_profile_name, profile)
        })
        .await
    }

    /// Bind the 2.4 GHz RF profile
    pub async fn set_dot11b_profile(&self, tag_name: &str, profile: &str) -> WncResult<()> {
        self.modify(tag_name, |tag| {
            replace(&mut tag.dot11b_rf_profile_name, profile)
        })
        .await
    }

    /// Bind the 6 GHz RF profile
    pub async fn set_dot11_6ghz_profile(&self, tag_name: &str, profile: &str) -> WncResult<()> {
        self.modify(tag_name, |tag| {
            replace(&mut tag.dot11_6ghz_rf_profile_name, profile)
        })
        .await
    }

    pub async fn set_description(&self, tag_name: &str, description: &str) -> WncResult<()> {
        self.modify(tag_name, |tag| replace(&mut tag.description, description))
            .await
    }

    async fn modify<F>(&self, tag_name: &str, change: F) -> WncResult<()>
    where
        F: FnOnce(&mut RfTag) -> bool,
    {
        let mut tag = self
            .get(tag_name)
            .await?
            .ok_or_else(|| WncError::not_found(tag_path(tag_name)))?;
        if !change(&mut tag) {
            debug!("RF tag {} unchanged", tag_name);
            return Ok(());
        }
        self.set(&tag).await
    }
}

/// An empty value clears the leaf. Returns whether anything changed.
fn replace(slot: &mut Option<String>, value: &str) -> bool {
    let value = (!value.is_empty()).then(|| value.to_string());
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn validate(tag: &RfTag) -> WncResult<()> {
    if tag.tag_name.is_empty() {
        return Err(WncError::invalid_param("RF tag name must not be empty"));
    }
    Ok(())
}

fn tags_path() -> String {
    restconf::child(RF_CFG, &["rf-tags"])
}

fn tag_path(tag_name: &str) -> String {
    restconf::list_entry(&tags_path(), "rf-tag", &[tag_name])
}
