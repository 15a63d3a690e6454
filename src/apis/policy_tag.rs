use crate::{
    client::WncClient,
    error::{WncError, WncResult},
    models::{PolicyListEntriesResponse, PolicyListEntry, PolicyListEntryResponse, WlanPolicyMap},
    restconf::{self, ListBody, WLAN_CFG, WLAN_CFG_MODULE},
};
use log::{debug, info};

/// Policy tags (`policy-list-entry`): WLAN profile to policy profile mappings
pub struct PolicyTagApi<'a> {
    client: &'a WncClient,
}

impl<'a> PolicyTagApi<'a> {
    pub fn new(client: &'a WncClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> WncResult<Vec<PolicyListEntry>> {
        info!("Listing policy tags");
        let response: PolicyListEntriesResponse = self.client.get(&entries_path()).await?;
        Ok(response
            .policy_list_entries
            .map(|e| e.policy_list_entry)
            .unwrap_or_default())
    }

    /// Fetch one policy tag; `None` when it does not exist
    pub async fn get(&self, tag_name: &str) -> WncResult<Option<PolicyListEntry>> {
        info!("Getting policy tag {}", tag_name);
        let response: Option<PolicyListEntryResponse> =
            self.client.get_optional(&entry_path(tag_name)).await?;
        Ok(response.and_then(|r| {
            r.policy_list_entry
                .into_iter()
                .find(|e| e.tag_name == tag_name)
        }))
    }

    pub async fn create(&self, entry: &PolicyListEntry) -> WncResult<()> {
        validate(entry)?;
        info!("Creating policy tag {}", entry.tag_name);
        self.client
            .post_void(
                &entries_path(),
                &ListBody::single(WLAN_CFG_MODULE, "policy-list-entry", entry),
            )
            .await
    }

    /// Replace a policy tag with `entry`
    pub async fn set(&self, entry: &PolicyListEntry) -> WncResult<()> {
        validate(entry)?;
        info!("Replacing policy tag {}", entry.tag_name);
        self.client
            .put_void(
                &entry_path(&entry.tag_name),
                &ListBody::single(WLAN_CFG_MODULE, "policy-list-entry", entry),
            )
            .await
    }

    pub async fn delete(&self, tag_name: &str) -> WncResult<()> {
        info!("Deleting policy tag {}", tag_name);
        self.client.delete(&entry_path(tag_name)).await
    }

    pub async fn set_description(&self, tag_name: &str, description: &str) -> WncResult<()> {
        self.modify(tag_name, |entry| {
            let description = (!description.is_empty()).then(|| description.to_string());
            if entry.description == description {
                return false;
            }
            entry.description = description;
            true
        })
        .await
    }

    /// Map `wlan_profile` to `policy_profile`, replacing any existing
    /// mapping for that WLAN profile
    pub async fn add_wlan_policy(
        &self,
        tag_name: &str,
        wlan_profile: &str,
        policy_profile: &str,
    ) -> WncResult<()> {
        if wlan_profile.is_empty() || policy_profile.is_empty() {
            return Err(WncError::invalid_param(
                "WLAN and policy profile names must not be empty",
            ));
        }
        self.modify(tag_name, |entry| {
            let mapping = WlanPolicyMap {
                wlan_profile_name: wlan_profile.to_string(),
                policy_profile_name: policy_profile.to_string(),
            };
            let policies = entry.wlan_policies.get_or_insert_with(Default::default);
            match policies
                .wlan_policy
                .iter_mut()
                .find(|m| m.wlan_profile_name == wlan_profile)
            {
                Some(existing) if *existing == mapping => false,
                Some(existing) => {
                    *existing = mapping;
                    true
                }
                None => {
                    policies.wlan_policy.push(mapping);
                    true
                }
            }
        })
        .await
    }

    /// Drop the mapping for `wlan_profile`; a missing mapping is not an error
    pub async fn remove_wlan_policy(&self, tag_name: &str, wlan_profile: &str) -> WncResult<()> {
        self.modify(tag_name, |entry| {
            let Some(policies) = entry.wlan_policies.as_mut() else {
                return false;
            };
            let before = policies.wlan_policy.len();
            policies
                .wlan_policy
                .retain(|m| m.wlan_profile_name != wlan_profile);
            policies.wlan_policy.len() != before
        })
        .await
    }

    /// Read the tag, apply `change`, and write it back when `change`
    /// reports a modification
    async fn modify<F>(&self, tag_name: &str, change: F) -> WncResult<()>
    where
        F: FnOnce(&mut PolicyListEntry) -> bool,
    {
        let mut entry = self
            .get(tag_name)
            .await?
            .ok_or_else(|| WncError::not_found(entry_path(tag_name)))?;
        if !change(&mut entry) {
            debug!("Policy tag {} unchanged", tag_name);
            return Ok(());
        }
        self.set(&entry).await
    }
}

fn validate(entry: &PolicyListEntry) -> WncResult<()> {
    if entry.tag_name.is_empty() {
        return Err(WncError::invalid_param("policy tag name must not be empty"));
    }
    Ok(())
}

fn entries_path() -> String {
    restconf::child(WLAN_CFG, &["policy-list-entries"])
}

fn entry_path(tag_name: &str) -> String {
    restconf::list_entry(&entries_path(), "policy-list-entry", &[tag_name])
}
