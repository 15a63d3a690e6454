mod common;

use common::{data_path, fixture, setup};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wnc_client::{PolicyListEntry, PolicyTagWlanPolicies, WlanPolicyMap, WncError};

const POLICY_TAGS: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data/policy-list-entries";

fn tag_path(name: &str) -> String {
    data_path(&format!("{}/policy-list-entry={}", POLICY_TAGS, name))
}

async fn mount_existing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(tag_path("PT_LAB")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("policy_list_entry.json")))
        .mount(server)
        .await;
}

fn expect_put(body: serde_json::Value) -> Mock {
    Mock::given(method("PUT"))
        .and(path(tag_path("PT_LAB")))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
}

#[tokio::test]
async fn test_list_policy_tags() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(POLICY_TAGS)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixture("policy_list_entries.json")),
        )
        .mount(&server)
        .await;

    let tags = client.policy_tags().list().await.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].mappings()[0].wlan_profile_name, "corp");
    assert!(tags[1].mappings().is_empty());
}

#[tokio::test]
async fn test_get_missing_policy_tag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tag_path("PT_NOPE")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.policy_tags().get("PT_NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_policy_tag() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(data_path(POLICY_TAGS)))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{ "tag-name": "PT_NEW" }]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client
        .policy_tags()
        .create(&PolicyListEntry::new("PT_NEW"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_existing_policy_tag() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(data_path(POLICY_TAGS)))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "ietf-restconf:errors": {
                "error": [{ "error-type": "application", "error-tag": "data-exists" }]
            }
        })))
        .mount(&server)
        .await;

    let err = client
        .policy_tags()
        .create(&PolicyListEntry::new("PT_LAB"))
        .await
        .unwrap_err();
    match err {
        WncError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "data-exists");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_wlan_policy() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "description": "lab policies",
            "wlan-policies": {
                "wlan-policy": [
                    { "wlan-profile-name": "corp", "policy-profile-name": "PP_CORP" },
                    { "wlan-profile-name": "guest", "policy-profile-name": "PP_GUEST" },
                    { "wlan-profile-name": "iot", "policy-profile-name": "PP_IOT" }
                ]
            }
        }]
    }))
    .mount(&server)
    .await;

    client
        .policy_tags()
        .add_wlan_policy("PT_LAB", "iot", "PP_IOT")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_wlan_policy_replaces_mapping() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "description": "lab policies",
            "wlan-policies": {
                "wlan-policy": [
                    { "wlan-profile-name": "corp", "policy-profile-name": "PP_CORP" },
                    { "wlan-profile-name": "guest", "policy-profile-name": "PP_GUEST_V2" }
                ]
            }
        }]
    }))
    .mount(&server)
    .await;

    client
        .policy_tags()
        .add_wlan_policy("PT_LAB", "guest", "PP_GUEST_V2")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_wlan_policy() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "description": "lab policies",
            "wlan-policies": {
                "wlan-policy": [
                    { "wlan-profile-name": "corp", "policy-profile-name": "PP_CORP" }
                ]
            }
        }]
    }))
    .mount(&server)
    .await;

    client
        .policy_tags()
        .remove_wlan_policy("PT_LAB", "guest")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_absent_wlan_policy_is_noop() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    client
        .policy_tags()
        .remove_wlan_policy("PT_LAB", "iot")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_description() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "description": "renamed",
            "wlan-policies": {
                "wlan-policy": [
                    { "wlan-profile-name": "corp", "policy-profile-name": "PP_CORP" },
                    { "wlan-profile-name": "guest", "policy-profile-name": "PP_GUEST" }
                ]
            }
        }]
    }))
    .mount(&server)
    .await;

    client
        .policy_tags()
        .set_description("PT_LAB", "renamed")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_modify_missing_policy_tag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tag_path("PT_NOPE")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client
        .policy_tags()
        .add_wlan_policy("PT_NOPE", "corp", "PP_CORP")
        .await
        .unwrap_err();
    match err {
        WncError::NotFound { path } => assert!(path.ends_with("policy-list-entry=PT_NOPE")),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_wlan_policy_rejects_empty_names() {
    let (_server, client) = setup().await;
    let err = client
        .policy_tags()
        .add_wlan_policy("PT_LAB", "", "PP_CORP")
        .await
        .unwrap_err();
    assert!(matches!(err, WncError::InvalidParameter(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_set_policy_tag() {
    let (server, client) = setup().await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "wlan-policies": {
                "wlan-policy": [
                    { "wlan-profile-name": "corp", "policy-profile-name": "PP_CORP" }
                ]
            }
        }]
    }))
    .mount(&server)
    .await;

    let mut entry = PolicyListEntry::new("PT_LAB");
    entry.wlan_policies = Some(PolicyTagWlanPolicies {
        wlan_policy: vec![WlanPolicyMap {
            wlan_profile_name: "corp".to_string(),
            policy_profile_name: "PP_CORP".to_string(),
        }],
    });
    client.policy_tags().set(&entry).await.unwrap();
}

#[tokio::test]
async fn test_set_policy_tag_requires_name() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .policy_tags()
        .set(&PolicyListEntry::default())
        .await
        .unwrap_err();
    assert!(matches!(err, WncError::InvalidParameter(_)), "got: {err:?}");
}

/// Test that a description change writes back leaves the model does not name
#[tokio::test]
async fn test_set_description_keeps_unmodelled_leaves() {
    let (server, client) = setup().await;

    let remote_lan = json!({
        "remote-lan-policy": [
            { "rlan-profile-name": "RLAN_LOBBY", "rlan-policy-profile-name": "RLP_LOBBY" }
        ]
    });
    Mock::given(method("GET"))
        .and(path(tag_path("PT_LAB")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
                "tag-name": "PT_LAB",
                "description": "old",
                "remote-lan-policies": remote_lan.clone()
            }]
        })))
        .mount(&server)
        .await;

    expect_put(json!({
        "Cisco-IOS-XE-wireless-wlan-cfg:policy-list-entry": [{
            "tag-name": "PT_LAB",
            "description": "new",
            "remote-lan-policies": remote_lan
        }]
    }))
    .mount(&server)
    .await;

    client
        .policy_tags()
        .set_description("PT_LAB", "new")
        .await
        .unwrap();
}
