mod common;

use common::{data_path, fixture, setup};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wnc_client::{RfTag, WncError};

const RF_TAGS: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data/rf-tags";

fn tag_path(name: &str) -> String {
    data_path(&format!("{}/rf-tag={}", RF_TAGS, name))
}

async fn mount_existing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(tag_path("RT_LAB")))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("rf_tag.json")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_rf_tags() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(RF_TAGS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("rf_tags.json")))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client.rf_tags().list().await.unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.tag_name.as_str()).collect();
    assert_eq!(names, ["RT_LAB", "default-rf-tag"]);
}

#[tokio::test]
async fn test_list_rf_tags_empty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(RF_TAGS)))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert!(client.rf_tags().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_rf_tag() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    let tag = client.rf_tags().get("RT_LAB").await.unwrap().unwrap();
    assert_eq!(tag.dot11a_rf_profile_name.as_deref(), Some("RP_5G_TYPICAL"));
    assert_eq!(tag.description.as_deref(), Some("lab floor"));
}

#[tokio::test]
async fn test_get_missing_rf_tag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tag_path("RT_NOPE")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.rf_tags().get("RT_NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_rf_tag() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(data_path(RF_TAGS)))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [
                { "tag-name": "RT_NEW", "description": "new floor" }
            ]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let mut tag = RfTag::new("RT_NEW");
    tag.description = Some("new floor".to_string());
    client.rf_tags().create(&tag).await.unwrap();
}

#[tokio::test]
async fn test_create_rf_tag_requires_name() {
    let (_server, client) = setup().await;
    let err = client.rf_tags().create(&RfTag::default()).await.unwrap_err();
    assert!(matches!(err, WncError::InvalidParameter(_)), "got: {err:?}");
}

#[tokio::test]
async fn test_delete_rf_tag() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(tag_path("RT_LAB")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.rf_tags().delete("RT_LAB").await.unwrap();
}

/// Test that a profile change rewrites the whole tag
#[tokio::test]
async fn test_set_dot11a_profile() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    Mock::given(method("PUT"))
        .and(path(tag_path("RT_LAB")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "description": "lab floor",
                "dot11a-rf-profile-name": "RP_5G_HIGH",
                "dot11b-rf-profile-name": "RP_24G_TYPICAL"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .rf_tags()
        .set_dot11a_profile("RT_LAB", "RP_5G_HIGH")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_6ghz_profile() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    Mock::given(method("PUT"))
        .and(path(tag_path("RT_LAB")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "description": "lab floor",
                "dot11a-rf-profile-name": "RP_5G_TYPICAL",
                "dot11b-rf-profile-name": "RP_24G_TYPICAL",
                "dot11-6ghz-rf-prof-name": "RP_6G"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .rf_tags()
        .set_dot11_6ghz_profile("RT_LAB", "RP_6G")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_clear_description() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    Mock::given(method("PUT"))
        .and(path(tag_path("RT_LAB")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "dot11a-rf-profile-name": "RP_5G_TYPICAL",
                "dot11b-rf-profile-name": "RP_24G_TYPICAL"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.rf_tags().set_description("RT_LAB", "").await.unwrap();
}

#[tokio::test]
async fn test_unchanged_profile_skips_write() {
    let (server, client) = setup().await;
    mount_existing(&server).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    client
        .rf_tags()
        .set_dot11b_profile("RT_LAB", "RP_24G_TYPICAL")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_modify_missing_tag() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tag_path("RT_NOPE")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .rf_tags()
        .set_dot11a_profile("RT_NOPE", "RP_5G")
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn test_set_rf_tag() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(tag_path("RT_LAB")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "dot11b-rf-profile-name": "RP_24G_LOW"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut tag = RfTag::new("RT_LAB");
    tag.dot11b_rf_profile_name = Some("RP_24G_LOW".to_string());
    client.rf_tags().set(&tag).await.unwrap();
}

#[tokio::test]
async fn test_set_rf_tag_requires_name() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.rf_tags().set(&RfTag::default()).await.unwrap_err();
    assert!(matches!(err, WncError::InvalidParameter(_)), "got: {err:?}");
}

/// Test that a profile change writes back leaves the model does not name
#[tokio::test]
async fn test_profile_change_keeps_unmodelled_leaves() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tag_path("RT_LAB")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "dot11a-rf-profile-name": "RP_5G_TYPICAL",
                "dot11-6ghz-slot3-rf-prof-name": "RP_6G_SLOT3"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(tag_path("RT_LAB")))
        .and(body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-tag": [{
                "tag-name": "RT_LAB",
                "dot11a-rf-profile-name": "RP_5G_HIGH",
                "dot11-6ghz-slot3-rf-prof-name": "RP_6G_SLOT3"
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .rf_tags()
        .set_dot11a_profile("RT_LAB", "RP_5G_HIGH")
        .await
        .unwrap();
}
