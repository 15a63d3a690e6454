mod common;

use common::{data_path, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const RF_CFG: &str = "Cisco-IOS-XE-wireless-rf-cfg:rf-cfg-data";

#[tokio::test]
async fn test_list_rf_profiles() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/rf-profiles", RF_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-profiles": {
                "rf-profile": [
                    {
                        "name": "RP_5G_TYPICAL",
                        "band": "dot11-5-ghz-band",
                        "status": true,
                        "transmit-power-min": -10,
                        "transmit-power-max": 30
                    },
                    { "name": "RP_24G_TYPICAL", "band": "dot11-2-dot-4-ghz-band" }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profiles = client.rf().list_rf_profiles().await.unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].transmit_power_min, Some(-10));
    assert!(profiles[1].status.is_none());
}

#[tokio::test]
async fn test_get_rf_profile() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/rf-profiles/rf-profile=RP_5G_TYPICAL", RF_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-rf-cfg:rf-profile": [{ "name": "RP_5G_TYPICAL" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/rf-profiles/rf-profile=RP_NOPE", RF_CFG))))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let rf = client.rf();
    assert_eq!(rf.get_rf_profile("RP_5G_TYPICAL").await.unwrap().unwrap().name, "RP_5G_TYPICAL");
    assert!(rf.get_rf_profile("RP_NOPE").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_cfg() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(RF_CFG)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            RF_CFG: {
                "rf-tags": { "rf-tag": [{ "tag-name": "default-rf-tag" }] },
                "multi-bssid-profiles": { "multi-bssid-profile": [] }
            }
        })))
        .mount(&server)
        .await;

    let cfg = client.rf().get_cfg().await.unwrap();
    assert_eq!(cfg.data.rf_tags.unwrap().rf_tag.len(), 1);
    assert!(cfg.data.multi_bssid_profiles.is_some());
}
