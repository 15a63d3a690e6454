mod common;

use common::{data_path, fixture, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const WLAN_CFG: &str = "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-data";

#[tokio::test]
async fn test_list_wlan_cfg_entries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/wlan-cfg-entries", WLAN_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("wlan_cfg_entries.json")))
        .expect(1)
        .mount(&server)
        .await;

    let wlans = client.wlan().list_wlan_cfg_entries().await.unwrap();
    let enabled: Vec<_> = wlans.iter().filter(|w| w.is_enabled()).filter_map(|w| w.ssid()).collect();
    assert_eq!(enabled, ["CORP"]);
    assert_eq!(wlans[1].wlan_id, Some(2));
}

#[tokio::test]
async fn test_get_wlan_by_profile() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!(
            "{}/wlan-cfg-entries/wlan-cfg-entry=corp%20lab",
            WLAN_CFG
        ))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-cfg-entry": [
                { "profile-name": "corp lab", "wlan-id": 7 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let wlan = client.wlan().get_wlan_by_profile("corp lab").await.unwrap().unwrap();
    assert_eq!(wlan.wlan_id, Some(7));
    assert!(wlan.ssid().is_none());
}

#[tokio::test]
async fn test_list_wlan_policies() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/wlan-policies", WLAN_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-cfg:wlan-policies": {
                "wlan-policy": [{
                    "policy-profile-name": "PP_CORP",
                    "status": true,
                    "interface-name": "VLAN0020",
                    "wlan-switching-policy": { "central-switching": true }
                }]
            }
        })))
        .mount(&server)
        .await;

    let policies = client.wlan().list_wlan_policies().await.unwrap();
    assert_eq!(policies[0].interface_name.as_deref(), Some("VLAN0020"));
    assert_eq!(
        policies[0].wlan_switching_policy.as_ref().unwrap().central_switching,
        Some(true)
    );
}

#[tokio::test]
async fn test_get_global_oper() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path("Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-wlan-global-oper:wlan-global-oper-data": {
                "wlan-info": [{ "wlan-profile-name": "corp", "curr-clients-count": 12 }]
            }
        })))
        .mount(&server)
        .await;

    let oper = client.wlan().get_global_oper().await.unwrap();
    assert_eq!(oper.data.wlan_info[0].curr_clients_count, Some(12));
}
