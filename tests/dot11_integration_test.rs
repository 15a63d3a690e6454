mod common;

use common::{data_path, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const DOT11_CFG: &str = "Cisco-IOS-XE-wireless-dot11-cfg:dot11-cfg-data";

#[tokio::test]
async fn test_list_configured_countries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/configured-countries", DOT11_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-dot11-cfg:configured-countries": {
                "configured-country": [{ "country-code": "US" }, { "country-code": "CA" }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let countries = client.dot11().list_configured_countries().await.unwrap();
    let codes: Vec<_> = countries.iter().map(|c| c.country_code.as_str()).collect();
    assert_eq!(codes, ["US", "CA"]);
}

#[tokio::test]
async fn test_list_dot11_entries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/dot11-entries", DOT11_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-dot11-cfg:dot11-entries": {
                "dot11-entry": [
                    { "band": "dot11-5-ghz-band", "beacon-interval": 100, "dtpc-enable": true }
                ]
            }
        })))
        .mount(&server)
        .await;

    let entries = client.dot11().list_dot11_entries().await.unwrap();
    assert_eq!(entries[0].beacon_interval, Some(100));
}

#[tokio::test]
async fn test_empty_lists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/configured-countries", DOT11_CFG))))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(data_path(DOT11_CFG)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ DOT11_CFG: {} })))
        .mount(&server)
        .await;

    let dot11 = client.dot11();
    assert!(dot11.list_configured_countries().await.unwrap().is_empty());
    assert!(dot11.get_cfg().await.unwrap().data.dot11_entries.is_none());
}
