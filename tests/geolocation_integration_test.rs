mod common;

use common::{data_path, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const GEOLOCATION_OPER: &str = "Cisco-IOS-XE-wireless-geolocation-oper:geolocation-oper-data";

#[tokio::test]
async fn test_get_ap_geo_loc_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/ap-geo-loc-stats", GEOLOCATION_OPER))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-geolocation-oper:ap-geo-loc-stats": {
                "num-ap-gnss": 3,
                "num-ap-man-height": 1,
                "num-ap-derived": 6
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client.geolocation().get_ap_geo_loc_stats().await.unwrap().unwrap();
    assert_eq!(stats.num_ap_gnss, Some(3));
    assert_eq!(stats.num_ap_derived, Some(6));
}

#[tokio::test]
async fn test_get_oper() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(GEOLOCATION_OPER)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            GEOLOCATION_OPER: {
                "ap-geo-loc-data": [
                    { "ap-mac": "00:1e:14:c1:2a:00", "source": "ap-geo-loc-source-gnss" }
                ]
            }
        })))
        .mount(&server)
        .await;

    let oper = client.geolocation().get_oper().await.unwrap();
    assert_eq!(oper.data.ap_geo_loc_data[0].ap_mac, "00:1e:14:c1:2a:00");
    assert!(oper.data.ap_geo_loc_stats.is_none());
}
