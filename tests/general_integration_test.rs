mod common;

use common::{data_path, setup};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

const GENERAL_OPER: &str = "Cisco-IOS-XE-wireless-general-oper:general-oper-data";
const GENERAL_CFG: &str = "Cisco-IOS-XE-wireless-general-cfg:general-cfg-data";

#[tokio::test]
async fn test_get_mgmt_intf_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/mgmt-intf-data", GENERAL_OPER))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-general-oper:mgmt-intf-data": {
                "intf-name": "Vlan10",
                "intf-type": "vlan",
                "mgmt-vlan": 10,
                "mgmt-ip": "10.10.10.5",
                "net-mask": "255.255.255.0"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let intf = client.general().get_mgmt_intf_data().await.unwrap().unwrap();
    assert_eq!(intf.mgmt_vlan, Some(10));
    assert_eq!(intf.mgmt_ip.as_deref(), Some("10.10.10.5"));
}

#[tokio::test]
async fn test_get_oper() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(GENERAL_OPER)))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let oper = client.general().get_oper().await.unwrap();
    assert!(oper.data.mgmt_intf_data.is_none());
}

#[tokio::test]
async fn test_get_cfg_sections() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(data_path(GENERAL_CFG)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            GENERAL_CFG: {
                "mfp": { "global-mfp-state": true },
                "laginfo": { "enabled": false }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/mfp", GENERAL_CFG))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Cisco-IOS-XE-wireless-general-cfg:mfp": {
                "global-mfp-state": true,
                "ap-impersonation-detection": false
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(data_path(&format!("{}/multicast-config", GENERAL_CFG))))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let general = client.general();
    let cfg = general.get_cfg().await.unwrap();
    assert_eq!(cfg.data.laginfo.unwrap().enabled, Some(false));

    let mfp = general.get_mfp().await.unwrap().unwrap();
    assert_eq!(mfp.global_mfp_state, Some(true));
    assert_eq!(mfp.ap_impersonation_detection, Some(false));

    assert!(general.get_multicast_config().await.unwrap().is_none());
}
