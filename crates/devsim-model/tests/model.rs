//! Tests for devsim-model types.

use std::collections::BTreeMap;

use devsim_model::{BrandCatalog, DeviceIdentity, Region, SensorReading, TypeAllocationCode};

fn sample_identity() -> DeviceIdentity {
    DeviceIdentity {
        model: "Samsung Galaxy S25".to_string(),
        imei: "350505561234567".to_string(),
        imsi: "460001234567890".to_string(),
        mac_address: "0a:1b:2c:3d:4e:5f".to_string(),
        android_id: "0123456789abcdef".to_string(),
        app_version: "3.14.15".to_string(),
        system_version: "Android 13".to_string(),
        ssid: "WiFi_4821".to_string(),
        ip_address: "10.20.30.40".to_string(),
        network_type: "4G".to_string(),
        accelerometer_data: Some(SensorReading::new(0.12, -9.81, 3.3)),
        gyroscope_data: Some(SensorReading::new(-499.99, 0.01, 250.5)),
        latitude: 31.230416,
        longitude: 121.473701,
        country: "China".to_string(),
        region: "China".to_string(),
        carrier: "China Mobile".to_string(),
        phone_number: "+8613912345678".to_string(),
    }
}

#[test]
fn identity_json_round_trip_is_lossless() {
    let identity = sample_identity();
    let json = serde_json::to_string(&identity).expect("serialize identity");
    let round: DeviceIdentity = serde_json::from_str(&json).expect("deserialize identity");
    assert_eq!(round, identity);
}

#[test]
fn identity_batch_serializes_as_array() {
    let batch = vec![sample_identity(), DeviceIdentity::default()];
    let value = serde_json::to_value(&batch).expect("serialize batch");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["phone_number"], "+8613912345678");
    assert_eq!(items[0]["gyroscope_data"]["x"], -499.99);
}

#[test]
fn identity_missing_fields_default_to_empty() {
    let identity: DeviceIdentity =
        serde_json::from_str(r#"{"model": "Apple iPhone 16e"}"#).expect("deserialize");
    assert_eq!(identity.model, "Apple iPhone 16e");
    assert!(identity.imei.is_empty());
    assert!(identity.accelerometer_data.is_none());
}

#[test]
fn type_allocation_code_deserialization_validates() {
    let ok: TypeAllocationCode = serde_json::from_str(r#""86312106""#).expect("valid code");
    assert_eq!(ok.as_str(), "86312106");
    assert!(serde_json::from_str::<TypeAllocationCode>(r#""863121""#).is_err());
    assert!(serde_json::from_str::<TypeAllocationCode>(r#""8631210a""#).is_err());
    assert!(TypeAllocationCode::new("863121060").is_err());
    assert_eq!(TypeAllocationCode::new(" 86312106 ").unwrap().as_str(), "86312106");
}

#[test]
fn brand_catalog_lookup() {
    let mut models = BTreeMap::new();
    models.insert(
        "P60 Art".to_string(),
        TypeAllocationCode::new("86312106").unwrap(),
    );
    let catalog = BrandCatalog::new("Huawei", models).unwrap();
    assert_eq!(
        catalog.type_allocation_code("P60 Art").map(TypeAllocationCode::as_str),
        Some("86312106")
    );
    assert!(catalog.type_allocation_code("Mate 60").is_none());
    assert!(BrandCatalog::new(" ", BTreeMap::new()).is_err());
}

#[test]
fn region_network_codes_keep_registration_order() {
    let mut carriers = BTreeMap::new();
    carriers.insert(
        "China Mobile".to_string(),
        vec!["00".to_string(), "02".to_string(), "07".to_string()],
    );
    let region = Region::new("China", "460", carriers, vec!["139".to_string()]).unwrap();
    assert_eq!(region.network_codes("China Mobile")[0], "00");
    assert_eq!(region.carrier_names().collect::<Vec<_>>(), vec!["China Mobile"]);
}
