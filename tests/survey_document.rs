use pretty_assertions::assert_eq;
use serde_json::json;
use site_survey::model::{CatalogKind, Survey};
use site_survey::rollup::{collect_assigned_items, InMemoryCatalog};

fn survey_with_device(device: serde_json::Value) -> Survey {
    serde_json::from_value(json!({
        "name": "Legacy import",
        "buildings": [{
            "id": "b1",
            "name": "HQ",
            "floors": [{
                "id": "f1",
                "name": "Ground",
                "level": 0,
                "rooms": [{ "id": "r1", "name": "Lobby", "devices": [device] }]
            }]
        }]
    }))
    .unwrap()
}

#[test]
fn legacy_and_list_assignments_roll_up_equally() {
    let legacy = survey_with_device(json!({
        "id": "d1", "name": "AP", "productId": "P1", "quantity": 2
    }));
    let current = survey_with_device(json!({
        "id": "d1", "name": "AP", "products": [{ "productId": "P1", "quantity": 2 }]
    }));

    let catalog = InMemoryCatalog::new();
    let legacy_rollup = collect_assigned_items(&legacy.buildings, &catalog);
    let current_rollup = collect_assigned_items(&current.buildings, &catalog);

    assert_eq!(legacy_rollup.product("P1").map(|r| r.quantity), Some(2));
    assert_eq!(legacy_rollup, current_rollup);
    assert_eq!(legacy, current);
}

#[test]
fn legacy_service_field_is_normalized() {
    let survey = survey_with_device(json!({
        "id": "d1", "name": "AP", "serviceId": "S1", "quantity": 3
    }));
    let device = &survey.buildings[0].floors[0].rooms[0].devices[0];
    assert_eq!(device.assignments.entries(CatalogKind::Service), vec![("S1", 3)]);
    assert!(device.assignments.products.is_empty());
}

#[test]
fn reads_full_tree_with_camel_case_keys() {
    let survey: Survey = serde_json::from_value(json!({
        "buildings": [{
            "id": "b1",
            "name": "Hotel",
            "code": "HTL",
            "centralRack": {
                "id": "mdf",
                "name": "MDF",
                "cableTerminations": [{ "id": "t1", "name": "Patch panel 1", "portCount": 24 }],
                "pbx": [{ "id": "x1", "name": "PBX", "extensions": 120, "productId": "PBX-1" }]
            },
            "floors": [{
                "id": "f2",
                "name": "Guest floor",
                "level": 2,
                "isTypical": true,
                "repeatCount": 8,
                "racks": [{ "id": "idf", "name": "IDF-2" }],
                "rooms": [{
                    "id": "r1",
                    "name": "Guest room",
                    "isTypical": true,
                    "repeatCount": 20,
                    "outlets": [{ "id": "o1", "label": "Desk", "portCableLabel": "IDF2-01" }]
                }]
            }]
        }]
    }))
    .unwrap();

    let building = &survey.buildings[0];
    let rack = building.central_rack.as_ref().unwrap();
    assert_eq!(rack.cable_terminations[0].port_count, Some(24));
    assert_eq!(rack.pbx[0].assignments.products[0].product_id, "PBX-1");
    assert_eq!(building.floors[0].repeat_count, Some(8));
    assert_eq!(building.floors[0].rooms[0].outlets[0].port_cable_label, "IDF2-01");
    assert_eq!(survey.total_leaves(), 3);
}
