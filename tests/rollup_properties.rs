mod common;

use common::{building, device, floor, room, switch};
use pretty_assertions::assert_eq;
use site_survey::cascade::remove_catalog_reference;
use site_survey::model::{Building, CatalogKind, Rack};
use site_survey::rollup::{collect_assigned_items, InMemoryCatalog};

fn single_device_tree(floor_typical: Option<i64>, room_typical: Option<i64>) -> Vec<Building> {
    let mut b = building("b1", "Tower");
    let mut f = floor("f1", "Floor", 1);
    if let Some(count) = floor_typical {
        f = f.typical(count);
    }
    let mut r = room("r1", "Room");
    if let Some(count) = room_typical {
        r = r.typical(count);
    }
    let mut d = device("d1", "AP");
    d.assignments.upsert_product("P1", 1);
    r.devices.push(d);
    f.rooms.push(r);
    b.floors.push(f);
    vec![b]
}

fn quantity_of(buildings: &[Building], id: &str) -> u64 {
    collect_assigned_items(buildings, &InMemoryCatalog::new())
        .product(id)
        .map_or(0, |r| r.quantity)
}

#[test]
fn typical_room_on_typical_floor_multiplies() {
    let tree = single_device_tree(Some(2), Some(3));
    assert_eq!(quantity_of(&tree, "P1"), 6);
}

#[test]
fn zero_repeat_count_and_non_typical_behave_like_one() {
    let baseline = quantity_of(&single_device_tree(Some(1), None), "P1");
    assert_eq!(baseline, 1);
    assert_eq!(quantity_of(&single_device_tree(Some(0), Some(0)), "P1"), baseline);
    assert_eq!(quantity_of(&single_device_tree(Some(-3), None), "P1"), baseline);
    assert_eq!(quantity_of(&single_device_tree(None, None), "P1"), baseline);
}

#[test]
fn cascading_delete_is_idempotent() {
    let tree = common::hotel();
    let once = remove_catalog_reference(&tree, CatalogKind::Product, "P1");
    let twice = remove_catalog_reference(&once, CatalogKind::Product, "P1");
    assert_eq!(twice, once);
    assert!(collect_assigned_items(&once, &InMemoryCatalog::new())
        .product("P1")
        .is_none());
}

#[test]
fn aggregation_is_deterministic() {
    let tree = common::hotel();
    let catalog = InMemoryCatalog::new();
    assert_eq!(
        collect_assigned_items(&tree, &catalog),
        collect_assigned_items(&tree, &catalog)
    );
}

#[test]
fn hotel_rollup_sums_every_location() {
    let rollup = collect_assigned_items(&common::hotel(), &InMemoryCatalog::new());

    let p1 = rollup.product("P1").unwrap();
    assert_eq!(p1.quantity, 1 + 1 + 6);
    assert_eq!(
        p1.locations,
        vec![
            "HQ / Central Rack: MDF / Switch Core-1",
            "HQ / Floor 1 / Office / Device Phone",
            "HQ / Floor 2 / Guest room / Device AP (x6)",
        ]
    );
    assert_eq!(rollup.service("S1").map(|r| r.quantity), Some(6));
}

#[test]
fn same_product_in_central_rack_and_room_merges() {
    let mut b = building("b1", "HQ");
    let mut mdf = Rack::new("MDF");
    let mut core = switch("sw1", "Core");
    core.assignments.upsert_product("P1", 1);
    mdf.switches.push(core);
    b.central_rack = Some(mdf);

    b.floors.push(floor("f1", "Floor 1", 1));
    let mut second = floor("f2", "Floor 2", 2);
    let mut r = room("r1", "Room 201");
    let mut d = device("d1", "AP");
    d.assignments.upsert_product("P1", 1);
    r.devices.push(d);
    second.rooms.push(r);
    b.floors.push(second);

    let rollup = collect_assigned_items(&[b], &InMemoryCatalog::new());
    assert_eq!(rollup.products.len(), 1);
    assert_eq!(rollup.products[0].quantity, 2);
    assert_eq!(rollup.products[0].locations.len(), 2);
}

#[test]
fn floor_racks_use_floor_multiplier() {
    let mut b = building("b1", "HQ");
    let mut f = floor("f1", "Typical", 3).typical(5);
    let mut idf = Rack::new("IDF");
    let mut access = switch("sw", "Access");
    access.assignments.upsert_product("SW-48", 2);
    idf.switches.push(access);
    f.racks.push(idf);
    b.floors.push(f);

    let rollup = collect_assigned_items(&[b], &InMemoryCatalog::new());
    let record = rollup.product("SW-48").unwrap();
    assert_eq!(record.quantity, 10);
    assert_eq!(record.locations, vec!["HQ / Typical / Rack: IDF / Switch Access (x5)"]);
}

#[test]
fn central_rack_then_floor_racks_then_rooms() {
    let mut b = building("b1", "HQ");
    let mut f = floor("f1", "Floor 1", 1);

    // Room is filled in first so the order below comes from traversal alone.
    let mut office = room("r1", "Office");
    let mut phone = device("d1", "Phone");
    phone.assignments.upsert_product("B", 1);
    office.devices.push(phone);
    f.rooms.push(office);

    let mut idf = Rack::new("IDF");
    let mut access = switch("sw2", "Access");
    access.assignments.upsert_product("A", 1);
    idf.switches.push(access);
    f.racks.push(idf);
    b.floors.push(f);

    let mut mdf = Rack::new("MDF");
    let mut core = switch("sw1", "Core");
    core.assignments.upsert_product("C", 1);
    mdf.switches.push(core);
    b.central_rack = Some(mdf);

    let rollup = collect_assigned_items(&[b], &InMemoryCatalog::new());
    let ids: Vec<&str> = rollup.products.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
}
