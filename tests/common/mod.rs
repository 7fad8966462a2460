#![allow(dead_code)]

use site_survey::model::{Building, Device, Floor, NetworkSwitch, Outlet, Rack, Room};

pub fn device(id: &str, name: &str) -> Device {
    Device {
        id: id.to_string(),
        name: name.to_string(),
        ..Device::default()
    }
}

pub fn switch(id: &str, name: &str) -> NetworkSwitch {
    NetworkSwitch {
        id: id.to_string(),
        name: name.to_string(),
        ..NetworkSwitch::default()
    }
}

pub fn outlet(id: &str, label: &str) -> Outlet {
    Outlet {
        id: id.to_string(),
        label: label.to_string(),
        ..Outlet::default()
    }
}

pub fn room(id: &str, name: &str) -> Room {
    let mut room = Room::new(name);
    room.id = id.to_string();
    room
}

pub fn floor(id: &str, name: &str, level: i32) -> Floor {
    let mut floor = Floor::new(name, level);
    floor.id = id.to_string();
    floor
}

pub fn building(id: &str, name: &str) -> Building {
    let mut building = Building::new(name);
    building.id = id.to_string();
    building
}

/// HQ with a central rack switch and two floors:
/// - "Floor 1" (f1): one room with an outlet and a device holding P1 x1
/// - "Floor 2" (f2, typical x2): room r2 (typical x3) with a device holding P1 x1 and S1 x1
pub fn hotel() -> Vec<Building> {
    let mut hq = building("b1", "HQ");

    let mut central = Rack::new("MDF");
    central.id = "mdf".to_string();
    let mut core = switch("sw1", "Core-1");
    core.assignments.upsert_product("P1", 1);
    central.switches.push(core);
    hq.central_rack = Some(central);

    let mut first = floor("f1", "Floor 1", 1);
    let mut office = room("r1", "Office");
    office.outlets.push(outlet("o1", "Wall-1"));
    let mut phone = device("d1", "Phone");
    phone.assignments.upsert_product("P1", 1);
    office.devices.push(phone);
    first.rooms.push(office);

    let mut second = floor("f2", "Floor 2", 2).typical(2);
    let mut guest = room("r2", "Guest room").typical(3);
    let mut ap = device("d2", "AP");
    ap.assignments.upsert_product("P1", 1);
    ap.assignments.upsert_service("S1", 1, None);
    guest.devices.push(ap);
    second.rooms.push(guest);

    hq.floors.push(first);
    hq.floors.push(second);
    vec![hq]
}
