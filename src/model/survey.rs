use super::Building;
use serde::{Deserialize, Serialize};

/// One persisted survey document: the building tree plus a little metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

impl Survey {
    #[must_use]
    pub fn total_floors(&self) -> usize {
        self.buildings.iter().map(|b| b.floors.len()).sum()
    }

    #[must_use]
    pub fn total_leaves(&self) -> usize {
        self.buildings
            .iter()
            .map(|b| {
                let central = b.central_rack.as_ref().map_or(0, |r| r.leaves().count());
                let floors: usize = b
                    .floors
                    .iter()
                    .map(|f| {
                        f.racks.iter().map(|r| r.leaves().count()).sum::<usize>()
                            + f.rooms.iter().map(|r| r.leaves().count()).sum::<usize>()
                    })
                    .sum();
                central + floors
            })
            .sum()
    }
}
