use serde::Serialize;

/// Outfield shape of a formation (the goalkeeper is implicit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormationShape {
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
}

/// A named formation with its eleven starting slots, from goalkeeper
/// forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Formation {
    pub name: &'static str,
    pub shape: FormationShape,
    pub positions: [&'static str; 11],
}

const fn formation(
    name: &'static str,
    defenders: u8,
    midfielders: u8,
    forwards: u8,
    positions: [&'static str; 11],
) -> Formation {
    Formation {
        name,
        shape: FormationShape {
            defenders,
            midfielders,
            forwards,
        },
        positions,
    }
}

/// The supported formations. The first entry is the default for unknown
/// names.
pub const FORMATIONS: [Formation; 11] = [
    formation("4-3-3", 4, 3, 3, ["GK", "RB", "CB", "CB", "LB", "CDM", "CM", "CM", "RW", "ST", "LW"]),
    formation("4-4-2", 4, 4, 2, ["GK", "RB", "CB", "CB", "LB", "RM", "CM", "CM", "LM", "ST", "ST"]),
    formation("4-2-3-1", 4, 5, 1, ["GK", "RB", "CB", "CB", "LB", "CDM", "CDM", "CAM", "RW", "LW", "ST"]),
    formation("3-5-2", 3, 5, 2, ["GK", "CB", "CB", "CB", "RWB", "LWB", "CM", "CM", "CM", "ST", "ST"]),
    formation("3-4-3", 3, 4, 3, ["GK", "CB", "CB", "CB", "RWB", "LWB", "CM", "CM", "RW", "ST", "LW"]),
    formation("5-3-2", 5, 3, 2, ["GK", "RB", "CB", "CB", "CB", "LB", "CM", "CM", "CM", "ST", "ST"]),
    formation("4-1-2-1-2", 4, 4, 2, ["GK", "RB", "CB", "CB", "LB", "CDM", "CM", "CM", "CAM", "ST", "ST"]),
    formation("4-3-1-2", 4, 4, 2, ["GK", "RB", "CB", "CB", "LB", "CM", "CM", "CM", "CAM", "ST", "ST"]),
    formation("3-4-1-2", 3, 5, 2, ["GK", "CB", "CB", "CB", "RWB", "LWB", "CM", "CM", "CAM", "ST", "ST"]),
    formation("4-5-1", 4, 5, 1, ["GK", "RB", "CB", "CB", "LB", "RM", "CM", "CM", "CM", "LM", "ST"]),
    formation("5-4-1", 5, 4, 1, ["GK", "RB", "CB", "CB", "CB", "LB", "RM", "CM", "CM", "LM", "ST"]),
];

/// Look up a formation by name, falling back to 4-3-3.
pub fn find_formation(name: &str) -> &'static Formation {
    FORMATIONS
        .iter()
        .find(|formation| formation.name == name)
        .unwrap_or(&FORMATIONS[0])
}
