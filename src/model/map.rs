//! Pretty names for Hell Let Loose map identifiers.

const RESTART_SUFFIX: &str = "_RESTART";

const MAP_NAMES: &[(&str, &str)] = &[
    ("foy_warfare", "Foy"),
    ("stmariedumont_warfare", "SMDM"),
    ("hurtgenforest_warfare", "Hurtgen"),
    ("hurtgenforest_warfare_V2", "Hurtgen"),
    ("utahbeach_warfare", "Utah"),
    ("omahabeach_offensive_us", "Off. Omaha"),
    ("stmereeglise_warfare", "SME"),
    ("stmereeglise_offensive_ger", "Off. SME (Ger)"),
    ("foy_offensive_ger", "Off. Foy"),
    ("purpleheartlane_warfare", "PHL"),
    ("purpleheartlane_offensive_us", "Off. PHL"),
    ("hill400_warfare", "Hill 400"),
    ("hill400_offensive_US", "Off. Hill 400"),
    ("stmereeglise_offensive_us", "Off. SME (US)"),
    ("carentan_warfare", "Carentan"),
    ("carentan_offensive_us", "Off. Carentan"),
    ("hurtgenforest_offensive_ger", "Off. Hurtgen (Ger)"),
    ("hurtgenforest_offensive_US", "Off. Hurtgen (US)"),
    ("utahbeach_offensive_us", "Off. Utah (US)"),
    ("utahbeach_offensive_ger", "Off. Utah (GER)"),
];

/// Translates a raw map name from the map history into its display name.
///
/// The `_RESTART` marker is removed first. Unknown maps are returned unchanged.
pub fn pretty_map_name(raw: &str) -> String {
    let name = raw.replace(RESTART_SUFFIX, "");

    MAP_NAMES
        .iter()
        .find(|(id, _)| *id == name)
        .map(|(_, pretty)| pretty.to_string())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_maps() {
        assert_eq!(pretty_map_name("foy_warfare"), "Foy");
        assert_eq!(pretty_map_name("hill400_offensive_US"), "Off. Hill 400");
    }

    #[test]
    fn strips_restart_marker() {
        assert_eq!(pretty_map_name("carentan_warfare_RESTART"), "Carentan");
    }

    #[test]
    fn keeps_unknown_maps() {
        assert_eq!(pretty_map_name("kursk_warfare"), "kursk_warfare");
        assert_eq!(pretty_map_name("kursk_warfare_RESTART"), "kursk_warfare");
    }
}
