//! Settlement kinds and the per-hex settlement record.

use crate::terrain::TerrainType;

/// The closed set of settlement and ruin kinds.
///
/// Ruin kinds are ordinary variants distinguished only by their `[0, 0]`
/// population range; `is_ruins` is defined by that range, not by a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementType {
    Farmstead,
    Hamlet,
    Village,
    Town,
    City,
    LoggingCamp,
    MiningCamp,
    Monastery,
    Watchtower,
    RuinsVillage,
    RuinsKeep,
    RuinsTower,
    AncientRuins,
}

impl SettlementType {
    pub const ALL: [SettlementType; 13] = [
        SettlementType::Farmstead,
        SettlementType::Hamlet,
        SettlementType::Village,
        SettlementType::Town,
        SettlementType::City,
        SettlementType::LoggingCamp,
        SettlementType::MiningCamp,
        SettlementType::Monastery,
        SettlementType::Watchtower,
        SettlementType::RuinsVillage,
        SettlementType::RuinsKeep,
        SettlementType::RuinsTower,
        SettlementType::AncientRuins,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            SettlementType::Farmstead => "Farmstead",
            SettlementType::Hamlet => "Hamlet",
            SettlementType::Village => "Village",
            SettlementType::Town => "Town",
            SettlementType::City => "City",
            SettlementType::LoggingCamp => "Logging Camp",
            SettlementType::MiningCamp => "Mining Camp",
            SettlementType::Monastery => "Monastery",
            SettlementType::Watchtower => "Watchtower",
            SettlementType::RuinsVillage => "Ruined Village",
            SettlementType::RuinsKeep => "Ruined Keep",
            SettlementType::RuinsTower => "Ruined Tower",
            SettlementType::AncientRuins => "Ancient Ruins",
        }
    }

    /// Inclusive population range. Ruin kinds are `(0, 0)`.
    pub const fn population_range(self) -> (u32, u32) {
        match self {
            SettlementType::Farmstead => (5, 30),
            SettlementType::Hamlet => (30, 150),
            SettlementType::Village => (150, 800),
            SettlementType::Town => (800, 3000),
            SettlementType::City => (3000, 15000),
            SettlementType::LoggingCamp => (15, 60),
            SettlementType::MiningCamp => (20, 100),
            SettlementType::Monastery => (10, 80),
            SettlementType::Watchtower => (5, 25),
            SettlementType::RuinsVillage
            | SettlementType::RuinsKeep
            | SettlementType::RuinsTower
            | SettlementType::AncientRuins => (0, 0),
        }
    }

    /// A ruin is exactly a kind whose population range is `[0, 0]`.
    pub const fn is_ruins(self) -> bool {
        self.population_range().1 == 0
    }

    pub const fn description(self) -> &'static str {
        match self {
            SettlementType::Farmstead => "An isolated farm working the surrounding land",
            SettlementType::Hamlet => "A cluster of homes too small for a market",
            SettlementType::Village => "A village with its own green and trades",
            SettlementType::Town => "A market town drawing trade from nearby hexes",
            SettlementType::City => "A walled city dominating the region",
            SettlementType::LoggingCamp => "A work camp felling and milling timber",
            SettlementType::MiningCamp => "A work camp digging ore from the earth",
            SettlementType::Monastery => "A secluded religious community",
            SettlementType::Watchtower => "A garrisoned tower watching the frontier",
            SettlementType::RuinsVillage => "The overgrown remains of a village",
            SettlementType::RuinsKeep => "A crumbling fortification, long abandoned",
            SettlementType::RuinsTower => "A toppled tower picked over by scavengers",
            SettlementType::AncientRuins => "Remnants of a civilization lost to memory",
        }
    }

    /// Terrains this kind is typically generated in.
    pub const fn preferred_terrains(self) -> &'static [TerrainType] {
        use TerrainType::*;
        match self {
            SettlementType::Farmstead => &[Plains, Forest, Hills],
            SettlementType::Hamlet => &[Plains, Forest, Hills, Mountains, Water, Desert],
            SettlementType::Village => &[Plains, Forest, Hills, Water],
            SettlementType::Town => &[Plains, Hills, Water],
            SettlementType::City => &[Plains, Water],
            SettlementType::LoggingCamp => &[Forest],
            SettlementType::MiningCamp => &[Hills, Mountains],
            SettlementType::Monastery => &[Forest, Mountains, Desert],
            SettlementType::Watchtower => &[Hills, Mountains, Water],
            SettlementType::RuinsVillage => &[Plains, Forest, Desert],
            SettlementType::RuinsKeep => &[Hills, Mountains],
            SettlementType::RuinsTower => &[Hills, Mountains],
            SettlementType::AncientRuins => &[Forest, Mountains, Desert],
        }
    }

    /// Single-character map symbol.
    pub const fn map_symbol(self) -> char {
        match self {
            SettlementType::Farmstead => 'f',
            SettlementType::Hamlet => 'h',
            SettlementType::Village => 'v',
            SettlementType::Town => 't',
            SettlementType::City => 'C',
            SettlementType::LoggingCamp => 'L',
            SettlementType::MiningCamp => 'M',
            SettlementType::Monastery => 'm',
            SettlementType::Watchtower => 'w',
            SettlementType::RuinsVillage | SettlementType::RuinsKeep | SettlementType::RuinsTower => 'r',
            SettlementType::AncientRuins => 'R',
        }
    }

    /// Parse a persisted kind name (case-insensitive).
    pub fn from_name(name: &str) -> Option<SettlementType> {
        SettlementType::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(name))
    }
}

/// The generated (or edited) settlement occupying a hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementData {
    pub settlement_type: SettlementType,
    /// World-unique after the `World` disambiguates it; raw from the generator.
    pub name: String,
    pub population: u32,
    /// Wealth rating, 1 (destitute) to 5 (prosperous).
    pub prosperity_level: u8,
    pub special_features: Vec<String>,
    pub notable_npcs: Vec<String>,
    pub trade_goods: Vec<String>,
    pub defenses: Vec<String>,
}

impl SettlementData {
    pub fn new(settlement_type: SettlementType) -> Self {
        Self {
            settlement_type,
            name: String::new(),
            population: 0,
            prosperity_level: 3,
            special_features: Vec::new(),
            notable_npcs: Vec::new(),
            trade_goods: Vec::new(),
            defenses: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruin_invariant() {
        for t in SettlementType::ALL {
            let (min, max) = t.population_range();
            assert_eq!(t.is_ruins(), min == 0 && max == 0, "{t:?}");
            assert!(min <= max, "{t:?}");
        }
    }

    #[test]
    fn exactly_four_ruin_kinds() {
        let ruins = SettlementType::ALL.iter().filter(|t| t.is_ruins()).count();
        assert_eq!(ruins, 4);
    }

    #[test]
    fn from_name_round_trips() {
        for t in SettlementType::ALL {
            assert_eq!(SettlementType::from_name(t.display_name()), Some(t));
        }
        assert_eq!(SettlementType::from_name("Metropolis"), None);
    }
}
