//! Terrain kinds and their static attributes.
//!
//! `TerrainType` is a closed tag; everything it "carries" (colors, weights,
//! affinities) lives in exhaustive matches, so an incomplete table is a
//! compile error rather than a startup failure.

/// The six terrain kinds, in generation weighting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainType {
    Plains,
    Forest,
    Hills,
    Mountains,
    Water,
    Desert,
}

impl TerrainType {
    /// All kinds in declared order. Weighted selection iterates this order,
    /// so it is part of the determinism contract.
    pub const ALL: [TerrainType; 6] = [
        TerrainType::Plains,
        TerrainType::Forest,
        TerrainType::Hills,
        TerrainType::Mountains,
        TerrainType::Water,
        TerrainType::Desert,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            TerrainType::Plains => "Plains",
            TerrainType::Forest => "Forest",
            TerrainType::Hills => "Hills",
            TerrainType::Mountains => "Mountains",
            TerrainType::Water => "Water",
            TerrainType::Desert => "Desert",
        }
    }

    /// Map display color (RGB).
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            TerrainType::Plains => (144, 238, 144),
            TerrainType::Forest => (34, 139, 34),
            TerrainType::Hills => (205, 133, 63),
            TerrainType::Mountains => (139, 115, 85),
            TerrainType::Water => (70, 130, 180),
            TerrainType::Desert => (244, 164, 96),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            TerrainType::Plains => "Flat grasslands suitable for travel",
            TerrainType::Forest => "Dense woodland with abundant resources",
            TerrainType::Hills => "Rolling hills with moderate elevation",
            TerrainType::Mountains => "Towering peaks difficult to traverse",
            TerrainType::Water => "Lakes and rivers providing fresh water",
            TerrainType::Desert => "Arid wasteland with scarce resources",
        }
    }

    /// Base generation weight, before neighbor influence. Sums to 100.
    pub const fn base_weight(self) -> u32 {
        match self {
            TerrainType::Plains => 30,
            TerrainType::Forest => 25,
            TerrainType::Hills => 20,
            TerrainType::Mountains => 10,
            TerrainType::Water => 10,
            TerrainType::Desert => 5,
        }
    }

    /// Movement cost per hex entered. `None` means impassable on foot.
    pub const fn movement_cost(self) -> Option<f64> {
        match self {
            TerrainType::Plains => Some(1.0),
            TerrainType::Forest => Some(1.5),
            TerrainType::Hills => Some(2.0),
            TerrainType::Mountains => Some(3.0),
            TerrainType::Water => None,
            TerrainType::Desert => Some(1.5),
        }
    }

    /// Parse a persisted terrain name (case-insensitive). Unknown names
    /// return `None`; callers decide whether that is an error or an
    /// override to ignore.
    pub fn from_name(name: &str) -> Option<TerrainType> {
        TerrainType::ALL
            .into_iter()
            .find(|t| t.display_name().eq_ignore_ascii_case(name))
    }

    /// Geographic affinity factor: how strongly a `neighbor` terrain pulls
    /// a `candidate` terrain next to it. Forests cluster, mountains chain,
    /// deserts repel everything wet.
    pub const fn affinity(neighbor: TerrainType, candidate: TerrainType) -> f64 {
        use TerrainType::*;
        match neighbor {
            Plains => match candidate {
                Plains => 1.5,
                Forest => 1.2,
                Hills => 1.0,
                Mountains => 0.3,
                Water => 1.0,
                Desert => 0.7,
            },
            Forest => match candidate {
                Plains => 1.0,
                Forest => 2.0,
                Hills => 1.3,
                Mountains => 0.5,
                Water => 1.5,
                Desert => 0.1,
            },
            Hills => match candidate {
                Plains => 0.8,
                Forest => 1.0,
                Hills => 1.5,
                Mountains => 2.0,
                Water => 0.6,
                Desert => 0.4,
            },
            Mountains => match candidate {
                Plains => 0.2,
                Forest => 0.5,
                Hills => 2.0,
                Mountains => 2.5,
                Water => 0.8,
                Desert => 0.3,
            },
            Water => match candidate {
                Plains => 1.2,
                Forest => 1.5,
                Hills => 0.5,
                Mountains => 0.8,
                Water => 2.0,
                Desert => 0.1,
            },
            Desert => match candidate {
                Plains => 0.7,
                Forest => 0.1,
                Hills => 0.5,
                Mountains => 0.3,
                Water => 0.1,
                Desert => 2.5,
            },
        }
    }
}
