//! Static generation tables: settlement densities, per-terrain kind
//! weights, and the name component lists.
//!
//! All tables are total over their keys (or carry an explicit fallback),
//! so generation can never fail on a lookup.

use crate::settlement::SettlementType;
use crate::terrain::TerrainType;

/// Base settlement chance per hex, by terrain.
pub const fn settlement_chance(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Plains => 0.15,
        TerrainType::Forest => 0.08,
        TerrainType::Hills => 0.12,
        TerrainType::Mountains => 0.05,
        TerrainType::Water => 0.18, // shoreline and fishing settlements
        TerrainType::Desert => 0.02,
    }
}

/// Settlement kind weights by terrain. Order within each table is the
/// cumulative-selection order and must stay stable. Every terrain has an
/// entry (the enum is closed), so there is no fallback row.
pub const fn type_weights(terrain: TerrainType) -> &'static [(SettlementType, u32)] {
    use SettlementType::*;
    match terrain {
        TerrainType::Plains => &[
            (Farmstead, 35),
            (Hamlet, 25),
            (Village, 20),
            (Town, 8),
            (City, 2),
            (RuinsVillage, 10),
        ],
        TerrainType::Forest => &[
            (Farmstead, 15),
            (LoggingCamp, 25),
            (Hamlet, 15),
            (Village, 10),
            (Monastery, 8),
            (RuinsVillage, 15),
            (AncientRuins, 12),
        ],
        TerrainType::Hills => &[
            (Farmstead, 12),
            (Hamlet, 18),
            (Village, 20),
            (Town, 12),
            (Watchtower, 15),
            (MiningCamp, 15),
            (RuinsKeep, 8),
        ],
        TerrainType::Mountains => &[
            (MiningCamp, 35),
            (Monastery, 15),
            (Watchtower, 15),
            (Hamlet, 10),
            (RuinsKeep, 15),
            (AncientRuins, 10),
        ],
        TerrainType::Water => &[
            (Hamlet, 25),   // fishing villages
            (Village, 25),
            (Town, 25),     // port towns
            (City, 15),     // major ports
            (Watchtower, 10),
        ],
        TerrainType::Desert => &[
            (Hamlet, 40),   // oasis settlements
            (Monastery, 20),
            (RuinsVillage, 20),
            (AncientRuins, 20),
        ],
    }
}

/// Name prefixes keyed by terrain.
pub const fn terrain_prefixes(terrain: TerrainType) -> &'static [&'static str] {
    match terrain {
        TerrainType::Plains => &[
            "Green", "Golden", "Fair", "Old", "New", "Dead Man", "Dry", "Raining", "Thunder",
            "Bandit", "Broad", "Rich", "High", "Clear", "Tall", "Wide", "Long", "Open", "Great",
            "Boundless", "Saw", "Reed", "Thatch", "Wheat", "Barley", "Rye", "Grass", "Steppe",
            "Prairie", "Clover", "Heather", "Ash", "Oak", "Elm", "Alder", "Willow", "Beech",
            "Birch", "Maple", "Hazel", "Deer", "Hart", "Stag", "Elk", "Ox", "Bull", "Wolf",
            "Jackal", "Hound", "Hare", "Fox", "Snake", "Viper", "Serpent", "Lark", "Hawk",
            "Bison", "Horse", "Raven", "Crow", "East", "West", "North", "South", "Dawn",
            "Sunset", "Midday", "Star", "Sun", "Bright", "Blue", "Wind", "Storm", "Mana",
            "Withered", "Shadow", "Giant", "Fey", "Blood", "Ghost", "Wraith", "Traveler's",
            "Lost", "Forsaken",
        ],
        TerrainType::Forest => &[
            "Deep", "Dark", "Green", "Wild", "Hidden", "Lost", "Ancient", "Whispering",
            "Shadow", "Elder", "Wolf", "Boar", "Stag", "Hunter's", "Fey", "Spider", "Serpent",
            "Owl", "Raven", "Crow", "Thorn", "Briar", "Ash", "Oak", "Elm", "Alder", "Willow",
            "Beech", "Birch", "Maple", "Hazel", "Dead Man's", "Cursed", "Haunted", "Moon",
            "Star", "Sun", "Storm", "Misty", "Foggy", "Enchanted", "Dragon", "Goblin",
            "Bandit", "Witch", "Withered", "Gnarled", "Silent", "Burning", "Blood",
        ],
        TerrainType::Hills => &[
            "High", "Stone", "Wind", "Rolling", "Bright", "Crown", "Eagle", "Hawk", "Raven",
            "Wolf", "Fox", "Boar", "Deer", "Stag", "Serpent", "Dragon", "Storm", "Thunder",
            "Sunset", "Dawn", "Moon", "Star", "Grass", "Heather", "Briar", "Thorn", "Ash",
            "Oak", "Elm", "Willow", "Beech", "Birch", "Maple", "Hazel", "Iron", "Silver",
            "Gold", "Copper", "Bronze", "Cursed", "Lost", "Haunted", "Fey", "Withered",
            "Traveler's", "Old", "New",
        ],
        TerrainType::Mountains => &[
            "Iron", "Stone", "Peak", "Ridge", "Snow", "Storm", "Dragon", "Thunder",
            "Lightning", "Cloud", "Grim", "Dark", "Shadow", "Frost", "Ice", "Frozen", "Fire",
            "Ash", "Blood", "Skull", "Dead Man's", "Cursed", "Haunted", "Dwarven", "Giant",
            "Goblin", "Orc", "Troll", "Wraith", "Wolf", "Eagle", "Hawk", "Raven", "Vulture",
            "Serpent", "Wyrm", "Silver", "Gold", "Copper", "Crystal", "Gem", "Star", "Moon",
            "Sun", "Dawn", "Dusk", "Forsaken", "Broken", "Shattered", "Withered", "Ancient",
        ],
        TerrainType::Water => &[
            "River", "Lake", "Ford", "Bridge", "Harbor", "Bay", "Shore", "Salt", "Deep",
            "Dark", "Blue", "Green", "Black", "Silver", "Golden", "Crystal", "Frozen",
            "Storm", "Thunder", "Lightning", "Whirlpool", "Foam", "Mist", "Fog", "Moon",
            "Sun", "Star", "Tide", "Wave", "Dragon", "Serpent", "Kraken", "Leviathan",
            "Mermaid's", "Siren's", "Pirate's", "Fisher's", "Dead Man's", "Cursed",
            "Haunted", "Lost", "Forgotten", "Ancient", "Fey", "Mana", "Withered",
        ],
        TerrainType::Desert => &[
            "Sand", "Sun", "Dry", "Lost", "Mirage", "Bone", "Dune", "Ash", "Scorch", "Red",
            "Glass", "Dust", "Stone", "Salt", "Cracked", "Burning", "Blistering", "Dead",
            "Forsaken", "Cursed", "Haunted", "Phantom", "Ghost", "Wraith", "Nomad's",
            "Traveler's", "Lost Man's", "Serpent", "Scorpion", "Viper", "Jackal", "Hyena",
            "Buzzard", "Oasis", "Well", "Spring", "Moon", "Sunset", "Dawn", "Star",
            "Ancient", "Withered", "Shattered", "Bleached", "Bonewhite",
        ],
    }
}

/// Name suffixes keyed by terrain.
pub const fn terrain_suffixes(terrain: TerrainType) -> &'static [&'static str] {
    match terrain {
        TerrainType::Plains => &[
            "field", "meadow", "haven", "vale", "stead", "moor", "lea", "flat", "pasture",
            "heath", "acre", "croft", "down", "plain", "steppe", "wold", "reach", "ward",
            "bank", "steadings", "pastoral", "farm", "lands", "commons", "ham", "wick",
            "bury", "holm", "gard", "steadholm", "holt", "staddle", "glebe", "hollow",
            "park", "ranch", "grange", "manor", "run", "steadwell", "town", "steadgate",
            "low", "rise", "furlong", "outlands", "fen", "knoll", "brae",
        ],
        TerrainType::Forest => &[
            "wood", "grove", "glade", "hollow", "thicket", "brake", "shaw", "copse", "holt",
            "spinney", "boscage", "chase", "frith", "den", "hurst", "shawden", "glens",
            "shade", "clearing", "stand", "timber", "wilds", "warren", "burrow", "dell",
            "fen", "marshwood", "briar", "thornwood", "hedge", "mire", "holtwood", "lair",
            "fallow", "watch", "fastness", "woodlands", "brambles", "overgrowth", "roots",
            "underwood", "deepwood", "sylva", "groveland", "twilight", "sward", "feywood",
            "elderwood",
        ],
        TerrainType::Hills => &[
            "hill", "ridge", "crest", "tor", "mount", "down", "fell", "barrow", "knoll",
            "tump", "brae", "bluff", "escarp", "rise", "heights", "slopes", "crag", "ledge",
            "overlook", "scaur", "rock", "stones", "head", "copsehill", "dun", "fort",
            "butte", "mound", "knap", "cairn", "watch", "seat", "brow", "slope", "cliff",
            "perch", "spine", "outcrop", "ridgeway", "upland", "heaf", "drift", "uplift",
            "ledgehold", "wildrise", "torfell", "ridgehold", "barrows", "summit",
        ],
        TerrainType::Mountains => &[
            "peak", "fell", "crag", "stone", "hold", "gate", "pass", "spire", "pinnacle",
            "ridge", "summit", "crown", "crest", "horn", "head", "fang", "tooth",
            "spiregate", "tor", "berg", "rock", "buttress", "fastness", "fort", "bastion",
            "citadel", "keep", "dome", "spirehold", "spirefell", "highlands", "palisade",
            "spirewall", "rampart", "overlook", "ridgekeep", "barrier", "heights", "massif",
            "wildpeak", "gatecrag", "mount", "spirestone", "ridgefort", "stonewall",
            "frosthold", "stormpeak", "dragonspire", "ancienthold",
        ],
        TerrainType::Water => &[
            "ford", "bridge", "port", "bay", "crossing", "mouth", "dock", "wharf", "harbor",
            "haven", "jetty", "quay", "marsh", "lagoon", "estuary", "delta", "inlet",
            "gulf", "loch", "mere", "brook", "stream", "run", "falls", "cascade", "spring",
            "fountain", "rapids", "shoals", "pool", "reach", "channel", "strait", "current",
            "deep", "shallows", "sands", "beach", "shore", "cliffs", "isle", "islet",
            "atoll", "reef", "sound", "flow", "wash", "drift",
        ],
        TerrainType::Desert => &[
            "well", "springs", "rest", "sanctuary", "refuge", "shade", "rock", "gulch",
            "dune", "waste", "expanse", "flat", "salt", "basin", "sink", "pan", "gorge",
            "bluff", "cliff", "ridge", "hearth", "outcrop", "oasis", "mirage", "mirrors",
            "winds", "sunlands", "glass", "burn", "crust", "sands", "dunes", "stone",
            "drylands", "steppe", "arid", "lowlands", "scarp", "barren", "scour", "ravine",
            "scrub", "drought", "ash", "ashes", "hollow", "scar", "spire", "fane", "bones",
        ],
    }
}

/// Kind-specific name suffixes. Ruin kinds have none -- they always take a
/// terrain suffix.
pub const fn settlement_suffixes(kind: SettlementType) -> Option<&'static [&'static str]> {
    match kind {
        SettlementType::Farmstead => Some(&[
            "Farm", "Stead", "Homestead", "Ranch", "Croft", "Holding", "Pasture", "Barn",
            "Fold", "Paddock", "Stable", "Grange", "Byre", "Outstead", "Tillage", "Dairy",
            "Fieldstead", "Sheepfold", "Haystead", "Granary", "Millstead", "Thresh",
            "Piggeries", "Manorstead", "Oxstead", "Cartstead", "Ploughstead", "Cottage",
            "Lodge", "Lean-to", "Ham", "Acrestead", "Yard", "Garth", "Byfarm", "Longstead",
            "Roodstead", "Shieling", "Shedstead", "Hearthstead", "Penstead", "Hovel",
            "House", "Hallstead", "Kraal", "Outpost", "Steading", "Stableyard",
        ]),
        SettlementType::Hamlet => Some(&[
            "Hamlet", "Grove", "Glen", "Corner", "Thorp", "Hame", "Nook", "Clachan",
            "Crook", "Cot", "Cote", "Fold", "End", "Row", "Cross", "Wick", "Wich", "Heath",
            "Lea", "Brook", "Beck", "Hollow", "Sted", "Ness", "Croft", "Barrow", "Bend",
            "Dale", "Holm", "Stead", "Yard", "Pightle", "Hill", "Lane", "Mere", "Marsh",
            "Fen", "Mead", "Low", "Edge", "Green", "Drift", "Ridge", "Nest", "Shade",
            "Gate", "Leys", "Wood",
        ]),
        SettlementType::Village => Some(&[
            "Village", "Borough", "Green", "Commons", "Ton", "Sted", "Wick", "Worth",
            "Wich", "Ford", "Ham", "Ferry", "Market", "Yard", "Field", "Lea", "Thwaite",
            "Kirk", "Minster", "Ness", "Brook", "Beck", "Pool", "Well", "Cross", "Howe",
            "Row", "Hill", "Holt", "Shaw", "Wood", "Hatch", "Bridge", "Fell", "Barrow",
            "Stone", "Gate", "Wall", "Hall", "Stead", "Croft", "Holme", "Dale", "Down",
            "Bend", "Spring", "Burn", "Grange",
        ]),
        SettlementType::Town => Some(&[
            "Town", "Market", "Cross", "Mills", "Gate", "Bridge", "Ford", "Port", "Bay",
            "Harbor", "Yard", "Hall", "Square", "Circle", "Court", "Road", "Row", "Street",
            "Well", "Fountain", "Tower", "Keep", "Stone", "Wall", "Watch", "House",
            "Temple", "Church", "Guild", "Exchange", "Mint", "Bazaar", "Dock", "Quay",
            "Wharf", "Fort", "Castle", "Depot", "Granary", "Vault", "Barracks", "Arena",
            "Theatre", "Garden", "Manor", "Ward", "Quarter", "Plaza",
        ]),
        SettlementType::City => Some(&[
            "City", "Keep", "Hold", "Fortress", "Citadel", "Castle", "Bastion",
            "Stronghold", "Palisade", "Bulwark", "Dome", "Hall", "Tower", "Gate", "Spire",
            "Temple", "Shrine", "Cathedral", "Vault", "Forum", "Market", "Exchange",
            "Court", "Palace", "Sanctum", "Arena", "Theatre", "Colonnade", "Bridge",
            "Aqueduct", "Wall", "Arch", "Citadelgate", "Highhall", "Stonegate", "Keepgate",
            "Ward", "Quarter", "Circle", "Square", "Manor", "Guildhall", "Library",
            "Archive", "Observatory", "Monument", "Obelisk", "Colossus",
        ]),
        SettlementType::LoggingCamp => Some(&[
            "Camp", "Lodge", "Mill", "Clearing", "Cabin", "Hut", "Shanty", "Shack",
            "Bunkhouse", "Yard", "Depot", "Timberyard", "Sawpit", "Sawmill", "Stump",
            "Coppice", "Hold", "Hutment", "Lean-to", "Campstead", "Outcamp", "Logstead",
            "Woodpile", "Stockpile", "Millstead", "Fell", "Notch", "Grove", "Trailhead",
            "Firebreak", "Palisade", "Fort", "Gate", "Landing", "Dock", "Ramp", "Trestle",
            "Bridge", "Road", "Track", "Path", "Lumberyard", "Backcut", "Crosscut",
            "Shingle", "Chopstead", "Cleaver", "Splitter",
        ]),
        SettlementType::MiningCamp => Some(&[
            "Mine", "Quarry", "Delve", "Shaft", "Pit", "Tunnel", "Drift", "Stope",
            "Gallery", "Face", "Cut", "Diggings", "Spoil", "Tailings", "Heap", "Workings",
            "Forge", "Smelter", "Foundry", "Mint", "Orehouse", "Store", "Depot", "Camp",
            "Hollow", "Chasm", "Cleft", "Clough", "Crevasse", "Adits", "Cave", "Grotto",
            "Vault", "Chamber", "Hall", "Forgegate", "Hammer", "Anvil", "Smokeworks",
            "Ironworks", "Copperworks", "Goldstead", "Silverstead", "Coalpit", "Stonecut",
            "Rockbreak", "Orestead", "Deepstead",
        ]),
        SettlementType::Monastery => Some(&[
            "Abbey", "Monastery", "Priory", "Sanctuary", "Hermitage", "Chapel", "Cloister",
            "Shrine", "Temple", "Church", "Basilica", "Cathedral", "Convent", "Friary",
            "Oratory", "Minster", "Parish", "Chapterhouse", "Hospice", "Sacristy",
            "Sanctum", "Reliquary", "Hall", "Altar", "Crypt", "Catacomb", "Mausoleum",
            "Shrinehold", "Refuge", "Retreat", "Sanctuarygate", "Pilgrimage",
            "Processional", "Choir", "Choirhouse", "Liturgy", "Prayerhall", "Scriptorium",
            "Sacredwell", "Blessing", "Font", "Holywell", "Martyrstead", "Angelspire",
            "Saintstead", "Relicstead", "Reliquaryhall", "Penance",
        ]),
        SettlementType::Watchtower => Some(&[
            "Watch", "Tower", "Guard", "Beacon", "Keep", "Turret", "Spire", "Fort",
            "Fortlet", "Lookout", "Overlook", "Bastion", "Bulwark", "Outpost", "Signal",
            "Bell", "Drum", "Fire", "Torch", "Light", "Lighthouse", "Lantern", "Pharos",
            "Citadel", "Garrison", "Blockhouse", "Redoubt", "Palisade", "Stockade",
            "Wall", "Rampart", "Barbican", "Portcullis", "Gate", "Arch", "Gatehouse",
            "Fortress", "Guardhouse", "Barracks", "Defile", "Sentinel", "Cairn",
            "Monolith", "Obelisk", "Marker", "Pillar", "Post", "Stone",
        ]),
        SettlementType::RuinsVillage
        | SettlementType::RuinsKeep
        | SettlementType::RuinsTower
        | SettlementType::AncientRuins => None,
    }
}
