//! Region generation
//!
//! Regions are simple structured entities drawn from fixed trait tables.
//! They do not participate in the mask template pipeline; they share only
//! the seeded-RNG contract, with every region owning its own stream
//! derived from `(world seed, "region", index)`.

use serde::{Deserialize, Serialize};

use crate::distribution::WeightedPool;
use crate::rng::SeededRng;

/// Dominant landform of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Coast,
    Forest,
    Steppe,
    Highlands,
    Marsh,
    Desert,
    Tundra,
    Valley,
}

impl Biome {
    pub fn name(&self) -> &'static str {
        match self {
            Biome::Coast => "Coast",
            Biome::Forest => "Forest",
            Biome::Steppe => "Steppe",
            Biome::Highlands => "Highlands",
            Biome::Marsh => "Marsh",
            Biome::Desert => "Desert",
            Biome::Tundra => "Tundra",
            Biome::Valley => "Valley",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Biome::Coast,
            Biome::Forest,
            Biome::Steppe,
            Biome::Highlands,
            Biome::Marsh,
            Biome::Desert,
            Biome::Tundra,
            Biome::Valley,
        ]
    }

    /// Climates this landform supports.
    fn climates(&self) -> &'static [Climate] {
        match self {
            Biome::Coast => &[Climate::Temperate, Climate::Warm, Climate::Humid],
            Biome::Forest => &[Climate::Temperate, Climate::Cold, Climate::Humid],
            Biome::Steppe => &[Climate::Temperate, Climate::Cold, Climate::Arid],
            Biome::Highlands => &[Climate::Cold, Climate::Frigid, Climate::Temperate],
            Biome::Marsh => &[Climate::Humid, Climate::Temperate, Climate::Warm],
            Biome::Desert => &[Climate::Arid, Climate::Warm],
            Biome::Tundra => &[Climate::Frigid, Climate::Cold],
            Biome::Valley => &[Climate::Temperate, Climate::Warm],
        }
    }

    /// Base travel difficulty before the per-region variance roll.
    fn base_travel_cost(&self) -> u32 {
        match self {
            Biome::Coast => 2,
            Biome::Forest => 4,
            Biome::Steppe => 3,
            Biome::Highlands => 6,
            Biome::Marsh => 6,
            Biome::Desert => 5,
            Biome::Tundra => 7,
            Biome::Valley => 2,
        }
    }
}

/// Prevailing climate of a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Frigid,
    Cold,
    Temperate,
    Warm,
    Arid,
    Humid,
}

impl Climate {
    pub fn name(&self) -> &'static str {
        match self {
            Climate::Frigid => "Frigid",
            Climate::Cold => "Cold",
            Climate::Temperate => "Temperate",
            Climate::Warm => "Warm",
            Climate::Arid => "Arid",
            Climate::Humid => "Humid",
        }
    }
}

/// Nature of a standing tension with a neighboring faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TensionKind {
    Rivalry,
    TradeDispute,
    BloodFeud,
    UneasyTruce,
    BorderRaids,
}

impl TensionKind {
    pub fn name(&self) -> &'static str {
        match self {
            TensionKind::Rivalry => "Rivalry",
            TensionKind::TradeDispute => "Trade Dispute",
            TensionKind::BloodFeud => "Blood Feud",
            TensionKind::UneasyTruce => "Uneasy Truce",
            TensionKind::BorderRaids => "Border Raids",
        }
    }
}

/// A standing tension edge toward a known faction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TensionEdge {
    pub faction: String,
    pub kind: TensionKind,
}

/// One generated region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub biome: Biome,
    pub climate: Climate,
    pub symbols: Vec<String>,
    pub customs: Vec<String>,
    pub taboos: Vec<String>,
    pub tensions: Vec<TensionEdge>,
    pub travel_cost: u32,
}

// ============================================================================
// TRAIT TABLES
// ============================================================================

const NAME_PREFIXES: &[&str] = &[
    "Ashen", "Gray", "Thorn", "Raven", "Ember", "Frost", "Salt", "Briar",
    "Hollow", "Iron", "Mist", "Stone", "Weather", "Black", "Elder", "Low",
];

const NAME_SUFFIXES: &[&str] = &[
    "mark", "reach", "fell", "vale", "moor", "shore", "hold", "march",
    "barrow", "ford", "heath", "wick", "strand", "down", "gate", "mere",
];

const SYMBOLS: &[&str] = &[
    "a leaning watchtower no one claims",
    "standing stones older than the oldest grave",
    "a river that runs red after storms",
    "the skull of something too large to bury",
    "a shrine whose god's name is worn away",
    "an iron bell that rings before fog",
    "terraces cut by forgotten hands",
    "a dead tree hung with oath-ribbons",
    "a causeway drowned at every high tide",
    "cairns that travelers add one stone to",
];

const CUSTOMS: &[&str] = &[
    "guests eat first and name their dead",
    "bargains are sealed by exchanging knife handles",
    "the year's first catch is returned to the water",
    "children are named only after their first winter",
    "doors are painted when a debt is owed",
    "strangers must carry salt to cross a threshold",
    "songs are traded like coin at the night market",
    "the eldest widow keeps the village calendar",
    "no fire may die on the feast of the founders",
    "faces are veiled while mourning lasts",
];

const TABOOS: &[&str] = &[
    "whistling after dark calls the hill-wind",
    "no iron may touch the burial ground",
    "naming the drowned at sea invites them aboard",
    "counting livestock aloud curses the herd",
    "crossing a threshold left-foot-first offends the house",
    "spilled milk must be sung over before sunset",
    "no one builds on ground where lightning struck",
    "a broken mask must be buried, never burned",
];

/// Chance that a known faction produces a tension edge.
const TENSION_CHANCE: f64 = 0.4;

fn tension_kinds() -> WeightedPool<TensionKind> {
    WeightedPool::from_pairs(&[
        (TensionKind::Rivalry, 3.0),
        (TensionKind::TradeDispute, 2.5),
        (TensionKind::UneasyTruce, 2.0),
        (TensionKind::BorderRaids, 1.5),
        (TensionKind::BloodFeud, 1.0),
    ])
}

/// Pick `count` distinct entries from a trait table, in shuffled order.
fn draw_traits(rng: &mut SeededRng, table: &[&str], count: usize) -> Vec<String> {
    let mut order: Vec<usize> = (0..table.len()).collect();
    rng.shuffle(&mut order);
    order
        .into_iter()
        .take(count.min(table.len()))
        .map(|i| table[i].to_string())
        .collect()
}

/// Generate region `index` of a world. Deterministic in
/// `(world_seed, index, known_factions)`; the draw order is fixed, so the
/// same inputs always rebuild the same region.
pub fn generate_region(world_seed: &str, index: u32, known_factions: &[String]) -> Region {
    let mut rng = SeededRng::for_entity(world_seed, "region", index);

    let fallback = "the nameless";
    let prefix = *rng.pick_or(NAME_PREFIXES, &fallback);
    let suffix = *rng.pick_or(NAME_SUFFIXES, &fallback);
    let name = format!("{}{}", prefix, suffix);

    let biome = *rng.pick_or(Biome::all(), &Biome::Valley);
    let climate = *rng.pick_or(biome.climates(), &Climate::Temperate);

    let symbol_count = rng.int(2, 3) as usize;
    let symbols = draw_traits(&mut rng, SYMBOLS, symbol_count);
    let custom_count = rng.int(2, 3) as usize;
    let customs = draw_traits(&mut rng, CUSTOMS, custom_count);
    let taboo_count = rng.int(1, 2) as usize;
    let taboos = draw_traits(&mut rng, TABOOS, taboo_count);

    let kinds = tension_kinds();
    let mut tensions = Vec::new();
    for faction in known_factions {
        if rng.chance(TENSION_CHANCE) {
            let kind = *kinds.pick_or(&mut rng, &TensionKind::Rivalry);
            tensions.push(TensionEdge {
                faction: faction.clone(),
                kind,
            });
        }
    }

    let travel_cost = biome.base_travel_cost() + rng.int(0, 3) as u32;

    Region {
        name,
        biome,
        climate,
        symbols,
        customs,
        taboos,
        tensions,
        travel_cost,
    }
}
