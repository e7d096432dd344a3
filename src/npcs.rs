//! Inhabitant generation
//!
//! NPCs are drawn from fixed trait tables with a syllable-built personal
//! name, each from an owned stream derived from
//! `(world seed, "npc", index)`. Like regions, they share only the RNG
//! contract with the mask pipeline.

use serde::{Deserialize, Serialize};

use crate::distribution::WeightedPool;
use crate::rng::SeededRng;

/// Station an inhabitant holds in their community.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcRole {
    Maskwright,
    Elder,
    Trader,
    Warden,
    Pilgrim,
    Herbalist,
    Outlaw,
    Chronicler,
}

impl NpcRole {
    pub fn name(&self) -> &'static str {
        match self {
            NpcRole::Maskwright => "Maskwright",
            NpcRole::Elder => "Elder",
            NpcRole::Trader => "Trader",
            NpcRole::Warden => "Warden",
            NpcRole::Pilgrim => "Pilgrim",
            NpcRole::Herbalist => "Herbalist",
            NpcRole::Outlaw => "Outlaw",
            NpcRole::Chronicler => "Chronicler",
        }
    }
}

/// How an inhabitant meets strangers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    Guarded,
    Open,
    Devout,
    Bitter,
    Curious,
    Weary,
    Sly,
}

impl Disposition {
    pub fn name(&self) -> &'static str {
        match self {
            Disposition::Guarded => "Guarded",
            Disposition::Open => "Open",
            Disposition::Devout => "Devout",
            Disposition::Bitter => "Bitter",
            Disposition::Curious => "Curious",
            Disposition::Weary => "Weary",
            Disposition::Sly => "Sly",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Disposition::Guarded,
            Disposition::Open,
            Disposition::Devout,
            Disposition::Bitter,
            Disposition::Curious,
            Disposition::Weary,
            Disposition::Sly,
        ]
    }
}

/// One generated inhabitant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub name: String,
    pub role: NpcRole,
    pub disposition: Disposition,
    pub marks: Vec<String>,
    pub visual_style: String,
}

// ============================================================================
// TRAIT TABLES
// ============================================================================

const ONSETS: &[&str] = &[
    "br", "k", "d", "f", "g", "h", "j", "l", "m", "n", "r", "s", "t", "v",
    "th", "sk", "gr", "dr",
];

const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ia", "ei"];

const CODAS: &[&str] = &["n", "r", "s", "l", "th", "k", "m", "d", "sh"];

const MARKS: &[&str] = &[
    "a burn scar shaped like a comet",
    "ritual dots tattooed along one brow",
    "a missing half-finger from a net accident",
    "a voice roughened by years of chant",
    "pale eyes that do not match",
    "a braid woven with copper wire",
    "hands stained permanently with dye",
    "a limp earned in a border raid",
    "teeth filed in the old coastal fashion",
];

const VISUAL_STYLES: &[&str] = &[
    "layered oil-cloth dyed storm-grey",
    "quilted robes trimmed with bone beads",
    "scarred leather worked with brass rings",
    "undyed wool bound by a mourning sash",
    "embroidered festival cloth, long faded",
    "travel furs patched from three winters",
    "court linen worn past its station",
];

fn role_pool() -> WeightedPool<NpcRole> {
    WeightedPool::from_pairs(&[
        (NpcRole::Maskwright, 2.0),
        (NpcRole::Elder, 2.0),
        (NpcRole::Trader, 3.0),
        (NpcRole::Warden, 2.5),
        (NpcRole::Pilgrim, 2.0),
        (NpcRole::Herbalist, 2.0),
        (NpcRole::Outlaw, 1.0),
        (NpcRole::Chronicler, 1.5),
    ])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build a personal name from 2-3 syllables of onset+vowel(+coda).
fn personal_name(rng: &mut SeededRng) -> String {
    let syllables = rng.int(2, 3);
    let mut name = String::new();
    for i in 0..syllables {
        let fallback = "a";
        if !(i == 0 && rng.chance(0.2)) {
            name.push_str(rng.pick_or::<&str>(ONSETS, &fallback));
        }
        name.push_str(rng.pick_or::<&str>(VOWELS, &fallback));
        let coda_chance = if i == syllables - 1 { 0.7 } else { 0.3 };
        if rng.chance(coda_chance) {
            name.push_str(rng.pick_or::<&str>(CODAS, &fallback));
        }
    }
    if name.len() < 2 {
        name.push('a');
    }
    capitalize(&name)
}

/// Generate inhabitant `index` of a world. Deterministic in
/// `(world_seed, index)`; the draw order (name, role, disposition, marks,
/// style) is fixed.
pub fn generate_npc(world_seed: &str, index: u32) -> Npc {
    let mut rng = SeededRng::for_entity(world_seed, "npc", index);

    let name = personal_name(&mut rng);
    let role = *role_pool().pick_or(&mut rng, &NpcRole::Trader);
    let disposition = *rng.pick_or(Disposition::all(), &Disposition::Guarded);

    let mark_count = rng.int(1, 2) as usize;
    let mut order: Vec<usize> = (0..MARKS.len()).collect();
    rng.shuffle(&mut order);
    let marks = order
        .into_iter()
        .take(mark_count)
        .map(|i| MARKS[i].to_string())
        .collect();

    let fallback = "plain traveling clothes";
    let visual_style = rng.pick_or(VISUAL_STYLES, &fallback).to_string();

    Npc {
        name,
        role,
        disposition,
        marks,
        visual_style,
    }
}
