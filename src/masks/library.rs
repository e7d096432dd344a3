//! The fixed catalog of base culture seeds
//!
//! Each seed is a complete starting template: weighted pools over every
//! category axis, ritual and driver tags, and the evolution rules that
//! history may fire against it. The library is an explicitly-passed,
//! immutable object so generation stays a pure function of
//! (library, seed, context).

use serde::{Deserialize, Serialize};

use crate::context::Axes;
use crate::distribution::WeightedPool;
use crate::rng::SeededRng;

use super::types::{
    EvolutionRule, EvolutionTrigger, LegalStatus, MaskForm, MaskFunction, MaskMaterial, MaskMotif,
    MaskTemplate, PaletteFinish, PaletteHue, TemplateDelta, WearStyle,
};

/// A third culture seed joins the blend above this openness.
pub const OPENNESS_THIRD_SEED_THRESHOLD: f64 = 0.66;

/// Lookup of a culture-seed id that is not in the catalog. This is the
/// one hard error in the core: it signals a configuration mistake, not a
/// runtime data condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSeedError {
    pub id: String,
}

impl std::fmt::Display for UnknownSeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown culture seed id: {:?}", self.id)
    }
}

impl std::error::Error for UnknownSeedError {}

/// Immutable catalog of culture seeds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateLibrary {
    seeds: Vec<MaskTemplate>,
}

impl TemplateLibrary {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            seeds: vec![
                tide_wardens(),
                ember_guild(),
                granite_court(),
                mosswood_circle(),
                pale_procession(),
                sun_banner_host(),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.seeds.iter().map(|s| s.id.as_str())
    }

    /// Fetch a seed by id.
    pub fn get(&self, id: &str) -> Result<&MaskTemplate, UnknownSeedError> {
        self.seeds
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| UnknownSeedError { id: id.to_string() })
    }

    /// Choose the base templates for a context: two seeds, or three where
    /// openness runs above [`OPENNESS_THIRD_SEED_THRESHOLD`]. Picks are
    /// distinct, drawn by shuffling the catalog order with the caller's
    /// context RNG.
    pub fn select(&self, axes: &Axes, rng: &mut SeededRng) -> Vec<&MaskTemplate> {
        let count = if axes.openness > OPENNESS_THIRD_SEED_THRESHOLD {
            3
        } else {
            2
        };
        let mut order: Vec<usize> = (0..self.seeds.len()).collect();
        rng.shuffle(&mut order);
        order
            .into_iter()
            .take(count.min(self.seeds.len()))
            .map(|i| &self.seeds[i])
            .collect()
    }
}

// ============================================================================
// CULTURE SEEDS
// ============================================================================

/// Coastal gleaners who mask the drowned so the tide cannot call them back.
fn tide_wardens() -> MaskTemplate {
    MaskTemplate {
        id: "tide-wardens".to_string(),
        name: "Tide Wardens".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::FullFace, 3.0),
            (MaskForm::Veil, 2.0),
            (MaskForm::HalfFace, 2.0),
            (MaskForm::Shroud, 1.0),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Driftwood, 3.0),
            (MaskMaterial::Shell, 3.0),
            (MaskMaterial::Bone, 1.5),
            (MaskMaterial::Cloth, 1.0),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::River, 3.0),
            (MaskMotif::Serpent, 2.0),
            (MaskMotif::Moon, 2.0),
            (MaskMotif::Storm, 1.5),
            (MaskMotif::Bird, 1.0),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::Funerary, 3.0),
            (MaskFunction::Festival, 2.0),
            (MaskFunction::Healing, 1.5),
            (MaskFunction::Initiation, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::StrapTied, 3.0),
            (WearStyle::Suspended, 1.5),
            (WearStyle::Hooded, 1.0),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::Verdigris, 3.0),
            (PaletteHue::Indigo, 2.5),
            (PaletteHue::BoneWhite, 1.5),
            (PaletteHue::AshGrey, 1.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Weathered, 3.0),
            (PaletteFinish::Oiled, 2.0),
            (PaletteFinish::Matte, 1.0),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::Common, 3.0),
            (LegalStatus::GuildLicensed, 1.0),
        ]),
        rituals: vec![
            "ninth-wave vigil".to_string(),
            "launching of the salt lanterns".to_string(),
            "naming of the drowned".to_string(),
        ],
        drivers: vec![
            "tide".to_string(),
            "drowned".to_string(),
            "salt".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::Migration,
                effect: TemplateDelta {
                    motifs: vec![(MaskMotif::ForeignScript, 2.0)],
                    materials: vec![(MaskMaterial::Cloth, 1.5)],
                    drivers: vec!["far-harbor".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Plague,
                effect: TemplateDelta {
                    forms: vec![(MaskForm::Muzzle, 2.5)],
                    functions: vec![(MaskFunction::Healing, 2.0)],
                    rituals: vec!["smoke-cleansing of the nets".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Scarcity,
                effect: TemplateDelta {
                    materials: vec![(MaskMaterial::Driftwood, 2.0), (MaskMaterial::Bark, 1.0)],
                    statuses: vec![(LegalStatus::Common, 1.0)],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.35),
            },
        ],
    }
}

/// Forge clans whose masks carry a smith's license and a furnace glare.
fn ember_guild() -> MaskTemplate {
    MaskTemplate {
        id: "ember-guild".to_string(),
        name: "Ember Guild".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::HalfFace, 3.0),
            (MaskForm::Helm, 2.5),
            (MaskForm::Brow, 1.5),
            (MaskForm::FullFace, 1.0),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Bronze, 3.0),
            (MaskMaterial::Iron, 3.0),
            (MaskMaterial::Leather, 2.0),
            (MaskMaterial::Clay, 1.0),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::Flame, 3.0),
            (MaskMotif::Geometric, 2.5),
            (MaskMotif::Sun, 1.5),
            (MaskMotif::Beast, 1.0),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::Festival, 2.5),
            (MaskFunction::Authority, 2.0),
            (MaskFunction::Initiation, 2.0),
            (MaskFunction::War, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::StrapTied, 3.0),
            (WearStyle::Hooded, 1.5),
            (WearStyle::Layered, 1.0),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::Crimson, 3.0),
            (PaletteHue::SootBlack, 2.5),
            (PaletteHue::Ochre, 1.5),
            (PaletteHue::GoldLeaf, 1.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Polished, 3.0),
            (PaletteFinish::Charred, 2.0),
            (PaletteFinish::Lacquered, 1.5),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::GuildLicensed, 3.0),
            (LegalStatus::Common, 1.5),
            (LegalStatus::StateStandard, 1.0),
        ]),
        rituals: vec![
            "quenching of the year-blade".to_string(),
            "reading of the slag omens".to_string(),
        ],
        drivers: vec![
            "ember".to_string(),
            "anvil".to_string(),
            "furnace".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::GoldenAge,
                effect: TemplateDelta {
                    materials: vec![(MaskMaterial::Gold, 2.0), (MaskMaterial::Silver, 1.5)],
                    finishes: vec![(PaletteFinish::Gilded, 2.5)],
                    drivers: vec!["gilded".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::War,
                effect: TemplateDelta {
                    forms: vec![(MaskForm::Helm, 2.5)],
                    functions: vec![(MaskFunction::War, 3.0)],
                    rituals: vec!["arming of the fire-veterans".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Centralize,
                effect: TemplateDelta {
                    statuses: vec![(LegalStatus::StateStandard, 2.5)],
                    functions: vec![(MaskFunction::Authority, 1.5)],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.3),
            },
        ],
    }
}

/// Highland magistrates; their stone faces outrank the faces beneath.
fn granite_court() -> MaskTemplate {
    MaskTemplate {
        id: "granite-court".to_string(),
        name: "Granite Court".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::FullFace, 3.0),
            (MaskForm::Brow, 2.0),
            (MaskForm::Crest, 1.5),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Stone, 3.0),
            (MaskMaterial::Silver, 2.0),
            (MaskMaterial::Wood, 1.5),
            (MaskMaterial::Iron, 1.0),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::Geometric, 3.0),
            (MaskMotif::Ancestor, 2.5),
            (MaskMotif::Star, 1.5),
            (MaskMotif::Sun, 1.0),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::Judicial, 3.0),
            (MaskFunction::Authority, 3.0),
            (MaskFunction::Funerary, 1.5),
            (MaskFunction::Theatre, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::StrapTied, 2.5),
            (WearStyle::StaffMounted, 2.0),
            (WearStyle::Handheld, 1.5),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::AshGrey, 3.0),
            (PaletteHue::BoneWhite, 2.0),
            (PaletteHue::Indigo, 1.5),
            (PaletteHue::GoldLeaf, 1.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Polished, 3.0),
            (PaletteFinish::Matte, 2.0),
            (PaletteFinish::Gilded, 1.0),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::CourtOnly, 3.0),
            (LegalStatus::StateStandard, 2.5),
            (LegalStatus::Common, 1.0),
        ]),
        rituals: vec![
            "unmasking of the condemned".to_string(),
            "oath sworn against the stone face".to_string(),
        ],
        drivers: vec![
            "granite".to_string(),
            "verdict".to_string(),
            "summit".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::Centralize,
                effect: TemplateDelta {
                    statuses: vec![(LegalStatus::StateStandard, 3.0)],
                    functions: vec![(MaskFunction::Authority, 2.0)],
                    drivers: vec!["edict".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Iconoclasm,
                effect: TemplateDelta {
                    motifs: vec![(MaskMotif::Geometric, 3.0), (MaskMotif::Star, 1.5)],
                    palette_override: Some(PaletteHue::AshGrey),
                    rituals: vec!["defacement of the old effigies".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Decentralize,
                effect: TemplateDelta {
                    statuses: vec![(LegalStatus::Common, 2.0)],
                    functions: vec![(MaskFunction::Festival, 2.0)],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.3),
            },
        ],
    }
}

/// Forest circles that carve a healer's face for every sickness.
fn mosswood_circle() -> MaskTemplate {
    MaskTemplate {
        id: "mosswood-circle".to_string(),
        name: "Mosswood Circle".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::FullFace, 3.0),
            (MaskForm::Muzzle, 2.0),
            (MaskForm::Crest, 1.5),
            (MaskForm::HalfFace, 1.0),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Wood, 3.0),
            (MaskMaterial::Bark, 2.5),
            (MaskMaterial::Bone, 1.5),
            (MaskMaterial::Clay, 1.0),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::Beast, 3.0),
            (MaskMotif::Ancestor, 2.5),
            (MaskMotif::Bird, 2.0),
            (MaskMotif::Harvest, 1.5),
            (MaskMotif::Serpent, 1.0),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::Healing, 3.0),
            (MaskFunction::Initiation, 2.5),
            (MaskFunction::Festival, 2.0),
            (MaskFunction::Funerary, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::StrapTied, 2.5),
            (WearStyle::Hooded, 2.0),
            (WearStyle::Suspended, 1.0),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::Ochre, 3.0),
            (PaletteHue::Verdigris, 2.5),
            (PaletteHue::BoneWhite, 1.5),
            (PaletteHue::Crimson, 1.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Oiled, 3.0),
            (PaletteFinish::Matte, 2.0),
            (PaletteFinish::Weathered, 1.5),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::Common, 3.0),
            (LegalStatus::GuildLicensed, 0.5),
        ]),
        rituals: vec![
            "first-sap anointing".to_string(),
            "beast-dance under the old canopy".to_string(),
            "burying of the spent masks".to_string(),
        ],
        drivers: vec![
            "moss".to_string(),
            "antler".to_string(),
            "root".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::Plague,
                effect: TemplateDelta {
                    forms: vec![(MaskForm::Muzzle, 3.0)],
                    functions: vec![(MaskFunction::Healing, 2.5)],
                    hues: vec![(PaletteHue::BoneWhite, 2.0)],
                    rituals: vec!["fever-smoke circle".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Migration,
                effect: TemplateDelta {
                    motifs: vec![(MaskMotif::ForeignScript, 1.5), (MaskMotif::Star, 1.0)],
                    drivers: vec!["wayfarer".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.3),
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Scarcity,
                effect: TemplateDelta {
                    materials: vec![(MaskMaterial::Bark, 2.0), (MaskMaterial::Cloth, 1.0)],
                    finishes: vec![(PaletteFinish::Weathered, 1.5)],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
        ],
    }
}

/// Penitent processions that wear the dead's faces so grief walks openly.
fn pale_procession() -> MaskTemplate {
    MaskTemplate {
        id: "pale-procession".to_string(),
        name: "Pale Procession".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::Shroud, 3.0),
            (MaskForm::Veil, 2.5),
            (MaskForm::FullFace, 2.0),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Bone, 3.0),
            (MaskMaterial::Cloth, 2.5),
            (MaskMaterial::Clay, 2.0),
            (MaskMaterial::Silver, 0.5),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::Skull, 3.0),
            (MaskMotif::Moon, 2.5),
            (MaskMotif::Ancestor, 2.0),
            (MaskMotif::Star, 1.0),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::Funerary, 3.0),
            (MaskFunction::SecretRite, 2.0),
            (MaskFunction::Healing, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::Hooded, 3.0),
            (WearStyle::Layered, 2.0),
            (WearStyle::StrapTied, 1.5),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::BoneWhite, 3.0),
            (PaletteHue::AshGrey, 2.5),
            (PaletteHue::SootBlack, 2.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Matte, 3.0),
            (PaletteFinish::Weathered, 2.0),
            (PaletteFinish::Charred, 1.0),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::Common, 2.0),
            (LegalStatus::Clandestine, 2.0),
            (LegalStatus::Heretical, 1.0),
        ]),
        rituals: vec![
            "silent walk of the hundred faces".to_string(),
            "ash-writing of the names".to_string(),
        ],
        drivers: vec![
            "pale".to_string(),
            "mourning".to_string(),
            "procession".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::Plague,
                effect: TemplateDelta {
                    functions: vec![(MaskFunction::SecretRite, 2.0)],
                    statuses: vec![(LegalStatus::Clandestine, 2.0)],
                    rituals: vec!["sealing of the plague doors".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.5),
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Iconoclasm,
                effect: TemplateDelta {
                    statuses: vec![(LegalStatus::Heretical, 2.5)],
                    motifs: vec![(MaskMotif::Geometric, 1.5)],
                    drivers: vec!["forbidden".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
        ],
    }
}

/// Steppe riders whose war-faces are sewn from hide and sky.
fn sun_banner_host() -> MaskTemplate {
    MaskTemplate {
        id: "sun-banner-host".to_string(),
        name: "Sun Banner Host".to_string(),
        forms: WeightedPool::from_pairs(&[
            (MaskForm::HalfFace, 3.0),
            (MaskForm::Crest, 2.5),
            (MaskForm::Brow, 2.0),
            (MaskForm::Helm, 1.5),
        ]),
        materials: WeightedPool::from_pairs(&[
            (MaskMaterial::Leather, 3.0),
            (MaskMaterial::Bone, 2.5),
            (MaskMaterial::Bronze, 1.5),
            (MaskMaterial::Cloth, 1.0),
        ]),
        motifs: WeightedPool::from_pairs(&[
            (MaskMotif::Sun, 3.0),
            (MaskMotif::Storm, 2.5),
            (MaskMotif::Beast, 2.0),
            (MaskMotif::Bird, 1.5),
        ]),
        functions: WeightedPool::from_pairs(&[
            (MaskFunction::War, 3.0),
            (MaskFunction::Festival, 2.0),
            (MaskFunction::Initiation, 1.5),
            (MaskFunction::Authority, 1.0),
        ]),
        wear: WeightedPool::from_pairs(&[
            (WearStyle::StrapTied, 3.0),
            (WearStyle::Layered, 1.5),
            (WearStyle::StaffMounted, 1.0),
        ]),
        hues: WeightedPool::from_pairs(&[
            (PaletteHue::Ochre, 3.0),
            (PaletteHue::Crimson, 2.5),
            (PaletteHue::GoldLeaf, 1.5),
            (PaletteHue::SootBlack, 1.0),
        ]),
        finishes: WeightedPool::from_pairs(&[
            (PaletteFinish::Oiled, 2.5),
            (PaletteFinish::Weathered, 2.0),
            (PaletteFinish::Polished, 1.5),
        ]),
        statuses: WeightedPool::from_pairs(&[
            (LegalStatus::Common, 3.0),
            (LegalStatus::StateStandard, 1.0),
        ]),
        rituals: vec![
            "banner-raising at first light".to_string(),
            "mare's-milk blessing of the riders".to_string(),
        ],
        drivers: vec![
            "banner".to_string(),
            "thunder".to_string(),
            "horizon".to_string(),
        ],
        rules: vec![
            EvolutionRule {
                trigger: EvolutionTrigger::War,
                effect: TemplateDelta {
                    functions: vec![(MaskFunction::War, 3.0)],
                    hues: vec![(PaletteHue::Crimson, 2.0)],
                    rituals: vec!["counting of the taken crests".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Decentralize,
                effect: TemplateDelta {
                    statuses: vec![(LegalStatus::Common, 2.0)],
                    functions: vec![(MaskFunction::Festival, 1.5)],
                    ..TemplateDelta::default()
                },
                likelihood: Some(0.3),
            },
            EvolutionRule {
                trigger: EvolutionTrigger::Migration,
                effect: TemplateDelta {
                    motifs: vec![(MaskMotif::ForeignScript, 2.0), (MaskMotif::Star, 1.0)],
                    materials: vec![(MaskMaterial::Iron, 1.0)],
                    drivers: vec!["long-ride".to_string()],
                    ..TemplateDelta::default()
                },
                likelihood: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let library = TemplateLibrary::builtin();
        assert!(library.len() >= 6);
        for id in library.ids() {
            let seed = library.get(id).unwrap();
            assert!(!seed.forms.is_empty());
            assert!(!seed.materials.is_empty());
            assert!(!seed.motifs.is_empty());
            assert!(!seed.functions.is_empty());
            assert!(!seed.wear.is_empty());
            assert!(!seed.hues.is_empty());
            assert!(!seed.finishes.is_empty());
            assert!(!seed.statuses.is_empty());
            assert!(!seed.drivers.is_empty());
            assert!(!seed.rules.is_empty());
        }
    }

    #[test]
    fn test_unknown_id_is_a_hard_error() {
        let library = TemplateLibrary::builtin();
        let err = library.get("obsidian-choir").unwrap_err();
        assert_eq!(err.id, "obsidian-choir");
        assert!(err.to_string().contains("obsidian-choir"));
    }

    #[test]
    fn test_select_count_follows_openness() {
        let library = TemplateLibrary::builtin();
        let mut closed = Axes {
            centralization: 0.5,
            piety: 0.5,
            militarization: 0.5,
            openness: 0.2,
            prosperity: 0.5,
            plague_pressure: 0.5,
            iconoclasm: 0.5,
        };
        let mut rng = SeededRng::new("select");
        assert_eq!(library.select(&closed, &mut rng).len(), 2);

        closed.openness = 0.9;
        let mut rng = SeededRng::new("select");
        assert_eq!(library.select(&closed, &mut rng).len(), 3);
    }

    #[test]
    fn test_select_picks_are_distinct_and_deterministic() {
        let library = TemplateLibrary::builtin();
        let axes = Axes {
            centralization: 0.5,
            piety: 0.5,
            militarization: 0.5,
            openness: 0.9,
            prosperity: 0.5,
            plague_pressure: 0.5,
            iconoclasm: 0.5,
        };
        let mut rng_a = SeededRng::new("distinct");
        let mut rng_b = SeededRng::new("distinct");
        let a: Vec<&str> = library
            .select(&axes, &mut rng_a)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let b: Vec<&str> = library
            .select(&axes, &mut rng_b)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(a, b);
        let mut dedup = a.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), a.len());
    }
}
