//! Core types for mask culture generation
//!
//! Category axes are closed enums so a typo in a culture-seed table is a
//! compile error, not a silently dropped weight. Templates are values:
//! adjustment, evolution, and blending all return new templates and never
//! mutate in place.

use serde::{Deserialize, Serialize};

use crate::distribution::WeightedPool;

/// Overall silhouette of a mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskForm {
    FullFace,
    HalfFace,
    Crest,
    Veil,
    Muzzle,
    Brow,
    Helm,
    Shroud,
}

impl MaskForm {
    pub fn name(&self) -> &'static str {
        match self {
            MaskForm::FullFace => "Full-Face Mask",
            MaskForm::HalfFace => "Half Mask",
            MaskForm::Crest => "Crested Mask",
            MaskForm::Veil => "Veil Mask",
            MaskForm::Muzzle => "Muzzle Mask",
            MaskForm::Brow => "Brow Mask",
            MaskForm::Helm => "Helm Mask",
            MaskForm::Shroud => "Shroud Mask",
        }
    }
}

/// Primary construction material.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskMaterial {
    Wood,
    Driftwood,
    Bark,
    Bone,
    Shell,
    Clay,
    Stone,
    Leather,
    Cloth,
    Bronze,
    Iron,
    Silver,
    Gold,
}

impl MaskMaterial {
    pub fn name(&self) -> &'static str {
        match self {
            MaskMaterial::Wood => "Wood",
            MaskMaterial::Driftwood => "Driftwood",
            MaskMaterial::Bark => "Bark",
            MaskMaterial::Bone => "Bone",
            MaskMaterial::Shell => "Shell",
            MaskMaterial::Clay => "Clay",
            MaskMaterial::Stone => "Stone",
            MaskMaterial::Leather => "Leather",
            MaskMaterial::Cloth => "Cloth",
            MaskMaterial::Bronze => "Bronze",
            MaskMaterial::Iron => "Iron",
            MaskMaterial::Silver => "Silver",
            MaskMaterial::Gold => "Gold",
        }
    }

    /// Metal-family materials, favored where the metal field runs high.
    pub fn is_metal(&self) -> bool {
        matches!(
            self,
            MaskMaterial::Bronze | MaskMaterial::Iron | MaskMaterial::Silver | MaskMaterial::Gold
        )
    }

    /// Precious metals, favored in prosperous eras.
    pub fn is_precious(&self) -> bool {
        matches!(self, MaskMaterial::Silver | MaskMaterial::Gold)
    }

    /// Materials that come from water's edge.
    pub fn is_littoral(&self) -> bool {
        matches!(self, MaskMaterial::Driftwood | MaskMaterial::Shell)
    }

    /// Materials cut from living forest.
    pub fn is_sylvan(&self) -> bool {
        matches!(self, MaskMaterial::Wood | MaskMaterial::Bark)
    }
}

/// Dominant carved or painted motif.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskMotif {
    Ancestor,
    Beast,
    Serpent,
    Bird,
    Sun,
    Moon,
    Star,
    River,
    Storm,
    Flame,
    Skull,
    Harvest,
    Geometric,
    ForeignScript,
}

impl MaskMotif {
    pub fn name(&self) -> &'static str {
        match self {
            MaskMotif::Ancestor => "Ancestor",
            MaskMotif::Beast => "Beast",
            MaskMotif::Serpent => "Serpent",
            MaskMotif::Bird => "Bird",
            MaskMotif::Sun => "Sun",
            MaskMotif::Moon => "Moon",
            MaskMotif::Star => "Star",
            MaskMotif::River => "River",
            MaskMotif::Storm => "Storm",
            MaskMotif::Flame => "Flame",
            MaskMotif::Skull => "Skull",
            MaskMotif::Harvest => "Harvest",
            MaskMotif::Geometric => "Geometric",
            MaskMotif::ForeignScript => "Foreign Script",
        }
    }

    /// Motifs depicting faces or creatures, suppressed under iconoclasm.
    pub fn is_figural(&self) -> bool {
        matches!(
            self,
            MaskMotif::Ancestor
                | MaskMotif::Beast
                | MaskMotif::Serpent
                | MaskMotif::Bird
                | MaskMotif::Skull
        )
    }
}

/// What the mask is worn for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskFunction {
    Festival,
    Funerary,
    War,
    Judicial,
    Healing,
    Initiation,
    Authority,
    Theatre,
    SecretRite,
}

impl MaskFunction {
    pub fn name(&self) -> &'static str {
        match self {
            MaskFunction::Festival => "Festival",
            MaskFunction::Funerary => "Funerary",
            MaskFunction::War => "War",
            MaskFunction::Judicial => "Judicial",
            MaskFunction::Healing => "Healing",
            MaskFunction::Initiation => "Initiation",
            MaskFunction::Authority => "Authority",
            MaskFunction::Theatre => "Theatre",
            MaskFunction::SecretRite => "Secret Rite",
        }
    }

    /// Functions practiced away from public view.
    pub fn is_covert(&self) -> bool {
        matches!(self, MaskFunction::SecretRite)
    }
}

/// How the mask is carried on the body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WearStyle {
    StrapTied,
    Hooded,
    Handheld,
    StaffMounted,
    Suspended,
    Layered,
}

impl WearStyle {
    pub fn name(&self) -> &'static str {
        match self {
            WearStyle::StrapTied => "Strap-Tied",
            WearStyle::Hooded => "Hooded",
            WearStyle::Handheld => "Handheld",
            WearStyle::StaffMounted => "Staff-Mounted",
            WearStyle::Suspended => "Suspended",
            WearStyle::Layered => "Layered",
        }
    }

    /// Styles that wrap the head against weather.
    pub fn is_enclosing(&self) -> bool {
        matches!(self, WearStyle::Hooded | WearStyle::Layered)
    }
}

/// Dominant pigment of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteHue {
    Ochre,
    Crimson,
    Indigo,
    Verdigris,
    BoneWhite,
    SootBlack,
    GoldLeaf,
    AshGrey,
}

impl PaletteHue {
    pub fn name(&self) -> &'static str {
        match self {
            PaletteHue::Ochre => "Ochre",
            PaletteHue::Crimson => "Crimson",
            PaletteHue::Indigo => "Indigo",
            PaletteHue::Verdigris => "Verdigris",
            PaletteHue::BoneWhite => "Bone White",
            PaletteHue::SootBlack => "Soot Black",
            PaletteHue::GoldLeaf => "Gold Leaf",
            PaletteHue::AshGrey => "Ash Grey",
        }
    }
}

/// Surface treatment of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteFinish {
    Polished,
    Matte,
    Lacquered,
    Weathered,
    Gilded,
    Charred,
    Oiled,
}

impl PaletteFinish {
    pub fn name(&self) -> &'static str {
        match self {
            PaletteFinish::Polished => "Polished",
            PaletteFinish::Matte => "Matte",
            PaletteFinish::Lacquered => "Lacquered",
            PaletteFinish::Weathered => "Weathered",
            PaletteFinish::Gilded => "Gilded",
            PaletteFinish::Charred => "Charred",
            PaletteFinish::Oiled => "Oiled",
        }
    }
}

/// Who may legally wear the mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalStatus {
    Common,
    GuildLicensed,
    StateStandard,
    CourtOnly,
    Clandestine,
    Heretical,
}

impl LegalStatus {
    pub fn name(&self) -> &'static str {
        match self {
            LegalStatus::Common => "Common",
            LegalStatus::GuildLicensed => "Guild-Licensed",
            LegalStatus::StateStandard => "State-Standard",
            LegalStatus::CourtOnly => "Court-Only",
            LegalStatus::Clandestine => "Clandestine",
            LegalStatus::Heretical => "Heretical",
        }
    }

    /// Statuses worn outside the law.
    pub fn is_clandestine(&self) -> bool {
        matches!(self, LegalStatus::Clandestine | LegalStatus::Heretical)
    }
}

/// Historical pressure that can fire an evolution rule. Each trigger maps
/// to one cultural axis; `Scarcity` deliberately maps to none (see the
/// evolution engine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvolutionTrigger {
    Centralize,
    Decentralize,
    Plague,
    War,
    GoldenAge,
    Iconoclasm,
    Migration,
    Scarcity,
}

impl EvolutionTrigger {
    pub fn name(&self) -> &'static str {
        match self {
            EvolutionTrigger::Centralize => "Centralize",
            EvolutionTrigger::Decentralize => "Decentralize",
            EvolutionTrigger::Plague => "Plague",
            EvolutionTrigger::War => "War",
            EvolutionTrigger::GoldenAge => "Golden Age",
            EvolutionTrigger::Iconoclasm => "Iconoclasm",
            EvolutionTrigger::Migration => "Migration",
            EvolutionTrigger::Scarcity => "Scarcity",
        }
    }
}

/// Partial template appended onto a culture seed when a rule fires.
///
/// Only the listed pools/tags are touched, always additively; an entry
/// whose value already exists in the target pool sums its weight in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDelta {
    pub forms: Vec<(MaskForm, f64)>,
    pub materials: Vec<(MaskMaterial, f64)>,
    pub motifs: Vec<(MaskMotif, f64)>,
    pub functions: Vec<(MaskFunction, f64)>,
    pub wear: Vec<(WearStyle, f64)>,
    pub hues: Vec<(PaletteHue, f64)>,
    pub finishes: Vec<(PaletteFinish, f64)>,
    pub statuses: Vec<(LegalStatus, f64)>,
    pub rituals: Vec<String>,
    pub drivers: Vec<String>,
    /// Replaces the hue pool outright when set.
    pub palette_override: Option<PaletteHue>,
}

/// One conditional mutation carried by a culture seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRule {
    pub trigger: EvolutionTrigger,
    pub effect: TemplateDelta,
    /// Base firing likelihood; the engine default applies when `None`.
    pub likelihood: Option<f64>,
}

/// A culture-seed template: weighted pools over every category axis,
/// free-form ritual and driver tags, and conditional evolution rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskTemplate {
    pub id: String,
    pub name: String,
    pub forms: WeightedPool<MaskForm>,
    pub materials: WeightedPool<MaskMaterial>,
    pub motifs: WeightedPool<MaskMotif>,
    pub functions: WeightedPool<MaskFunction>,
    pub wear: WeightedPool<WearStyle>,
    pub hues: WeightedPool<PaletteHue>,
    pub finishes: WeightedPool<PaletteFinish>,
    pub statuses: WeightedPool<LegalStatus>,
    pub rituals: Vec<String>,
    pub drivers: Vec<String>,
    pub rules: Vec<EvolutionRule>,
}

impl MaskTemplate {
    /// New template with `delta` folded in. Pools extend additively; tags
    /// union (no duplicates); a palette override replaces the hue pool.
    pub fn apply_delta(&self, delta: &TemplateDelta) -> Self {
        let mut out = Self {
            id: self.id.clone(),
            name: self.name.clone(),
            forms: self.forms.extended(&delta.forms),
            materials: self.materials.extended(&delta.materials),
            motifs: self.motifs.extended(&delta.motifs),
            functions: self.functions.extended(&delta.functions),
            wear: self.wear.extended(&delta.wear),
            hues: self.hues.extended(&delta.hues),
            finishes: self.finishes.extended(&delta.finishes),
            statuses: self.statuses.extended(&delta.statuses),
            rituals: self.rituals.clone(),
            drivers: self.drivers.clone(),
            rules: self.rules.clone(),
        };
        for ritual in &delta.rituals {
            if !out.rituals.contains(ritual) {
                out.rituals.push(ritual.clone());
            }
        }
        for driver in &delta.drivers {
            if !out.drivers.contains(driver) {
                out.drivers.push(driver.clone());
            }
        }
        if let Some(hue) = delta.palette_override {
            out.hues = WeightedPool::from_pairs(&[(hue, 1.0)]);
        }
        out
    }
}

/// One fully concrete mask: exactly one chosen value per category, a
/// derived display name, and a normalized popularity share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskBlueprint {
    pub name: String,
    pub form: MaskForm,
    pub material: MaskMaterial,
    pub motif: MaskMotif,
    pub function: MaskFunction,
    pub wear: WearStyle,
    pub hue: PaletteHue,
    pub finish: PaletteFinish,
    pub status: LegalStatus,
    pub ritual: Option<String>,
    pub share: f64,
}

/// Final output of the mask pipeline for one context: ranked blueprints,
/// the optional restricted sublist, and the tags of the blended culture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskCulture {
    pub blueprints: Vec<MaskBlueprint>,
    pub restricted: Vec<MaskBlueprint>,
    pub rituals: Vec<String>,
    pub drivers: Vec<String>,
    pub source_seeds: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_template() -> MaskTemplate {
        MaskTemplate {
            id: "tiny".to_string(),
            name: "Tiny".to_string(),
            forms: WeightedPool::from_pairs(&[(MaskForm::FullFace, 1.0)]),
            materials: WeightedPool::from_pairs(&[(MaskMaterial::Wood, 1.0)]),
            motifs: WeightedPool::from_pairs(&[(MaskMotif::Sun, 1.0)]),
            functions: WeightedPool::from_pairs(&[(MaskFunction::Festival, 1.0)]),
            wear: WeightedPool::from_pairs(&[(WearStyle::StrapTied, 1.0)]),
            hues: WeightedPool::from_pairs(&[(PaletteHue::Ochre, 1.0)]),
            finishes: WeightedPool::from_pairs(&[(PaletteFinish::Matte, 1.0)]),
            statuses: WeightedPool::from_pairs(&[(LegalStatus::Common, 1.0)]),
            rituals: vec!["dawn procession".to_string()],
            drivers: vec!["harvest".to_string()],
            rules: Vec::new(),
        }
    }

    #[test]
    fn test_apply_delta_extends_pools_and_tags() {
        let template = tiny_template();
        let delta = TemplateDelta {
            motifs: vec![(MaskMotif::Skull, 2.0), (MaskMotif::Sun, 1.0)],
            rituals: vec!["dawn procession".to_string(), "bone vigil".to_string()],
            ..TemplateDelta::default()
        };
        let evolved = template.apply_delta(&delta);

        assert_eq!(evolved.motifs.len(), 2);
        assert_eq!(evolved.motifs.entries()[0].weight, 2.0);
        assert_eq!(evolved.rituals.len(), 2);
        // Original untouched.
        assert_eq!(template.motifs.len(), 1);
    }

    #[test]
    fn test_palette_override_replaces_hue_pool() {
        let template = tiny_template();
        let delta = TemplateDelta {
            palette_override: Some(PaletteHue::SootBlack),
            ..TemplateDelta::default()
        };
        let evolved = template.apply_delta(&delta);
        assert_eq!(evolved.hues.len(), 1);
        assert_eq!(evolved.hues.entries()[0].value, PaletteHue::SootBlack);
    }

    #[test]
    fn test_clandestine_markers() {
        assert!(LegalStatus::Heretical.is_clandestine());
        assert!(LegalStatus::Clandestine.is_clandestine());
        assert!(!LegalStatus::Common.is_clandestine());
        assert!(MaskFunction::SecretRite.is_covert());
        assert!(!MaskFunction::Festival.is_covert());
    }
}
