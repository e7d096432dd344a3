//! Blueprint sampling from a blended culture template
//!
//! Draws a small bounded set of concrete masks from the consolidated
//! pools, hands each a slice of a 0..1 popularity pie, and ranks them by
//! share. Where iconoclasm runs high, a secondary restricted list is
//! derived from the clandestine blueprints; it is additive and leaves the
//! primary shares untouched.

use crate::context::{Axes, Context};
use crate::rng::SeededRng;

use super::adjust::ICONOCLASM_THRESHOLD;
use super::types::{
    LegalStatus, MaskBlueprint, MaskCulture, MaskForm, MaskFunction, MaskMaterial, MaskMotif,
    MaskTemplate, PaletteFinish, PaletteHue, WearStyle,
};

/// Bounds on how many blueprints one culture yields.
const MIN_BLUEPRINTS: i32 = 5;
const MAX_BLUEPRINTS: i32 = 7;

/// Bounds on the share slice cut for each non-final blueprint.
const MIN_SHARE_CUT: f64 = 0.05;
const MAX_SHARE_CUT: f64 = 0.30;

/// Restricted copies keep this fraction of their public share.
const RESTRICTED_SHARE_FACTOR: f64 = 0.4;

/// Chance that a blueprint carries a ritual association.
const RITUAL_CHANCE: f64 = 0.5;

// Neutral defaults for degenerate (empty) pools. Content authoring can
// legally produce such pools; sampling must not fail on them.
const DEFAULT_FORM: MaskForm = MaskForm::FullFace;
const DEFAULT_MATERIAL: MaskMaterial = MaskMaterial::Wood;
const DEFAULT_MOTIF: MaskMotif = MaskMotif::Geometric;
const DEFAULT_FUNCTION: MaskFunction = MaskFunction::Festival;
const DEFAULT_WEAR: WearStyle = WearStyle::StrapTied;
const DEFAULT_HUE: PaletteHue = PaletteHue::Ochre;
const DEFAULT_FINISH: PaletteFinish = PaletteFinish::Matte;
const DEFAULT_STATUS: LegalStatus = LegalStatus::Common;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Derive a display name from the culture's driver tags and the draw
/// stream. Always non-empty.
fn derive_name(
    template: &MaskTemplate,
    motif: MaskMotif,
    hue: PaletteHue,
    rng: &mut SeededRng,
) -> String {
    let fallback = "nameless".to_string();
    let driver = capitalize(rng.pick_or::<String>(&template.drivers, &fallback));
    match rng.int(0, 2) {
        0 => format!("Mask of the {} {}", driver, motif.name()),
        1 => format!("The {} {}", hue.name(), motif.name()),
        _ => format!("{} Face of the {}", driver, motif.name()),
    }
}

/// Sample the ranked blueprint list (and restricted sublist) for one
/// context from a blended template.
///
/// Per blueprint the draw order is fixed (form, material, motif,
/// function, wear, hue, finish, status, ritual, name) so identical
/// contexts replay identical masks.
pub fn sample_blueprints(template: &MaskTemplate, ctx: &Context, axes: &Axes) -> MaskCulture {
    let mut rng = ctx.rng("blueprints");
    let count = rng.int(MIN_BLUEPRINTS, MAX_BLUEPRINTS);

    let mut remainder = 1.0_f64;
    let mut blueprints = Vec::with_capacity(count as usize);
    for i in 0..count {
        let form = *template.forms.pick_or(&mut rng, &DEFAULT_FORM);
        let material = *template.materials.pick_or(&mut rng, &DEFAULT_MATERIAL);
        let motif = *template.motifs.pick_or(&mut rng, &DEFAULT_MOTIF);
        let function = *template.functions.pick_or(&mut rng, &DEFAULT_FUNCTION);
        let wear = *template.wear.pick_or(&mut rng, &DEFAULT_WEAR);
        let hue = *template.hues.pick_or(&mut rng, &DEFAULT_HUE);
        let finish = *template.finishes.pick_or(&mut rng, &DEFAULT_FINISH);
        let status = *template.statuses.pick_or(&mut rng, &DEFAULT_STATUS);
        let ritual = if rng.chance(RITUAL_CHANCE) {
            rng.pick(&template.rituals).cloned()
        } else {
            None
        };
        let name = derive_name(template, motif, hue, &mut rng);

        let share = if i == count - 1 {
            remainder.max(0.0)
        } else {
            let cut = MIN_SHARE_CUT + rng.next() * (MAX_SHARE_CUT - MIN_SHARE_CUT);
            let share = cut.min(remainder).max(0.0);
            remainder -= share;
            share
        };

        blueprints.push(MaskBlueprint {
            name,
            form,
            material,
            motif,
            function,
            wear,
            hue,
            finish,
            status,
            ritual,
            share,
        });
    }

    blueprints.sort_by(|a, b| b.share.partial_cmp(&a.share).unwrap_or(std::cmp::Ordering::Equal));

    let restricted = if axes.iconoclasm > ICONOCLASM_THRESHOLD {
        blueprints
            .iter()
            .filter(|b| b.status.is_clandestine() || b.function.is_covert())
            .map(|b| MaskBlueprint {
                name: format!("{} (forbidden)", b.name),
                share: b.share * RESTRICTED_SHARE_FACTOR,
                ..b.clone()
            })
            .collect()
    } else {
        Vec::new()
    };

    MaskCulture {
        blueprints,
        restricted,
        rituals: template.rituals.clone(),
        drivers: template.drivers.clone(),
        source_seeds: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::WeightedPool;
    use crate::masks::library::TemplateLibrary;

    fn flat_axes() -> Axes {
        Axes {
            centralization: 0.5,
            piety: 0.5,
            militarization: 0.5,
            openness: 0.5,
            prosperity: 0.5,
            plague_pressure: 0.5,
            iconoclasm: 0.5,
        }
    }

    fn sample_seed(seed_id: &str, ctx: &Context, axes: &Axes) -> MaskCulture {
        let library = TemplateLibrary::builtin();
        let template = library.get(seed_id).unwrap();
        sample_blueprints(template, ctx, axes)
    }

    #[test]
    fn test_blueprint_count_is_bounded() {
        for i in 0..30 {
            let ctx = Context::new("count", i, 0, 0);
            let culture = sample_seed("ember-guild", &ctx, &flat_axes());
            let n = culture.blueprints.len();
            assert!((5..=7).contains(&n), "count {} out of bounds", n);
        }
    }

    #[test]
    fn test_shares_normalize_to_one() {
        for i in 0..30 {
            let ctx = Context::new("shares", 0, i, 0);
            let culture = sample_seed("tide-wardens", &ctx, &flat_axes());
            let total: f64 = culture.blueprints.iter().map(|b| b.share).sum();
            assert!((total - 1.0).abs() < 1e-6, "total {}", total);
            assert!(culture.blueprints.iter().all(|b| b.share >= 0.0));
        }
    }

    #[test]
    fn test_blueprints_are_ranked_descending() {
        let ctx = Context::new("ranked", 2, 3, 1);
        let culture = sample_seed("granite-court", &ctx, &flat_axes());
        for pair in culture.blueprints.windows(2) {
            assert!(pair[0].share >= pair[1].share);
        }
    }

    #[test]
    fn test_every_blueprint_is_complete() {
        let ctx = Context::new("complete", -4, 8, 2);
        let culture = sample_seed("mosswood-circle", &ctx, &flat_axes());
        for b in &culture.blueprints {
            assert!(!b.name.is_empty());
            assert!(b.share.is_finite());
        }
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let ctx = Context::new("replay", 1, 1, 1);
        let a = sample_seed("pale-procession", &ctx, &flat_axes());
        let b = sample_seed("pale-procession", &ctx, &flat_axes());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pools_fall_back_to_neutral_defaults() {
        let template = MaskTemplate {
            id: "hollow".to_string(),
            name: "Hollow".to_string(),
            forms: WeightedPool::new(),
            materials: WeightedPool::new(),
            motifs: WeightedPool::new(),
            functions: WeightedPool::new(),
            wear: WeightedPool::new(),
            hues: WeightedPool::new(),
            finishes: WeightedPool::new(),
            statuses: WeightedPool::new(),
            rituals: Vec::new(),
            drivers: Vec::new(),
            rules: Vec::new(),
        };
        let ctx = Context::new("hollow", 0, 0, 0);
        let culture = sample_blueprints(&template, &ctx, &flat_axes());
        assert!(!culture.blueprints.is_empty());
        for b in &culture.blueprints {
            assert_eq!(b.form, DEFAULT_FORM);
            assert_eq!(b.material, DEFAULT_MATERIAL);
            assert!(!b.name.is_empty());
        }
    }

    #[test]
    fn test_restricted_list_requires_high_iconoclasm() {
        let ctx = Context::new("restricted", 6, 6, 0);
        let open = sample_seed("pale-procession", &ctx, &flat_axes());
        assert!(open.restricted.is_empty());

        let mut axes = flat_axes();
        axes.iconoclasm = 0.9;
        let repressed = sample_seed("pale-procession", &ctx, &axes);
        // Primary list is unchanged by the restricted derivation.
        assert_eq!(open.blueprints, repressed.blueprints);
        for r in &repressed.restricted {
            assert!(r.name.ends_with("(forbidden)"));
            let has_source = repressed.blueprints.iter().any(|b| {
                r.name.starts_with(&b.name)
                    && (r.share - b.share * RESTRICTED_SHARE_FACTOR).abs() < 1e-12
                    && (b.status.is_clandestine() || b.function.is_covert())
            });
            assert!(has_source, "restricted mask without a primary source");
        }
    }
}
