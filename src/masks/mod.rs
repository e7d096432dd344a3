//! Mask culture generation
//!
//! The full pipeline from a world context to a ranked set of concrete
//! mask blueprints:
//!
//! 1. select base culture seeds from the library (context RNG)
//! 2. adjust each seed's pools to the local fields and axes
//! 3. run each seed's evolution rules for the current era
//! 4. blend the survivors into one consolidated template
//! 5. sample ranked, share-weighted blueprints from the blend
//!
//! Everything is a pure function of (library, context); the same inputs
//! replay the same culture forever.

pub mod adjust;
pub mod evolve;
pub mod library;
pub mod sampler;
pub mod types;

pub use adjust::adjust_template;
pub use evolve::evolve_template;
pub use library::{TemplateLibrary, UnknownSeedError, OPENNESS_THIRD_SEED_THRESHOLD};
pub use sampler::sample_blueprints;
pub use types::{
    EvolutionRule, EvolutionTrigger, LegalStatus, MaskBlueprint, MaskCulture, MaskForm,
    MaskFunction, MaskMaterial, MaskMotif, MaskTemplate, PaletteFinish, PaletteHue, TemplateDelta,
    WearStyle,
};

use crate::context::{Axes, Context, Fields};
use crate::distribution::WeightedPool;

/// Fold several templates into one consolidated template: pairwise merge
/// across every category pool, set-union of ritual and driver tags. The
/// merged value set per pool is exactly the union of the inputs'.
pub fn blend_templates(templates: &[MaskTemplate]) -> MaskTemplate {
    let mut iter = templates.iter();
    let Some(first) = iter.next() else {
        return MaskTemplate {
            id: String::new(),
            name: String::new(),
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
    };
    let mut blended = first.clone();
    for next in iter {
        blended.id = format!("{}+{}", blended.id, next.id);
        blended.name = format!("{} / {}", blended.name, next.name);
        blended.forms = WeightedPool::merge(&blended.forms, &next.forms, 1.0, 1.0);
        blended.materials = WeightedPool::merge(&blended.materials, &next.materials, 1.0, 1.0);
        blended.motifs = WeightedPool::merge(&blended.motifs, &next.motifs, 1.0, 1.0);
        blended.functions = WeightedPool::merge(&blended.functions, &next.functions, 1.0, 1.0);
        blended.wear = WeightedPool::merge(&blended.wear, &next.wear, 1.0, 1.0);
        blended.hues = WeightedPool::merge(&blended.hues, &next.hues, 1.0, 1.0);
        blended.finishes = WeightedPool::merge(&blended.finishes, &next.finishes, 1.0, 1.0);
        blended.statuses = WeightedPool::merge(&blended.statuses, &next.statuses, 1.0, 1.0);
        for ritual in &next.rituals {
            if !blended.rituals.contains(ritual) {
                blended.rituals.push(ritual.clone());
            }
        }
        for driver in &next.drivers {
            if !blended.drivers.contains(driver) {
                blended.drivers.push(driver.clone());
            }
        }
        blended.rules.extend(next.rules.iter().cloned());
    }
    blended
}

/// Generate the mask culture for one world context.
pub fn generate_mask_culture(library: &TemplateLibrary, ctx: &Context) -> MaskCulture {
    let fields = Fields::at(ctx);
    let axes = Axes::at(ctx);

    let mut rng = ctx.rng("culture-seeds");
    let selected = library.select(&axes, &mut rng);
    let source_seeds: Vec<String> = selected.iter().map(|t| t.id.clone()).collect();

    let evolved: Vec<MaskTemplate> = selected
        .iter()
        .map(|seed| {
            let adjusted = adjust_template(seed, &fields, &axes);
            evolve_template(&adjusted, ctx, &axes)
        })
        .collect();

    let blended = blend_templates(&evolved);
    let mut culture = sample_blueprints(&blended, ctx, &axes);
    culture.source_seeds = source_seeds;
    culture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_unions_pools_and_tags() {
        let library = TemplateLibrary::builtin();
        let a = library.get("tide-wardens").unwrap();
        let b = library.get("ember-guild").unwrap();
        let blended = blend_templates(&[a.clone(), b.clone()]);

        for entry in a.materials.entries().iter().chain(b.materials.entries()) {
            assert!(
                blended
                    .materials
                    .entries()
                    .iter()
                    .any(|e| e.value == entry.value),
                "material {:?} lost in blend",
                entry.value
            );
        }
        for ritual in a.rituals.iter().chain(&b.rituals) {
            assert!(blended.rituals.contains(ritual));
        }
        assert_eq!(blended.rules.len(), a.rules.len() + b.rules.len());
    }

    #[test]
    fn test_blend_of_empty_slice_is_neutral() {
        let blended = blend_templates(&[]);
        assert!(blended.forms.is_empty());
        assert!(blended.rituals.is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let library = TemplateLibrary::builtin();
        let ctx = Context::new("ashfall", 12, -3, 2);
        let a = generate_mask_culture(&library, &ctx);
        let b = generate_mask_culture(&library, &ctx);
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_contexts_diverge() {
        let library = TemplateLibrary::builtin();
        let a = generate_mask_culture(&library, &Context::new("w", 0, 0, 0));
        let b = generate_mask_culture(&library, &Context::new("w", 40, 40, 0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_source_seed_count_is_two_or_three() {
        let library = TemplateLibrary::builtin();
        for i in 0..20 {
            let ctx = Context::new("spread", i * 7, i * -3, i % 4);
            let culture = generate_mask_culture(&library, &ctx);
            let n = culture.source_seeds.len();
            assert!(n == 2 || n == 3, "selected {} seeds", n);
            if n == 3 {
                let axes = Axes::at(&ctx);
                assert!(axes.openness > OPENNESS_THIRD_SEED_THRESHOLD);
            }
        }
    }

    #[test]
    fn test_culture_output_is_complete() {
        let library = TemplateLibrary::builtin();
        let ctx = Context::new("complete", 9, 9, 1);
        let culture = generate_mask_culture(&library, &ctx);
        assert!(!culture.blueprints.is_empty());
        assert!(!culture.drivers.is_empty());
        let total: f64 = culture.blueprints.iter().map(|b| b.share).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}
