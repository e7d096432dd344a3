//! Environmental and cultural adjustment of culture seeds
//!
//! Pure transforms that nudge a template's pools to fit where and when it
//! lives. Field adjustments fire on fixed thresholds with fixed deltas;
//! axis adjustments scale with the axis's distance from its midpoint, so
//! the same axis pushes opposite poles on either side of 0.5. The order
//! is fixed: fields first, proportional axes second, thresholded axes
//! last.

use crate::context::{Axes, Fields};

use super::types::{
    LegalStatus, MaskForm, MaskFunction, MaskMaterial, MaskMotif, MaskTemplate, PaletteFinish,
};

/// A field above this value is considered present in the landscape.
const FIELD_THRESHOLD: f64 = 0.6;
/// Flat weight boost for pools matched by a present field.
const FIELD_DELTA: f64 = 2.0;
/// Proportional gain for axis adjustments: delta = (axis - 0.5) * gain.
const AXIS_GAIN: f64 = 3.0;
/// Prosperity above this gilds the workshop output.
const PROSPERITY_THRESHOLD: f64 = 0.65;
/// Plague pressure above this turns masks toward sickness work.
const PLAGUE_THRESHOLD: f64 = 0.65;
/// Iconoclasm above this drives figural imagery out of the pools.
pub const ICONOCLASM_THRESHOLD: f64 = 0.62;

/// Apply the full adjustment pipeline to one template.
pub fn adjust_template(template: &MaskTemplate, fields: &Fields, axes: &Axes) -> MaskTemplate {
    let mut t = template.clone();

    // --- Environmental fields, fixed thresholds ---
    if fields.water > FIELD_THRESHOLD {
        t.materials = t.materials.adjust_by(FIELD_DELTA, |m| m.is_littoral());
        t.motifs = t
            .motifs
            .adjust_by(FIELD_DELTA, |m| matches!(m, MaskMotif::River | MaskMotif::Storm));
    }
    if fields.metal > FIELD_THRESHOLD {
        t.materials = t.materials.adjust_by(FIELD_DELTA, |m| m.is_metal());
    }
    if fields.cold > FIELD_THRESHOLD {
        t.wear = t.wear.adjust_by(FIELD_DELTA, |w| w.is_enclosing());
    }
    if fields.forest > FIELD_THRESHOLD {
        t.materials = t.materials.adjust_by(FIELD_DELTA, |m| m.is_sylvan());
    }
    if fields.stone > FIELD_THRESHOLD {
        t.materials = t
            .materials
            .adjust_by(FIELD_DELTA, |m| matches!(m, MaskMaterial::Stone));
    }

    // --- Proportional axes: push one pole above the midpoint, the
    // opposite pole below it ---
    let d = (axes.centralization - 0.5) * AXIS_GAIN;
    t.statuses = t
        .statuses
        .adjust_by(d, |s| {
            matches!(s, LegalStatus::StateStandard | LegalStatus::CourtOnly)
        })
        .adjust_by(-d, |s| matches!(s, LegalStatus::Common));
    t.functions = t
        .functions
        .adjust_by(d, |f| matches!(f, MaskFunction::Authority | MaskFunction::Judicial))
        .adjust_by(-d, |f| matches!(f, MaskFunction::Festival));

    let d = (axes.piety - 0.5) * AXIS_GAIN;
    t.functions = t
        .functions
        .adjust_by(d, |f| matches!(f, MaskFunction::Funerary | MaskFunction::Initiation))
        .adjust_by(-d, |f| matches!(f, MaskFunction::Theatre));
    t.motifs = t.motifs.adjust_by(d, |m| {
        matches!(m, MaskMotif::Ancestor | MaskMotif::Sun | MaskMotif::Moon | MaskMotif::Star)
    });

    let d = (axes.militarization - 0.5) * AXIS_GAIN;
    t.functions = t
        .functions
        .adjust_by(d, |f| matches!(f, MaskFunction::War))
        .adjust_by(-d, |f| matches!(f, MaskFunction::Healing));
    t.forms = t.forms.adjust_by(d, |f| matches!(f, MaskForm::Helm | MaskForm::Crest));

    let d = (axes.openness - 0.5) * AXIS_GAIN;
    t.motifs = t
        .motifs
        .adjust_by(d, |m| matches!(m, MaskMotif::ForeignScript))
        .adjust_by(-d, |m| matches!(m, MaskMotif::Ancestor));

    // --- Thresholded axes ---
    if axes.prosperity > PROSPERITY_THRESHOLD {
        t.materials = t.materials.adjust_by(1.5, |m| m.is_precious());
        t.finishes = t.finishes.adjust_by(1.5, |f| {
            matches!(f, PaletteFinish::Gilded | PaletteFinish::Polished)
        });
    }
    if axes.plague_pressure > PLAGUE_THRESHOLD {
        t.forms = t.forms.adjust_by(2.0, |f| matches!(f, MaskForm::Muzzle));
        t.functions = t
            .functions
            .adjust_by(1.5, |f| matches!(f, MaskFunction::Healing | MaskFunction::Funerary));
    }
    if axes.iconoclasm > ICONOCLASM_THRESHOLD {
        t.motifs = t
            .motifs
            .adjust_by(-2.5, |m| m.is_figural())
            .adjust_by(1.5, |m| matches!(m, MaskMotif::Geometric));
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masks::library::TemplateLibrary;

    fn flat_fields() -> Fields {
        Fields {
            water: 0.5,
            metal: 0.5,
            cold: 0.5,
            forest: 0.5,
            stone: 0.5,
        }
    }

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

    fn weight_of<T: PartialEq + Clone>(
        pool: &crate::distribution::WeightedPool<T>,
        value: &T,
    ) -> f64 {
        pool.entries()
            .iter()
            .find(|e| &e.value == value)
            .map(|e| e.weight)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_midpoint_context_changes_nothing() {
        let library = TemplateLibrary::builtin();
        let seed = library.get("ember-guild").unwrap();
        let adjusted = adjust_template(seed, &flat_fields(), &flat_axes());
        assert_eq!(&adjusted, seed);
    }

    #[test]
    fn test_high_metal_field_boosts_metal_materials() {
        let library = TemplateLibrary::builtin();
        let seed = library.get("ember-guild").unwrap();
        let mut fields = flat_fields();
        fields.metal = 0.9;
        let adjusted = adjust_template(seed, &fields, &flat_axes());
        let before = weight_of(&seed.materials, &MaskMaterial::Iron);
        let after = weight_of(&adjusted.materials, &MaskMaterial::Iron);
        assert_eq!(after, before + 2.0);
        // Non-metals untouched.
        assert_eq!(
            weight_of(&adjusted.materials, &MaskMaterial::Leather),
            weight_of(&seed.materials, &MaskMaterial::Leather)
        );
    }

    #[test]
    fn test_centralization_pushes_opposite_poles() {
        let library = TemplateLibrary::builtin();
        let seed = library.get("granite-court").unwrap();

        let mut high = flat_axes();
        high.centralization = 1.0;
        let adjusted = adjust_template(seed, &flat_fields(), &high);
        assert!(
            weight_of(&adjusted.statuses, &LegalStatus::StateStandard)
                > weight_of(&seed.statuses, &LegalStatus::StateStandard)
        );
        assert!(
            weight_of(&adjusted.statuses, &LegalStatus::Common)
                < weight_of(&seed.statuses, &LegalStatus::Common)
        );

        let mut low = flat_axes();
        low.centralization = 0.0;
        let adjusted = adjust_template(seed, &flat_fields(), &low);
        assert!(
            weight_of(&adjusted.statuses, &LegalStatus::Common)
                > weight_of(&seed.statuses, &LegalStatus::Common)
        );
    }

    #[test]
    fn test_iconoclasm_suppresses_figural_motifs() {
        let library = TemplateLibrary::builtin();
        let seed = library.get("mosswood-circle").unwrap();
        let mut axes = flat_axes();
        axes.iconoclasm = 0.9;
        let adjusted = adjust_template(seed, &flat_fields(), &axes);
        let figural_before: f64 = seed
            .motifs
            .entries()
            .iter()
            .filter(|e| e.value.is_figural())
            .map(|e| e.weight)
            .sum();
        let figural_after: f64 = adjusted
            .motifs
            .entries()
            .iter()
            .filter(|e| e.value.is_figural())
            .map(|e| e.weight)
            .sum();
        assert!(figural_after < figural_before);
        // Suppression never drives a weight negative.
        assert!(adjusted.motifs.entries().iter().all(|e| e.weight >= 0.0));
    }

    #[test]
    fn test_adjustment_is_pure() {
        let library = TemplateLibrary::builtin();
        let seed = library.get("tide-wardens").unwrap();
        let snapshot = seed.clone();
        let mut fields = flat_fields();
        fields.water = 0.95;
        let _ = adjust_template(seed, &fields, &flat_axes());
        assert_eq!(seed, &snapshot);
    }
}
