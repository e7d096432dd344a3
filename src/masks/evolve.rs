//! Probabilistic evolution of culture seeds across eras
//!
//! Each rule carried by a template names a historical trigger; the
//! trigger maps to one cultural axis, and the axis biases the rule's
//! firing probability around its base likelihood. A rule that fires
//! appends its partial-template effect onto the seed's pools and tags.
//! Every rule draws once from its own context-derived RNG stream, so the
//! outcome of one rule can never disturb another's.

use crate::context::{Axes, Context};

use super::types::{EvolutionTrigger, MaskTemplate};

/// Firing likelihood for rules that do not declare their own.
const BASE_RULE_LIKELIHOOD: f64 = 0.3;

impl EvolutionTrigger {
    /// The axis value driving this trigger's probability bias.
    ///
    /// `Scarcity` has no axis mapping and contributes the neutral 0.5,
    /// leaving such rules at their base likelihood (see DESIGN.md).
    pub fn axis_value(&self, axes: &Axes) -> f64 {
        match self {
            EvolutionTrigger::Centralize => axes.centralization,
            EvolutionTrigger::Decentralize => 1.0 - axes.centralization,
            EvolutionTrigger::Plague => axes.plague_pressure,
            EvolutionTrigger::War => axes.militarization,
            EvolutionTrigger::GoldenAge => axes.prosperity,
            EvolutionTrigger::Iconoclasm => axes.iconoclasm,
            EvolutionTrigger::Migration => axes.openness,
            EvolutionTrigger::Scarcity => 0.5,
        }
    }
}

/// Firing probability for one rule under the given axes, clamped to [0,1].
fn firing_probability(likelihood: Option<f64>, trigger: EvolutionTrigger, axes: &Axes) -> f64 {
    let base = likelihood.unwrap_or(BASE_RULE_LIKELIHOOD);
    (base + (trigger.axis_value(axes) - 0.5) * 0.5).clamp(0.0, 1.0)
}

/// Run every rule on an (already adjusted) template, returning the
/// evolved template. The input is never mutated.
pub fn evolve_template(template: &MaskTemplate, ctx: &Context, axes: &Axes) -> MaskTemplate {
    let mut evolved = template.clone();
    for (index, rule) in template.rules.iter().enumerate() {
        let p = firing_probability(rule.likelihood, rule.trigger, axes);
        let mut rng = ctx.rng(&format!("evolve:{}:{}", template.id, index));
        if rng.next() < p {
            evolved = evolved.apply_delta(&rule.effect);
        }
    }
    evolved
}
