//! Weighted distribution algebra
//!
//! Every generator in the crate expresses category preferences as pools
//! of (value, weight) entries. The three operations here (pick, adjust,
//! merge) are total and pure: they never panic, and degenerate pools
//! (empty, zero total weight) degrade to documented fallbacks instead of
//! failing. Raw weights may go negative during adjustment bookkeeping but
//! are always clamped to >= 0 before a draw.

use serde::{Deserialize, Serialize};

use crate::rng::SeededRng;

/// One weighted candidate value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    pub value: T,
    pub weight: f64,
}

/// An ordered pool of weighted candidates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedPool<T> {
    entries: Vec<WeightedEntry<T>>,
}

impl<T> Default for WeightedPool<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> WeightedPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    /// Sum of effective (clamped) weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight.max(0.0)).sum()
    }

    /// Weighted draw. Positive total: walk the pool subtracting weights.
    /// Zero/negative total: uniform fallback over existing entries.
    /// Empty pool: `None`; callers wanting a neutral default use
    /// [`WeightedPool::pick_or`].
    pub fn pick<'a>(&'a self, rng: &mut SeededRng) -> Option<&'a T> {
        if self.entries.is_empty() {
            return None;
        }
        let total = self.total_weight();
        if total <= 0.0 {
            return rng.pick(&self.entries).map(|e| &e.value);
        }
        let mut r = rng.next() * total;
        for entry in &self.entries {
            r -= entry.weight.max(0.0);
            if r <= 0.0 {
                return Some(&entry.value);
            }
        }
        self.entries.last().map(|e| &e.value)
    }

    /// Weighted draw with a neutral default for the empty pool.
    pub fn pick_or<'a>(&'a self, rng: &mut SeededRng, default: &'a T) -> &'a T {
        self.pick(rng).unwrap_or(default)
    }
}

impl<T: Clone> WeightedPool<T> {
    pub fn from_pairs(pairs: &[(T, f64)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(value, weight)| WeightedEntry {
                    value: value.clone(),
                    weight: *weight,
                })
                .collect(),
        }
    }

    /// New pool where every entry matching `predicate` has its weight
    /// shifted by `delta` and clamped at zero. Non-matching entries pass
    /// through unchanged.
    pub fn adjust_by(&self, delta: f64, predicate: impl Fn(&T) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|entry| {
                    let weight = if predicate(&entry.value) {
                        (entry.weight + delta).max(0.0)
                    } else {
                        entry.weight
                    };
                    WeightedEntry {
                        value: entry.value.clone(),
                        weight,
                    }
                })
                .collect(),
        }
    }
}

impl<T: Clone + PartialEq> WeightedPool<T> {
    /// Union of two pools by value identity, scaling each side by its
    /// bias. A value in both pools contributes `wa*bias_a + wb*bias_b`;
    /// a value on one side contributes `w*bias` from that side. The
    /// result's value set is exactly the union of the inputs'; merge
    /// never drops or invents category values.
    pub fn merge(a: &Self, b: &Self, bias_a: f64, bias_b: f64) -> Self {
        let mut entries: Vec<WeightedEntry<T>> = a
            .entries
            .iter()
            .map(|e| WeightedEntry {
                value: e.value.clone(),
                weight: e.weight * bias_a,
            })
            .collect();
        for eb in &b.entries {
            match entries.iter_mut().find(|ea| ea.value == eb.value) {
                Some(existing) => existing.weight += eb.weight * bias_b,
                None => entries.push(WeightedEntry {
                    value: eb.value.clone(),
                    weight: eb.weight * bias_b,
                }),
            }
        }
        Self { entries }
    }

    /// Fold additional (value, weight) pairs into this pool, summing
    /// weights for values already present. Used by evolution effects,
    /// which only ever extend pools additively.
    pub fn extended(&self, additions: &[(T, f64)]) -> Self {
        Self::merge(self, &Self::from_pairs(additions), 1.0, 1.0)
    }
}
