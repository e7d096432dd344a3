//! Deterministic mask-culture generation library
//!
//! Generates world regions, inhabitants, and ceremonial mask cultures
//! from a seed string and a small set of contextual parameters. The same
//! seed and context always rebuild the same output; no history is stored
//! anywhere.

pub mod context;
pub mod distribution;
pub mod masks;
pub mod noise;
pub mod npcs;
pub mod regions;
pub mod rng;
pub mod world;
