//! Progression mutators and their cost curves.
//!
//! All four operations are total: they either return a [`Mutation`]
//! carrying the next snapshot, or a [`ProgressionError`] with the input
//! snapshot untouched. No partial mutation is ever observable.

pub mod cost;
pub mod mutate;

pub use cost::{
    HERO_COST_BASE, HERO_COST_STEP, LEVEL_COST_STEP, UNLOCK_ARTIFACT_COST, artifact_level_cost,
    hero_level_cost, stat_base_cost, stat_level_cost,
};
pub use mutate::{
    Mutation, ProgressionError, level_up_artifact, level_up_hero, level_up_stat, unlock_artifact,
};
