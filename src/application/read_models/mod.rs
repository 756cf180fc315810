//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of published snapshots for rendering.

mod snapshot_read_model;
mod snapshot_read_model_builder;

pub use snapshot_read_model::{DependencyNodeView, ProjectView, SnapshotReadModel, TargetView};
pub use snapshot_read_model_builder::SnapshotReadModelBuilder;
