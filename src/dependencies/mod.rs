/// Dependency snapshot domain - pure model of per-target dependency graphs
///
/// `domain` holds the value objects and aggregates; `services` holds the
/// pure functions deriving resolution state, view models and new snapshot
/// generations from them. Nothing here performs I/O.
pub mod domain;
pub mod services;
