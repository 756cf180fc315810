/// Result alias used across the crate.
/// Domain errors (`SnapshotError`) convert into `anyhow::Error` with `?` or `.into()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
