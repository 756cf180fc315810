/// Application layer - Use cases, DTOs and read models
///
/// This layer orchestrates the dependency domain and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod snapshot_store;
pub mod use_cases;
