pub mod animator;
pub mod types;
