//! Model artifact store

mod loader;

pub use loader::ArtifactStore;
