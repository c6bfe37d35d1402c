//! Collaborators that supply indicator snapshots to the engine.

pub mod snapshot_source;

pub use snapshot_source::{DirectorySnapshotSource, SnapshotSource, SourceError};
