//! Virtual filesystem for the folio terminal.
//!
//! The filesystem is two layers: an immutable base arena seeded from a
//! [`TreeNode`] record at construction, and a session overlay that holds
//! every node created or modified afterwards. Lookups consult the overlay
//! first, so the base graph is never mutated.

mod arena;
mod clock;
pub mod format;
mod glob;
mod node;
pub mod path;
mod vfs;

pub use clock::{Clock, SystemClock};
pub use folio_types::error::VfsError;
pub use glob::Glob;
pub use node::{Node, NodeKind, TreeNode};
pub use vfs::{
    FindOptions, LsEntry, LsOptions, StatInfo, TouchOutcome, TreeReport, VirtualFs,
};
