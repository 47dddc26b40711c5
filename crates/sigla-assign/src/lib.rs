//! Shared code registry, conflict resolution, and the two-phase batch
//! driver that assigns abbreviations across a whole name list.

mod batch;
mod registry;
mod selector;

pub use batch::Abbreviator;
pub use registry::{Claim, Registry};
pub use selector::{choose, Selection};
