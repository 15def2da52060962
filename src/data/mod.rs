//! External data collaborators.
//!
//! Everything failure-prone lives out here; the core pipeline only ever sees
//! "zero or more raw text blobs".
//!
//! - remote file store client (`store`)
//! - local directory loader (`local`)
//! - seeded synthetic device output (`sample`)

pub mod local;
pub mod sample;
pub mod store;

pub use local::*;
pub use sample::*;
pub use store::*;
