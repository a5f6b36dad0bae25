//! Input schemas
//!
//! Training records (one session per JSON object) and tracker packets.

mod packet;
mod record;

pub use packet::*;
pub use record::*;
