//! A fixed-capacity contact directory backed by a separate-chaining hash
//! table.
//!
//! [`ChainedTable`] hashes each name with a deliberately weak character-sum
//! hash and resolves the resulting collisions by chaining entries within a
//! bucket. The bucket count never changes after construction and entries are
//! never removed.

mod contact;
mod table;

pub use contact::Contact;
pub use table::{ChainedTable, ZeroCapacity};
