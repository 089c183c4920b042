use log::debug;
use thiserror::Error;

use crate::contact::Contact;

const DEFAULT_NUM_BUCKETS: usize = 10;

/// A chain of entries sharing a bucket index. Order is insertion order.
type Bucket = Vec<(String, Contact)>;

/// Construction was attempted with zero buckets.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("table capacity must be a positive integer")]
pub struct ZeroCapacity;

/// A fixed-capacity hash table mapping names to [`Contact`]s, with separate
/// chaining for collision resolution.
///
/// The bucket count is fixed at construction; there is no rehashing and no
/// removal. Chains grow without bound, so lookups are O(chain length).
pub struct ChainedTable {
    buckets: Vec<Bucket>,
}

impl Default for ChainedTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedTable {
    /// Creates a table with the default bucket count.
    pub fn new() -> Self {
        Self::build(DEFAULT_NUM_BUCKETS)
    }

    /// Creates a table with `num_buckets` buckets, all empty.
    ///
    /// Zero buckets would leave the hash with nothing to index into, so it
    /// is rejected rather than clamped.
    pub fn with_num_buckets(num_buckets: usize) -> Result<Self, ZeroCapacity> {
        if num_buckets == 0 {
            return Err(ZeroCapacity);
        }
        Ok(Self::build(num_buckets))
    }

    fn build(num_buckets: usize) -> Self {
        let buckets = (0..num_buckets).map(|_| Vec::new()).collect();
        ChainedTable { buckets }
    }

    /// Sums the Unicode code point of every character in `key`, modulo the
    /// bucket count.
    ///
    /// Deliberately weak: anagram keys always collide, which exercises the
    /// chaining. The empty string sums to 0 and lands in bucket 0.
    fn hash(&self, key: &str) -> usize {
        let sum = key
            .chars()
            .fold(0usize, |acc, c| acc.wrapping_add(c as usize));
        sum % self.buckets.len()
    }

    /// Inserts a contact under `name`, or overwrites the number of an
    /// existing contact with that name.
    ///
    /// A new name appends to the tail of its bucket's chain; an update
    /// leaves the entry where it is. Never fails.
    pub fn insert(&mut self, name: String, number: String) {
        let index = self.hash(&name);
        let bucket = &mut self.buckets[index];

        if let Some((_, contact)) = bucket.iter_mut().find(|(key, _)| *key == name) {
            debug!("overwriting number for existing entry {}", name);
            contact.set_number(number);
            return;
        }

        let contact = Contact::new(name.clone(), number);
        bucket.push((name, contact));
    }

    /// Looks up a contact by name, walking the chain at the name's bucket.
    ///
    /// Returns `None` when no entry with that exact name exists.
    pub fn search(&self, name: &str) -> Option<&Contact> {
        let index = self.hash(name);
        self.buckets[index]
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, contact)| contact)
    }

    /// Check whether an entry with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The fixed bucket count chosen at construction.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Renders one line per bucket for diagnostics.
    ///
    /// Each line names the bucket index and either `Empty` or every contact
    /// in the chain, in chain order. Not a stable machine-readable format.
    pub fn dump(&self) -> Vec<String> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| {
                let mut line = format!("Index {}:", index);
                if bucket.is_empty() {
                    line.push_str(" Empty");
                } else {
                    for (_, contact) in bucket {
                        line.push_str(&format!(" - {}", contact));
                    }
                }
                line
            })
            .collect()
    }
}
