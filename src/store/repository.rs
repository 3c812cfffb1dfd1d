/// The capability interface every store backend implements.
use super::errors::StoreError;

/// Outcome of reading a single id from a store.
///
/// Keeps "the id is not there" apart from "the store could not be read" so
/// callers can decide whether to conflate them.
#[derive(Debug)]
pub enum Lookup {
    /// The first record with a matching id, by insertion order.
    Found(String),
    /// The store was read (or does not exist yet) and holds no such id.
    NotFound,
    /// The store exists but could not be read.
    Unreadable(StoreError),
}

/// Append-only id/name storage.
pub trait KeyValueRepository {
    /// Append a record. Existing records with the same id are left in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the append cannot complete.
    fn create(&self, id: &str, name: &str) -> Result<(), StoreError>;

    /// Resolve `id` to the name of its first record.
    fn lookup(&self, id: &str) -> Lookup;

    /// Resolve `id`, treating an unreadable store as an empty one.
    ///
    /// # Errors
    ///
    /// The default implementation never fails; backends with failure modes
    /// other than an unreadable store may override it.
    fn find(&self, id: &str) -> Result<Option<String>, StoreError> {
        match self.lookup(id) {
            Lookup::Found(name) => Ok(Some(name)),
            Lookup::NotFound => Ok(None),
            Lookup::Unreadable(err) => {
                tracing::debug!(path = %err.path().display(), error = %err, "store unreadable; treating as empty");
                Ok(None)
            }
        }
    }
}
