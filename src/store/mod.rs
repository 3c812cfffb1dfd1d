/// Storage layer: record encoding, the repository trait, and the CSV-backed store.
pub mod csv;
pub mod errors;
pub mod record;
pub mod repository;

pub use csv::CsvRepository;
pub use errors::StoreError;
pub use repository::{KeyValueRepository, Lookup};
