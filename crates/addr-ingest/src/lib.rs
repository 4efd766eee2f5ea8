//! Address table ingestion.
//!
//! - **loader**: read a delimited file into an [`addr_model::AddressTable`]
//!   with every column kept as text and zip codes retyped
//! - **profile**: missing-value counts over loaded records

pub mod loader;
pub mod profile;

pub use loader::{LoadOptions, load_address_table, normalize_zip_column, read_text_frame};
pub use profile::null_counts;
