pub mod json_file;
pub mod sample;
pub mod traits;

pub use json_file::JsonFileSource;
pub use sample::SampleSource;
pub use traits::{load_catalog, CatalogSource};
