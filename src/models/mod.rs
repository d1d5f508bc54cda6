pub mod catalog;
pub mod entry;
pub mod form;
pub mod geo;
pub mod identifier;

pub use catalog::Catalog;
pub use entry::{COLUMNS, Entry};
pub use form::TreeForm;
pub use geo::GeoReading;
pub use identifier::IdTemplate;
