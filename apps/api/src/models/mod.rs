pub mod property;

pub use property::{Features, Language, ListingType, Location, PropertyInput};
