mod decoder;
mod types;

pub use decoder::{CID_GRAMMAR, decode, decode_folder};
pub use types::{CollectionIdentifier, GridLocation, ProcessingLevel, Sensor};
