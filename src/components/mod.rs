pub mod extensions;
pub mod lonlat;
pub mod position;

pub use extensions::{Directivity, Extension};
pub use lonlat::{Latitude, Longitude, Precision};
pub use position::{Cst, Position};
