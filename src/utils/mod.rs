pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::float_repr;
pub use formatting::hours2readable;
