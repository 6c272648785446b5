pub mod error;
pub mod occurrence_frame;
pub mod temperature_frame;
