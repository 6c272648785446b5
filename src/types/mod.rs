pub mod location;
pub mod occurrence;
pub mod species;
pub mod units;
pub mod view;
pub mod weather_sample;
