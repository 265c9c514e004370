pub mod analysis;
pub mod log;
pub mod profile;
pub mod rating;
