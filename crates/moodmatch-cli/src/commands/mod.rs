pub mod bank;
pub mod profile;
pub mod quiz;
