pub mod package;
pub mod preferences;
pub mod season;
