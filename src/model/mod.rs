pub mod assessment;
pub mod profile;
pub mod radar;
pub mod stats;
