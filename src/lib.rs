pub mod connectivity;
pub mod data;
pub mod grid;
pub mod import;
pub mod picture;
pub mod telemetry;
