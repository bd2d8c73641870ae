pub mod config;
pub mod cpe;
pub mod logging;
pub mod version;
