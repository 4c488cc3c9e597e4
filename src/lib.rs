pub mod chart;
pub mod config;
pub mod datasets;
pub mod format;
pub mod generate;
pub mod logging;
pub mod manifest;
pub mod page;
pub mod render;
pub mod scenario;
