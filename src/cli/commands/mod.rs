pub mod audit;
pub mod config;
pub mod generate;
pub mod manifest;
