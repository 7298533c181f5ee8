pub mod config;
pub mod logging;

pub mod archive;
pub mod identifier;
pub mod namespace;
pub mod render;
pub mod scan;
pub mod session;
