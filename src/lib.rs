pub mod assets;
pub mod compute;
pub mod config;
pub mod diagnostics;
pub mod entities;
