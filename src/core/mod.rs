pub mod config;
pub mod context;
pub mod location;
pub mod log;
pub mod repl;
pub mod session;
pub mod submit;
