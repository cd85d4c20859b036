// Library root — the funnel engine plus the modules the binary is built from.
// Production entry point remains `src/main.rs`.

pub mod funnel;

// These modules are only needed by the binary.
// Declared pub so integration tests can reach them.
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
