/// Auth file command handlers
pub mod auth_file;

/// Registry argument parsing command handlers
pub mod parse;

/// Version command handlers
pub mod version;
