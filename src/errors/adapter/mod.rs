pub mod std_io;
pub mod toml;
