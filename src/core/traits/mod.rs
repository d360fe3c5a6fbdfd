pub mod key_reader;
pub mod key_source;
