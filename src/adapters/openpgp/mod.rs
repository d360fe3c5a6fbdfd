pub mod sequoia_key;
pub mod sequoia_reader;
pub mod storage_order;
