pub mod algorithm_normalizer;
pub mod identity_extractor;
pub mod notation_collector;
pub mod profile_assembler;
pub mod profile_service;
pub mod profile_session;
pub mod usage_decoder;

#[cfg(test)]
pub mod test_support;
