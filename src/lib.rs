pub mod analyzers;
pub mod dataset;
pub mod normalizer;
pub mod output;
pub mod records;
