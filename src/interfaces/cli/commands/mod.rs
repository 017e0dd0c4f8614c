pub mod config_gen;
pub mod inspect;

pub use config_gen::config_generate;
pub use inspect::inspect_dataset;
