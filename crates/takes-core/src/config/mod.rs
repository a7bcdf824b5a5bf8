pub mod settings;

pub use settings::TakeConfig;
