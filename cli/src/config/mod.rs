mod main_config;

pub use main_config::{GameConfig, get_config_manager};
