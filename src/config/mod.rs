// Sub-modules
mod core;
mod loader;
pub mod validation;

pub use self::core::{ExposureConfig, SpreaderConfig, ThresholdsConfig, OUTPUT_FILE};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
