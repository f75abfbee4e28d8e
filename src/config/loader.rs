use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::SpreaderConfig;
use super::validation::validate_config;
use crate::core::{Error, Result, StreamRole};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".spreader-detector.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and validate every field, reporting all problems at once.
pub fn parse_and_validate_config(contents: &str) -> Result<SpreaderConfig> {
    let config = toml::from_str::<SpreaderConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    validate_config(&config)?;
    Ok(config)
}

/// Load an explicitly requested configuration file; any failure is fatal.
pub fn load_config_from_path(path: &Path) -> Result<SpreaderConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::io(StreamRole::Config, Some(path.to_path_buf()), e))?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<SpreaderConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            Some(SpreaderConfig::default())
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Walk from `start` towards the root, yielding at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.spreader-detector.toml` above `start`, or fall back to defaults.
pub fn discover_config(start: PathBuf) -> SpreaderConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SpreaderConfig::default()
        })
}

/// Resolve the run configuration: an explicit path wins, otherwise discovery
/// from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<SpreaderConfig> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(SpreaderConfig::default())
        }
    }
}
