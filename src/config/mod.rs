//! Parameter file loading and parsing.
//!
//! Parameters are read from a JSON file into the typed groups in
//! [`settings`] and validated before any geometry runs. A missing file
//! path means "use the defaults", which describe the reference 3-bank,
//! 60-pin, 0.5 mm pitch Terminal part.

mod settings;

pub use settings::{
    BanksConfig, Config, GroundPadsConfig, HoleFamilyConfig, LayoutConfig, SignalPadsConfig,
};

use std::path::Path;

use crate::error::Error;

/// Loads and validates a parameter file.
///
/// If `path` is `None`, the built-in defaults are used.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is malformed,
/// or any parameter fails validation.
pub fn load_params(path: Option<&Path>) -> Result<Config, Error> {
    let config = match path {
        None => Config::default(),
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| Error::ReadFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::from_str(&contents).map_err(|e| Error::ParseFile {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    config.validate().map_err(Error::Config)?;

    Ok(config)
}
