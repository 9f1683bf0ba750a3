//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use frontend_core::error::{FrontendError, Result};

pub use schema::{FrontendConfig, ServerSection, SimulationSection};

/// Default config path probed when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "frontend.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<FrontendConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        FrontendError::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FrontendConfig> {
    let cfg: FrontendConfig = serde_yaml::from_str(s)
        .map_err(|e| FrontendError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config for this process.
///
/// An explicit path must exist. Without one, `frontend.yaml` is used when
/// present and built-in defaults otherwise.
pub fn resolve(explicit: Option<&str>) -> Result<FrontendConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        None => {
            tracing::info!("no config file found, using built-in defaults");
            Ok(FrontendConfig::default())
        }
    }
}
