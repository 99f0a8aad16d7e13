use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the database location.
pub const DATABASE_ENV: &str = "AIRNET_DATABASE";

/// Default filename for the network database.
const DATABASE_FILENAME: &str = "airnet.db";

/// Resolve the default database location using platform-specific project
/// directories.
pub fn default_database_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "airnet", "airnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DATABASE_FILENAME))
}

/// Resolve the database path.
///
/// Precedence: an explicit override (for example `--db`), then
/// [`DATABASE_ENV`], then [`default_database_path`]. An override that names an
/// existing directory resolves to the default filename inside it.
pub fn resolve_database_path(override_path: Option<&Path>) -> Result<PathBuf> {
    let env_path = env::var_os(DATABASE_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    resolve_with(override_path, env_path)
}

fn resolve_with(override_path: Option<&Path>, env_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = if let Some(path) = override_path {
        debug!(path = %path.display(), "using database path from command line");
        path.to_path_buf()
    } else if let Some(path) = env_path {
        debug!(path = %path.display(), "using database path from {}", DATABASE_ENV);
        path
    } else {
        default_database_path()?
    };

    if path.is_dir() {
        return Ok(path.join(DATABASE_FILENAME));
    }
    Ok(path)
}
