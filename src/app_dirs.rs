use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(pd) = ProjectDirs::from("", "", "codetype") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("codetype_config.json")
        }
    }

    /// `$HOME/.local/state/codetype`, then the platform data dir, then the
    /// working directory
    pub fn log_path() -> PathBuf {
        let data_dir = ProjectDirs::from("", "", "codetype")
            .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf());
        resolve_log_path(std::env::var_os("HOME").map(PathBuf::from), data_dir)
    }
}

fn resolve_log_path(home: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    const LOG_FILE: &str = "codetype.log";
    match (home, data_dir) {
        (Some(home), _) => home
            .join(".local")
            .join("state")
            .join("codetype")
            .join(LOG_FILE),
        (None, Some(dir)) => dir.join(LOG_FILE),
        (None, None) => PathBuf::from(LOG_FILE),
    }
}
