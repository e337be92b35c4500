//! Path utilities: expand ~ in user supplied paths.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str()
        && s.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(s.trim_start_matches("~/"));
    }
    path.to_path_buf()
}
