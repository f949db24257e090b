//! Location of the codec's data directory (`codec.toml`, `preconditions.txt`).

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;

/// Files that mark a directory as the codec's data directory.
const DATA_FILES: [&str; 2] = ["codec.toml", "preconditions.txt"];
const DEFAULT_ROOT: &str = "cutscene_codec/data";

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Join `relative` onto the detected data directory.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

fn detect_data_root() -> PathBuf {
    let mut candidates = vec![PathBuf::from(DEFAULT_ROOT), PathBuf::from("data")];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        // `target/<profile>/` sits two levels below the workspace root.
        for base in dir.ancestors().take(3) {
            candidates.push(base.join(DEFAULT_ROOT));
            candidates.push(base.join("data"));
        }
    }

    let root = find_data_root(candidates).unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    debug!("using data directory '{}'", root.display());
    root
}

/// First candidate holding any of the data files.
fn find_data_root(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates
        .into_iter()
        .find(|dir| DATA_FILES.iter().any(|file| dir.join(file).is_file()))
}
