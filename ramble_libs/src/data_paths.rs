use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory holding bundled story templates.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| ramble_data::detect_data_root("ramble_libs"));

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}
