//! Runtime data directory discovery shared by the Ramble binaries.

use std::env;
use std::path::PathBuf;

/// Resolve the most likely location of a crate's runtime data directory.
///
/// `crate_dir` is the crate's directory name inside the workspace (e.g. `ramble_engine`), used
/// when running from the workspace root.
pub fn detect_data_root(crate_dir: &str) -> PathBuf {
    let nested = PathBuf::from(crate_dir).join("data");
    let mut candidates = vec![nested.clone(), PathBuf::from("data")];

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join(&nested));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(&nested));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or(nested)
}
