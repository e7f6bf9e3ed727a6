pub mod grade;
pub mod render;
pub mod show;

use std::io::Read;
use std::path::Path;

use hl_core::AlmanacSnapshot;

/// Read a snapshot from a JSON file, or from stdin when the path is `-`.
fn load_snapshot(path: &Path) -> Result<AlmanacSnapshot, String> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?
    };

    let snapshot: AlmanacSnapshot = serde_json::from_str(&content)
        .map_err(|e| format!("invalid almanac snapshot: {e}"))?;
    tracing::debug!(date = %snapshot.date, source = %path.display(), "loaded snapshot");
    Ok(snapshot)
}
