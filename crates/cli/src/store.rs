//! JSON persistence for vectors.
//!
//! Only the two components are stored; `load` goes back through the library
//! constructor, so a hand-edited file cannot smuggle an out-of-bound vector
//! into the process.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use planar::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct StoredVec2 {
    x: f64,
    y: f64,
}

/// Write `vector` to `path` as pretty JSON, creating parent directories.
pub fn save<P: AsRef<Path>>(path: P, vector: Vec2) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    let doc = StoredVec2 {
        x: vector.x(),
        y: vector.y(),
    };
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path.to_path_buf())
}

/// Read a vector back; construction re-checks the norm bound.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec2> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: StoredVec2 =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Vec2::new(doc.x, doc.y)
        .with_context(|| format!("vector in {} violates the norm bound", path.display()))
}
