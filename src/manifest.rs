use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::path::PathBuf;

/// File that must sit directly inside the skill directory
pub const MANIFEST_FILENAME: &str = "SKILL.md";

/// Located skill manifest
#[derive(Debug)]
pub struct Manifest {
    pub path: PathBuf,
}

impl Manifest {
    /// Check that `<source>/SKILL.md` exists; nothing is touched on disk either way
    pub fn locate(ctx: &Context) -> Result<Self> {
        let path = ctx.source_dir.join(MANIFEST_FILENAME);
        if !path.is_file() {
            return Err(Error::MissingManifest { path });
        }
        Ok(Manifest { path })
    }
}
