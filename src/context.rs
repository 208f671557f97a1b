use crate::error::Error;
use crate::result::Result;
use crate::tpl::Tpl;
use std::path::{Path, PathBuf};

/// Build configuration passed throughout the application
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output (show per-entry byte counts)
    pub verbose: bool,

    /// Skill directory to package
    pub source_dir: PathBuf,

    /// Final path component of the skill directory; top-level folder inside the archive
    pub source_name: String,

    /// Archive file to produce
    pub output_path: PathBuf,
}

impl Context {
    /// Create a context, resolving `$NAME` in the output template
    pub fn new(source_dir: PathBuf, output: &str, verbose: bool) -> Result<Self> {
        let source_name = source_name(&source_dir)?;

        let mut tpl = Tpl::new();
        tpl.register("NAME", &source_name);
        let output_path = PathBuf::from(tpl.parse(output));

        Ok(Self {
            verbose,
            source_dir,
            source_name,
            output_path,
        })
    }
}

/// Name of the directory itself, resolving `.` and similar through the filesystem
fn source_name(source_dir: &Path) -> Result<String> {
    let resolved;
    let path = if source_dir.file_name().is_some() {
        source_dir
    } else {
        resolved = source_dir.canonicalize().map_err(|e| {
            Error::InvalidSource(format!("{}: {}", source_dir.display(), e))
        })?;
        resolved.as_path()
    };

    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .ok_or_else(|| {
            Error::InvalidSource(format!(
                "cannot determine a name for {}",
                source_dir.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_follows_source_name() {
        let ctx = Context::new(PathBuf::from("fogo"), "$NAME.skill", false).unwrap();
        assert_eq!(ctx.source_name, "fogo");
        assert_eq!(ctx.output_path, PathBuf::from("fogo.skill"));
    }

    #[test]
    fn test_nested_source_uses_last_component() {
        let ctx = Context::new(PathBuf::from("skills/ember"), "out/$NAME.skill", true).unwrap();
        assert_eq!(ctx.source_name, "ember");
        assert_eq!(ctx.output_path, PathBuf::from("out/ember.skill"));
        assert!(ctx.verbose);
    }

    #[test]
    fn test_dot_source_resolves_to_directory_name() {
        let dir = tempfile::tempdir().unwrap();
        let skill = dir.path().join("cinder");
        std::fs::create_dir(&skill).unwrap();

        let ctx = Context::new(skill.join("."), "$NAME.skill", false).unwrap();
        assert_eq!(ctx.source_name, "cinder");
    }

    #[test]
    fn test_root_has_no_name() {
        let err = Context::new(PathBuf::from("/"), "$NAME.skill", false).unwrap_err();
        assert!(matches!(err, Error::InvalidSource(_)));
    }
}
