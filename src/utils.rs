use crate::error::Error;
use crate::result::Result;
use std::fs;
use std::path::{Component, Path};

/// Ensure the directory that will hold `path` exists, creating it if necessary
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Delete a previous build output. Returns whether anything was removed.
pub fn remove_stale(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Archive entry name for `relative`, rooted at `root` and joined with `/`
pub fn entry_name(root: &str, relative: &Path) -> Result<String> {
    let mut name = String::from(root);
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| {
                    Error::InvalidSource(format!("non UTF-8 path: {}", relative.display()))
                })?;
                name.push('/');
                name.push_str(part);
            }
            Component::CurDir => {}
            _ => {
                return Err(Error::InvalidSource(format!(
                    "unexpected path component in {}",
                    relative.display()
                )));
            }
        }
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_entry_name_is_root_inclusive() {
        assert_eq!(entry_name("fogo", Path::new("SKILL.md")).unwrap(), "fogo/SKILL.md");
        let nested: PathBuf = ["scripts", "bin", "run.sh"].iter().collect();
        assert_eq!(entry_name("fogo", &nested).unwrap(), "fogo/scripts/bin/run.sh");
    }

    #[test]
    fn test_entry_name_rejects_traversal() {
        assert!(entry_name("fogo", Path::new("../etc/passwd")).is_err());
        assert!(entry_name("fogo", Path::new("/etc/passwd")).is_err());
    }

    #[test]
    fn test_remove_stale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fogo.skill");

        assert!(!remove_stale(&path).unwrap());
        fs::write(&path, "old").unwrap();
        assert!(remove_stale(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist").join("nested").join("fogo.skill");

        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("dist").join("nested").is_dir());
        ensure_parent_dir(Path::new("fogo.skill")).unwrap();
    }
}
