use crate::domain::model::{
    EntryKind, TemplateEntry, ACTIVATE_BAT, ACTIVATE_SH, GITIGNORE_RULES, REQUIREMENTS_MANIFEST,
};
use crate::utils::error::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Creates every template entry under `root`. Directories get `create_dir_all`;
/// files are touched without truncation, so re-running never loses content.
pub fn materialize(root: &Path, entries: &[TemplateEntry]) -> Result<()> {
    for entry in entries {
        let path = root.join(entry.path);
        match entry.kind {
            EntryKind::Dir => {
                fs::create_dir_all(&path)?;
                tracing::debug!("Created directory: {}", path.display());
            }
            EntryKind::File => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                OpenOptions::new().append(true).create(true).open(&path)?;
                tracing::debug!("Created file: {}", path.display());
            }
        }
    }
    Ok(())
}

/// Writes the dependency manifest and returns its path.
pub fn write_requirements(root: &Path) -> Result<PathBuf> {
    let manifest = root.join("requirements.txt");
    fs::write(&manifest, REQUIREMENTS_MANIFEST)?;
    Ok(manifest)
}

/// Unconditional overwrite; no merging with a pre-existing ignore file.
pub fn write_gitignore(root: &Path) -> Result<()> {
    fs::write(root.join(".gitignore"), GITIGNORE_RULES)?;
    Ok(())
}

/// Writes both activation scripts regardless of the host OS, so a checkout
/// works on either family.
pub fn write_activation_scripts(root: &Path) -> Result<()> {
    let sh = root.join("activate_venv.sh");
    fs::write(&sh, ACTIVATE_SH)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&sh, fs::Permissions::from_mode(0o755))?;
    }

    fs::write(root.join("activate_venv.bat"), ACTIVATE_BAT)?;
    Ok(())
}

/// Drops a `.keep` file into every empty directory so git tracks them.
/// `.git` and `venv` are never descended into.
pub fn keep_empty_dirs(root: &Path) -> Result<()> {
    for child in fs::read_dir(root)? {
        let child = child?;
        if !child.file_type()?.is_dir() {
            continue;
        }
        let name = child.file_name();
        if name == ".git" || name == "venv" {
            continue;
        }

        let path = child.path();
        if fs::read_dir(&path)?.next().is_none() {
            fs::write(path.join(".keep"), "")?;
            tracing::debug!("Added .keep to empty folder: {}", path.display());
        } else {
            keep_empty_dirs(&path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FOLDER_TEMPLATE;
    use tempfile::TempDir;

    #[test]
    fn materialize_creates_every_entry_with_its_kind() {
        let dir = TempDir::new().unwrap();
        materialize(dir.path(), FOLDER_TEMPLATE).unwrap();

        for entry in FOLDER_TEMPLATE {
            let path = dir.path().join(entry.path);
            match entry.kind {
                EntryKind::Dir => assert!(path.is_dir(), "missing dir {}", entry.path),
                EntryKind::File => assert!(path.is_file(), "missing file {}", entry.path),
            }
        }
    }

    #[test]
    fn materialize_never_truncates_existing_files() {
        let dir = TempDir::new().unwrap();
        materialize(dir.path(), FOLDER_TEMPLATE).unwrap();

        let readme = dir.path().join("docs/README.md");
        fs::write(&readme, "# hands off").unwrap();

        materialize(dir.path(), FOLDER_TEMPLATE).unwrap();
        assert_eq!(fs::read_to_string(&readme).unwrap(), "# hands off");
    }

    #[test]
    fn gitignore_is_overwritten_unconditionally() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "stale").unwrap();

        write_gitignore(dir.path()).unwrap();
        let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(content.contains("venv/"));
        assert!(content.contains("__pycache__/"));
        assert!(!content.contains("stale"));
    }

    #[test]
    fn both_activation_scripts_are_written() {
        let dir = TempDir::new().unwrap();
        write_activation_scripts(dir.path()).unwrap();

        let sh = dir.path().join("activate_venv.sh");
        assert_eq!(fs::read_to_string(&sh).unwrap(), ACTIVATE_SH);
        assert_eq!(
            fs::read_to_string(dir.path().join("activate_venv.bat")).unwrap(),
            ACTIVATE_BAT
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&sh).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn keep_files_land_only_in_empty_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("reports/visualizations")).unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/README.md"), "x").unwrap();
        fs::create_dir_all(dir.path().join(".git/refs")).unwrap();
        fs::create_dir_all(dir.path().join("venv/bin")).unwrap();

        keep_empty_dirs(dir.path()).unwrap();

        assert!(dir.path().join("reports/visualizations/.keep").is_file());
        assert!(!dir.path().join("docs/.keep").exists());
        assert!(!dir.path().join(".git/refs/.keep").exists());
        assert!(!dir.path().join("venv/bin/.keep").exists());
    }
}
