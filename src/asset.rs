use std::path::{Path, PathBuf};

/// None of the candidate files for a required image exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("image not found: put {} in {}", .names.join(" or "), .dir.display())]
pub struct MissingAssetError {
    pub dir: PathBuf,
    pub names: Vec<String>,
}

/// Returns the first candidate that is a regular file.
///
/// Candidates are tried in order, so the order encodes format preference:
/// `first_existing(&[dir.join("bg.png"), dir.join("bg.jpg")])` prefers the png.
///
/// Only the file metadata is checked. Nothing is opened or read here.
pub fn first_existing<P: AsRef<Path>>(candidates: &[P]) -> Result<PathBuf, MissingAssetError> {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_file() {
            log::debug!("Resolved asset {}", candidate.display());
            return Ok(candidate.to_path_buf());
        }
        log::trace!("Asset candidate {} not found", candidate.display());
    }

    return Err(missing_asset_error(candidates));
}

fn missing_asset_error<P: AsRef<Path>>(candidates: &[P]) -> MissingAssetError {
    let dir = candidates
        .first()
        .and_then(|p| p.as_ref().parent())
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let names = candidates
        .iter()
        .map(|p| match p.as_ref().file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => p.as_ref().display().to_string(),
        })
        .collect();

    return MissingAssetError { dir, names };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_match_wins_even_if_later_ones_exist() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bg.png"), b"png").unwrap();
        fs::write(dir.path().join("bg.jpg"), b"jpg").unwrap();

        let candidates = [dir.path().join("bg.png"), dir.path().join("bg.jpg")];
        assert_eq!(first_existing(&candidates).unwrap(), dir.path().join("bg.png"));
    }

    #[test]
    fn skips_missing_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bg.jpg"), b"jpg").unwrap();

        let candidates = [dir.path().join("bg.png"), dir.path().join("bg.jpg")];
        assert_eq!(first_existing(&candidates).unwrap(), dir.path().join("bg.jpg"));
    }

    #[test]
    fn directories_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bg.png")).unwrap();
        fs::write(dir.path().join("bg.jpg"), b"jpg").unwrap();

        let candidates = [dir.path().join("bg.png"), dir.path().join("bg.jpg")];
        assert_eq!(first_existing(&candidates).unwrap(), dir.path().join("bg.jpg"));
    }

    #[test]
    fn error_names_directory_and_files() {
        let dir = tempfile::tempdir().unwrap();

        let candidates = [dir.path().join("bg.png"), dir.path().join("bg.jpg")];
        let err = first_existing(&candidates).unwrap_err();

        assert_eq!(err.dir, dir.path());
        assert_eq!(err.names, vec!["bg.png".to_string(), "bg.jpg".to_string()]);

        let message = err.to_string();
        assert!(message.contains("bg.png or bg.jpg"));
        assert!(message.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn empty_candidate_list_is_missing() {
        let candidates: [PathBuf; 0] = [];
        let err = first_existing(&candidates).unwrap_err();
        assert!(err.names.is_empty());
    }
}
