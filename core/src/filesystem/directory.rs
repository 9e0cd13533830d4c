use std::path::Path;

/// Check if path is a directory
pub(crate) fn is_directory(path: &str) -> bool {
    let dir = Path::new(path);
    if dir.is_dir() {
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::filesystem::directory::is_directory;
    use std::path::PathBuf;

    #[test]
    fn test_is_directory() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        assert!(is_directory(test_location.to_str().unwrap()));
    }
}
