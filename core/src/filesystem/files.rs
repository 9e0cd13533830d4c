use super::{directory::is_directory, error::FileSystemError};
use log::error;
use std::{fs::read, path::Path};

/// Get a list of all files in a provided directory
pub(crate) fn list_files(path: &str) -> Result<Vec<String>, FileSystemError> {
    let mut files: Vec<String> = Vec::new();
    if !is_directory(path) {
        return Err(FileSystemError::NotDirectory);
    }
    let dir_result = std::fs::read_dir(path);
    let dir = match dir_result {
        Ok(result) => result,
        Err(err) => {
            error!("[core] Failed to get directory contents: {err:?}");
            return Err(FileSystemError::ReadDirectory);
        }
    };

    // Loop and get all files in provided directory
    for entry_result in dir {
        let entry = match entry_result {
            Ok(result) => result,
            Err(err) => {
                error!("[core] Failed to get directory entry: {err:?}");
                continue;
            }
        };

        let full_path = entry.path().display().to_string();
        if !is_file(&full_path) {
            continue;
        }
        files.push(full_path);
    }

    Ok(files)
}

/// Check if path is a file
pub(crate) fn is_file(path: &str) -> bool {
    let file = Path::new(path);
    if file.is_file() {
        return true;
    }
    false
}

/// Read a file that is less than 2GB in size
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, FileSystemError> {
    if file_too_large(path) {
        return Err(FileSystemError::LargeFile);
    }

    // Verify provided path is a file
    if !is_file(path) {
        return Err(FileSystemError::NotFile);
    }

    let read_result = read(path);
    match read_result {
        Ok(result) => Ok(result),
        Err(err) => {
            error!("[core] Failed to read file {path}: {err:?}");
            Err(FileSystemError::ReadFile)
        }
    }
}

/// Get size of a file in bytes
fn get_file_size(path: &str) -> u64 {
    let file = Path::new(path);
    match file.metadata() {
        Ok(result) => result.len(),
        Err(err) => {
            error!("[core] Failed to get file size for {path}: {err:?}");
            0
        }
    }
}

/// Check if a provided file is larger than the acceptable size (2GB)
fn file_too_large(path: &str) -> bool {
    let size = get_file_size(path);
    let max_size = 2147483648; // 2GB
    if size < max_size {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::filesystem::files::{is_file, list_files, read_file};
    use std::path::PathBuf;

    #[test]
    fn test_is_file() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let path = format!("{}/Cargo.toml", test_location.display());
        assert!(is_file(&path));
        assert!(!is_file(test_location.to_str().unwrap()));
    }

    #[test]
    fn test_list_files() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let results = list_files(test_location.to_str().unwrap()).unwrap();
        assert!(!results.is_empty());
    }

    #[test]
    fn test_read_file() {
        let test_location = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let path = format!("{}/Cargo.toml", test_location.display());
        let results = read_file(&path).unwrap();
        assert!(!results.is_empty());
    }
}
