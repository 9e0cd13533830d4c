/**
 * Windows `shortcut` files (`lnk`) contain metadata related to file execution. They are often found in ~\AppData\Roaming\Microsoft\Windows\Recent on modern versions of Windows.
 * Other parts of the Windows directory may also contain `shortcut` files.
 *
 * References:
 * `https://github.com/libyal/liblnk/blob/main/documentation/Windows%20Shortcut%20File%20(LNK)%20format.asciidoc`
 * `https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-shllink/16cb4ca1-9339-4d0c-a68d-bf1d6cc0f943`
 *
 * Other parsers:
 * `https://github.com/Velocidex/velociraptor`
 * `https://github.com/EricZimmerman/LECmd`
 */
use super::error::LnkError;
use super::header::check_header;
use super::shortcut::get_lnk_file;
use crate::filesystem::files::{list_files, read_file};
use common::windows::LnkFile;
use log::error;

/// Parse all `shortcut` files at provided directory
pub fn grab_lnk_directory(path: &str) -> Result<Vec<LnkFile>, LnkError> {
    let files = list_files(path).map_err(|err| {
        error!("[shortcuts] Could not list files at {path}: {err:?}");
        LnkError::ReadDirectory
    })?;

    let mut shortcuts = Vec::new();
    for file in files {
        if !file.ends_with(".lnk") {
            continue;
        }
        let shortcut = match grab_lnk_file(&file) {
            Ok(result) => result,
            Err(err) => {
                error!("[shortcuts] Failed to parse lnk file {file}: {err:?}");
                continue;
            }
        };
        shortcuts.push(shortcut);
    }

    Ok(shortcuts)
}

/// Parse a single `shortcut` file at provided path
pub fn grab_lnk_file(path: &str) -> Result<LnkFile, LnkError> {
    let data = read_file(path).map_err(|err| {
        error!("[shortcuts] Could not read file {path}: {err:?}");
        LnkError::ReadFile
    })?;

    let mut shortcut_info = parse_lnk_data(&data)?;
    shortcut_info.source_path = path.to_string();
    Ok(shortcut_info)
}

/// Parse raw `shortcut` bytes
pub fn parse_lnk_data(data: &[u8]) -> Result<LnkFile, LnkError> {
    let (_, is_lnk) = check_header(data).map_err(|_| LnkError::BadHeader)?;
    if !is_lnk {
        return Err(LnkError::NotLnkData);
    }

    get_lnk_file(data)
}
