use crate::utils::encoding::base64_encode_standard;
use log::warn;
use std::string::{FromUtf8Error, FromUtf16Error};

/// Get a UTF16 string from provided bytes data. Will attempt to fix malformed UTF16. Such as UTF16 missing zeros
pub(crate) fn extract_utf16_string(data: &[u8]) -> String {
    let result = bytes_to_utf16_string(data, &false);
    match result {
        Ok(result) => result,
        Err(_err) => {
            // If we fail, try again with adjustment. Just incase it works.
            let result = bytes_to_utf16_string(data, &true);
            match result {
                Ok(result) => result,
                Err(err) => {
                    warn!("[strings] Failed to get UTF16 string: {err:?}");
                    base64_encode_standard(data)
                }
            }
        }
    }
}

/// Get a UTF16 string from provided bytes data
fn bytes_to_utf16_string(data: &[u8], adjust: &bool) -> Result<String, FromUtf16Error> {
    let mut utf16_data: Vec<u16> = Vec::new();
    // Convert data to UTF16 (&[u16])
    let min_byte_size = 2;
    for wide_char in data.chunks(min_byte_size) {
        if wide_char == vec![0, 0] || wide_char.len() < min_byte_size {
            // Check for last character
            if !wide_char.is_empty() && !wide_char.contains(&0) {
                utf16_data.push(wide_char[0] as u16);
            }
            break;
        }

        // Sometimes we have to encode to UTF16 for some strings
        if !wide_char.contains(&0) && *adjust {
            utf16_data.push(wide_char[0] as u16);
            utf16_data.push(wide_char[1] as u16);
            continue;
        }
        if wide_char[0] == 0 {
            utf16_data.push(u16::from_ne_bytes([wide_char[1], wide_char[0]]));
            continue;
        }

        utf16_data.push(u16::from_ne_bytes([wide_char[0], wide_char[1]]));
    }

    // Windows uses UTF16
    let utf16_result = String::from_utf16(&utf16_data)?;

    Ok(utf16_result)
}

/// Get a UTF8 string from provided bytes data
fn bytes_to_utf8_string(data: &[u8]) -> Result<String, FromUtf8Error> {
    let result = String::from_utf8(data.to_vec())?;
    let value = result.trim_end_matches('\0').to_string();
    Ok(value)
}

/// Get a UTF8 string from provided bytes data. Invalid UTF8 is base64 encoded. Use `extract_utf8_string_lossy` if replacing bytes is acceptable
pub(crate) fn extract_utf8_string(data: &[u8]) -> String {
    let utf8_result = bytes_to_utf8_string(data);
    match utf8_result {
        Ok(result) => result,
        Err(err) => {
            warn!("[strings] Failed to get UTF8 string: {err:?}");
            let max_size = 2097152;
            let issue = if data.len() < max_size {
                base64_encode_standard(data)
            } else {
                format!(
                    "[strings] Binary data size larger than 2MB, size: {}",
                    data.len()
                )
            };
            format!("[strings] Failed to get UTF8 string: {}", issue)
        }
    }
}

/// Get UTF8 string from provided bytes data. Invalid UTF8 will be replaced. Use `extract_utf8_string` if you do not want bytes replaced
pub(crate) fn extract_utf8_string_lossy(data: &[u8]) -> String {
    String::from_utf8_lossy(data).to_string()
}

#[cfg(test)]
mod tests {
    use crate::utils::strings::{
        extract_utf8_string, extract_utf8_string_lossy, extract_utf16_string,
    };

    #[test]
    fn test_extract_utf16_string() {
        let test_data = vec![
            79, 0, 83, 0, 81, 0, 85, 0, 69, 0, 82, 0, 89, 0, 68, 0, 46, 0, 69, 0, 88, 0, 69, 0, 0,
            0,
        ];
        assert_eq!(extract_utf16_string(&test_data), "OSQUERYD.EXE")
    }

    #[test]
    fn test_extract_utf8_string() {
        let test_data = vec![79, 83, 81, 85, 69, 82, 89, 68, 46, 69, 88, 69, 0];
        assert_eq!(extract_utf8_string(&test_data), "OSQUERYD.EXE")
    }

    #[test]
    fn test_extract_utf8_string_lossy() {
        let test_data = vec![67, 58, 92, 87, 105, 110, 100, 111, 119, 115];
        assert_eq!(extract_utf8_string_lossy(&test_data), "C:\\Windows")
    }

    #[test]
    fn test_extract_utf16_complex_string() {
        let test = [
            82, 0, 97, 0, 105, 0, 115, 0, 101, 0, 32, 0, 89, 0, 111, 0, 117, 0, 114, 0, 32, 0, 104,
            0, 97, 0, 110, 0, 100, 0, 32, 0, 105, 0, 102, 0, 32, 0, 121, 0, 111, 0, 117, 0, 32, 0,
            108, 0, 105, 0, 107, 0, 101, 0, 32, 0, 82, 0, 117, 0, 115, 0, 116, 0, 33, 0, 32, 0, 61,
            216, 75, 222, 13, 32, 66, 38, 15, 254, 32, 0, 61, 216, 75, 222, 13, 32, 64, 38, 15,
            254,
        ];

        assert_eq!(
            extract_utf16_string(&test),
            "Raise Your hand if you like Rust! 🙋‍♂️ 🙋‍♀️"
        )
    }
}
