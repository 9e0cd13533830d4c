use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_data, nom_unsigned_two_bytes},
    strings::{extract_utf8_string_lossy, extract_utf16_string},
};
use common::windows::{LinkFlags, StringData, StringDataSet};

/// Parse the optional strings following LinkInfo. Presence and order are
/// controlled by the header link flags
pub(crate) fn parse_string_data<'a>(
    data: &'a [u8],
    flags: &[LinkFlags],
) -> Result<(&'a [u8], StringDataSet), LnkError> {
    let unicode = flags.contains(&LinkFlags::IsUnicode);
    let mut input = data;

    let mut set = StringDataSet {
        name: None,
        relative_path: None,
        working_dir: None,
        arguments: None,
        icon_location: None,
    };

    let fields = [
        LinkFlags::HasName,
        LinkFlags::HasRelativePath,
        LinkFlags::HasWorkingDirectory,
        LinkFlags::HasArguments,
        LinkFlags::HasIconLocation,
    ];
    for field in fields {
        if !flags.contains(&field) {
            continue;
        }
        let (rest, value) = read_string(input, unicode)?;
        input = rest;
        match field {
            LinkFlags::HasName => set.name = Some(value),
            LinkFlags::HasRelativePath => set.relative_path = Some(value),
            LinkFlags::HasWorkingDirectory => set.working_dir = Some(value),
            LinkFlags::HasArguments => set.arguments = Some(value),
            LinkFlags::HasIconLocation => set.icon_location = Some(value),
            _ => {}
        }
    }

    Ok((input, set))
}

/// Read one counted string. Unicode strings store a character count, the
/// byte run is twice that
fn read_string(data: &[u8], unicode: bool) -> Result<(&[u8], StringData), LnkError> {
    let (input, count) = nom_unsigned_two_bytes(data, Endian::Le)?;

    let result = if unicode {
        let byte_size = count as u64 * 2;
        let (input, string_data) = nom_data(input, byte_size)?;
        (
            input,
            StringData {
                character_count: count as u32 * 2,
                text: extract_utf16_string(string_data),
                raw: Vec::new(),
            },
        )
    } else {
        let (input, string_data) = nom_data(input, count as u64)?;
        (
            input,
            StringData {
                character_count: count as u32,
                text: extract_utf8_string_lossy(string_data),
                raw: string_data.to_vec(),
            },
        )
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::strings::{parse_string_data, read_string};
    use common::windows::LinkFlags;

    #[test]
    fn test_read_string_unicode() {
        let test = [4, 0, 99, 0, 58, 0, 92, 0, 97, 0, 1, 2];
        let (remaining, result) = read_string(&test, true).unwrap();
        assert_eq!(result.character_count, 8);
        assert_eq!(result.text, "c:\\a");
        assert!(result.raw.is_empty());
        assert_eq!(remaining, [1, 2]);
    }

    #[test]
    fn test_read_string_unicode_max_count() {
        let count = 0x8000;
        let mut test = vec![0, 128];
        for _ in 0..count {
            test.extend([65, 0]);
        }
        let (_, result) = read_string(&test, true).unwrap();
        assert_eq!(result.character_count, 65536);
        assert_eq!(result.character_count as usize, result.text.len() * 2);
    }

    #[test]
    fn test_read_string_codepage() {
        let test = [4, 0, 99, 58, 92, 97];
        let (_, result) = read_string(&test, false).unwrap();
        assert_eq!(result.character_count, 4);
        assert_eq!(result.text, "c:\\a");
        assert_eq!(result.raw, [99, 58, 92, 97]);
    }

    #[test]
    fn test_parse_string_data() {
        let test = [
            2, 0, 104, 0, 105, 0, 3, 0, 46, 0, 46, 0, 92, 0, 1, 0, 47, 0,
        ];
        let flags = [
            LinkFlags::HasName,
            LinkFlags::HasRelativePath,
            LinkFlags::HasArguments,
            LinkFlags::IsUnicode,
        ];
        let (remaining, result) = parse_string_data(&test, &flags).unwrap();
        assert_eq!(result.name.as_ref().unwrap().text, "hi");
        assert_eq!(result.relative_path.as_ref().unwrap().text, "..\\");
        assert_eq!(result.relative_path.as_ref().unwrap().character_count, 6);
        assert_eq!(result.arguments.as_ref().unwrap().text, "/");
        assert_eq!(result.working_dir, None);
        assert_eq!(result.icon_location, None);
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_parse_string_data_truncated() {
        let test = [10, 0, 104, 0];
        let flags = [LinkFlags::HasName, LinkFlags::IsUnicode];
        assert!(parse_string_data(&test, &flags).is_err());
    }
}
