use crate::shortcuts::error::LnkError;
use crate::shortcuts::network::parse_network;
use crate::shortcuts::volume::parse_volume;
use crate::utils::{
    nom_helper::{Endian, nom_data, nom_unsigned_four_bytes},
    strings::extract_utf8_string,
};
use common::windows::{LinkInfo, LinkInfoFlags};
use log::warn;
use nom::bytes::complete::take_while;

/// Parse the LinkInfo structure. Locates the target on a local volume or a
/// network share. All offsets are relative to the structure start and are
/// rejected when they point outside the declared size
pub(crate) fn parse_link_info(data: &[u8]) -> Result<(&[u8], LinkInfo), LnkError> {
    let (_, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

    let base_header_size = 28;
    if size < base_header_size {
        return Err(LnkError::MalformedStructure {
            structure: "LinkInfo",
        });
    }
    if (data.len() as u64) < size as u64 {
        return Err(LnkError::BoundsViolation {
            structure: "LinkInfo",
            offset: size,
            size: data.len() as u32,
        });
    }

    let (remaining_input, window) = nom_data(data, size as u64)?;
    let (input, _size) = nom_unsigned_four_bytes(window, Endian::Le)?;
    let (input, header_size) = nom_unsigned_four_bytes(input, Endian::Le)?;

    // Header size 0x24 or larger carries the Unicode offset quartet
    let unicode_header_size = 0x24;
    if header_size >= unicode_header_size {
        return Err(LnkError::UnsupportedUnicodeLinkInfo { header_size });
    }

    let (input, flags_value) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, volume_id_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, local_base_path_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, common_network_relative_link_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (_, common_path_suffix_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let flags = get_flags(&flags_value);

    let offsets = [
        volume_id_offset,
        local_base_path_offset,
        common_network_relative_link_offset,
        common_path_suffix_offset,
    ];
    for offset in offsets {
        if offset != 0 && offset >= size {
            return Err(LnkError::BoundsViolation {
                structure: "LinkInfo",
                offset,
                size,
            });
        }
    }

    let has_volume = flags.contains(&LinkInfoFlags::VolumeIdAndLocalBasePath);
    let has_network = flags.contains(&LinkInfoFlags::CommonNetworkRelativeLinkAndPathSuffix);
    if !has_volume && (volume_id_offset != 0 || local_base_path_offset != 0) {
        warn!("[shortcuts] LinkInfo volume offsets set without the volume flag");
    }
    if !has_network && common_network_relative_link_offset != 0 {
        warn!("[shortcuts] LinkInfo network offset set without the network flag");
    }

    let mut volume_id = None;
    let mut local_base_path = None;
    if has_volume {
        if volume_id_offset != 0 {
            let (volume_start, _) = nom_data(window, volume_id_offset as u64)?;
            let (_, volume) = parse_volume(volume_start)?;
            volume_id = Some(volume);
        }
        if local_base_path_offset != 0 {
            local_base_path = Some(read_path(window, local_base_path_offset)?);
        }
    }

    let mut network_link = None;
    if has_network && common_network_relative_link_offset != 0 {
        let (network_start, _) = nom_data(window, common_network_relative_link_offset as u64)?;
        let (_, network) = parse_network(network_start)?;
        network_link = Some(network);
    }

    let common_path_suffix = read_path(window, common_path_suffix_offset)?;

    let info = LinkInfo {
        size,
        header_size,
        flags,
        volume_id_offset,
        local_base_path_offset,
        common_network_relative_link_offset,
        common_path_suffix_offset,
        volume_id,
        local_base_path,
        network_link,
        common_path_suffix,
    };

    Ok((remaining_input, info))
}

/// Read a NUL terminated path at an offset inside the structure
fn read_path(window: &[u8], offset: u32) -> Result<String, LnkError> {
    let (path_start, _) = nom_data(window, offset as u64)?;
    let end_of_string = 0;
    let (_, path_data) = take_while(|b| b != end_of_string)(path_start)?;
    Ok(extract_utf8_string(path_data))
}

/// Get LinkInfo flags. Control which location structures are present
fn get_flags(flags: &u32) -> Vec<LinkInfoFlags> {
    let mut info_flags = Vec::new();

    let volume_and_local = 0x1;
    let network_and_suffix = 0x2;
    if (flags & volume_and_local) == volume_and_local {
        info_flags.push(LinkInfoFlags::VolumeIdAndLocalBasePath);
    }
    if (flags & network_and_suffix) == network_and_suffix {
        info_flags.push(LinkInfoFlags::CommonNetworkRelativeLinkAndPathSuffix);
    }
    info_flags
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::error::LnkError;
    use crate::shortcuts::location::{get_flags, parse_link_info};
    use common::windows::{DriveType, LinkInfoFlags};

    #[test]
    fn test_parse_link_info() {
        let test = [
            101, 0, 0, 0, 28, 0, 0, 0, 1, 0, 0, 0, 28, 0, 0, 0, 45, 0, 0, 0, 0, 0, 0, 0, 100, 0, 0,
            0, 17, 0, 0, 0, 3, 0, 0, 0, 62, 147, 144, 66, 16, 0, 0, 0, 0, 67, 58, 92, 85, 115, 101,
            114, 115, 92, 98, 111, 98, 92, 80, 114, 111, 106, 101, 99, 116, 115, 92, 97, 114, 116,
            101, 109, 105, 115, 45, 99, 111, 114, 101, 92, 115, 114, 99, 92, 102, 105, 108, 101,
            115, 121, 115, 116, 101, 109, 92, 110, 116, 102, 115, 0, 0,
        ];

        let (_, results) = parse_link_info(&test).unwrap();
        assert_eq!(results.size, 101);
        assert_eq!(results.header_size, 28);
        assert_eq!(results.flags, [LinkInfoFlags::VolumeIdAndLocalBasePath]);
        assert_eq!(results.volume_id_offset, 28);
        assert_eq!(results.local_base_path_offset, 45);
        assert_eq!(results.common_network_relative_link_offset, 0);
        assert_eq!(results.common_path_suffix_offset, 100);

        let volume = results.volume_id.unwrap();
        assert_eq!(volume.size, 17);
        assert_eq!(volume.drive_type, DriveType::DriveFixed);
        assert_eq!(volume.drive_serial, "4290933E");
        assert_eq!(volume.volume_label, "");

        assert_eq!(
            results.local_base_path,
            Some(String::from(
                "C:\\Users\\bob\\Projects\\artemis-core\\src\\filesystem\\ntfs"
            ))
        );
        assert_eq!(results.network_link, None);
        assert_eq!(results.common_path_suffix, "");
    }

    #[test]
    fn test_parse_link_info_unicode_offsets() {
        let mut test = vec![40, 0, 0, 0, 36, 0, 0, 0, 1, 0, 0, 0];
        test.resize(40, 0);
        let result = parse_link_info(&test);
        assert_eq!(
            result,
            Err(LnkError::UnsupportedUnicodeLinkInfo { header_size: 36 })
        );
    }

    #[test]
    fn test_parse_link_info_offset_outside() {
        let mut test = vec![40, 0, 0, 0, 28, 0, 0, 0, 1, 0, 0, 0, 200, 0, 0, 0];
        test.resize(40, 0);
        let result = parse_link_info(&test);
        assert!(matches!(
            result,
            Err(LnkError::BoundsViolation {
                structure: "LinkInfo",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_link_info_too_small() {
        let test = [20, 0, 0, 0, 28, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let result = parse_link_info(&test);
        assert_eq!(
            result,
            Err(LnkError::MalformedStructure {
                structure: "LinkInfo"
            })
        );
    }

    #[test]
    fn test_get_flags() {
        let test = 3;
        let result = get_flags(&test);
        assert_eq!(
            result,
            [
                LinkInfoFlags::VolumeIdAndLocalBasePath,
                LinkInfoFlags::CommonNetworkRelativeLinkAndPathSuffix
            ]
        );
    }
}
