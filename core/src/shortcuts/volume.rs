use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_data, nom_unsigned_four_bytes},
    strings::{extract_utf8_string, extract_utf16_string},
};
use common::windows::{DriveType, VolumeId};
use nom::bytes::complete::take_while;

/// Parse the VolumeID structure. Describes the volume the target lived on
pub(crate) fn parse_volume(data: &[u8]) -> Result<(&[u8], VolumeId), LnkError> {
    let (_, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

    // Sixteen (16) bytes of fixed fields must be followed by at least one label byte
    let min_size = 16;
    if size <= min_size {
        return Err(LnkError::MalformedStructure {
            structure: "VolumeID",
        });
    }
    if (data.len() as u64) < size as u64 {
        return Err(LnkError::BoundsViolation {
            structure: "VolumeID",
            offset: size,
            size: data.len() as u32,
        });
    }

    let (remaining_input, window) = nom_data(data, size as u64)?;
    let (input, _size) = nom_unsigned_four_bytes(window, Endian::Le)?;
    let (input, drive_type) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, drive_serial) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, label_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

    // Offset value 0x14 means the label lives behind a Unicode offset field instead
    let unicode_marker = 0x14;
    let volume_label = if label_offset == unicode_marker {
        let (_, unicode_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
        if unicode_offset >= size {
            return Err(LnkError::BoundsViolation {
                structure: "VolumeID",
                offset: unicode_offset,
                size,
            });
        }
        let (label_start, _) = nom_data(window, unicode_offset as u64)?;
        extract_utf16_string(label_start)
    } else {
        if label_offset >= size {
            return Err(LnkError::BoundsViolation {
                structure: "VolumeID",
                offset: label_offset,
                size,
            });
        }
        let (label_start, _) = nom_data(window, label_offset as u64)?;
        let (_, label_data) = take_while(|b| b != 0)(label_start)?;
        extract_utf8_string(label_data)
    };

    let volume = VolumeId {
        size,
        drive_type: get_drive_type(drive_type),
        drive_serial: format!("{drive_serial:X}"),
        label_offset,
        volume_label,
    };

    Ok((remaining_input, volume))
}

/// Get drive type of the volume
fn get_drive_type(drive_type: u32) -> DriveType {
    match drive_type {
        1 => DriveType::DriveNoRootDir,
        2 => DriveType::DriveRemovable,
        3 => DriveType::DriveFixed,
        4 => DriveType::DriveRemote,
        5 => DriveType::DriveCdrom,
        6 => DriveType::DriveRamdisk,
        _ => DriveType::DriveUnknown,
    }
}
