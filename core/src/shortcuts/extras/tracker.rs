use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    strings::extract_utf8_string,
    time::unixepoch_to_iso,
    uuid::{format_guid_le_bytes, guid_v1_unixepoch},
};
use common::windows::TrackerProps;
use log::warn;
use nom::bytes::complete::take;
use std::mem::size_of;

/// Parse the distributed link tracker payload. The file droid is a version
/// one (1) GUID, its embedded time is the target creation instant
pub(crate) fn parse_tracker(data: &[u8]) -> Result<TrackerProps, LnkError> {
    let (input, length) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, version) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let expected_length = 88;
    if length != expected_length {
        warn!("[shortcuts] Unexpected tracker data length: {length}");
    }

    let (input, machine_data) = take(size_of::<u128>())(input)?;
    let (input, droid_volume) = take(size_of::<u128>())(input)?;
    let (input, droid_file) = take(size_of::<u128>())(input)?;
    let (input, birth_volume) = take(size_of::<u128>())(input)?;
    let (_, birth_file) = take(size_of::<u128>())(input)?;

    let droid_file_created = match guid_v1_unixepoch(droid_file) {
        Some(timestamp) => unixepoch_to_iso(timestamp),
        None => String::new(),
    };

    let tracker = TrackerProps {
        length,
        version,
        machine_id: extract_utf8_string(machine_data),
        droid_volume_id: format_guid_le_bytes(droid_volume),
        droid_file_id: format_guid_le_bytes(droid_file),
        birth_droid_volume_id: format_guid_le_bytes(birth_volume),
        birth_droid_file_id: format_guid_le_bytes(birth_file),
        droid_file_created,
    };

    Ok(tracker)
}
