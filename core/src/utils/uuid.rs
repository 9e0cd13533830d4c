use crate::utils::nom_helper::{Endian, nom_unsigned_four_bytes, nom_unsigned_two_bytes};
use log::warn;
use uuid::Uuid;

/// Convert little endian bytes to a UUID/GUID string
pub(crate) fn format_guid_le_bytes(data: &[u8]) -> String {
    let guid_size = 16;
    if data.len() != guid_size {
        warn!(
            "[shortcuts] Provided little endian data does not meet GUID size of 16 bytes, got: {}",
            data.len()
        );
        return format!("Not a GUID/UUID: {data:?}");
    }

    let guid_data = data.try_into();
    match guid_data {
        Ok(result) => Uuid::from_bytes_le(result).hyphenated().to_string(),
        Err(_err) => {
            warn!(
                "[shortcuts] Could not convert little endian bytes to a GUID/UUID format: {data:?}"
            );
            format!("Could not convert data: {data:?}")
        }
    }
}

/// Extract the embedded creation time from a little endian version one (1) GUID.
/// Returns unixepoch seconds. Non-v1 GUIDs carry no timestamp
pub(crate) fn guid_v1_unixepoch(data: &[u8]) -> Option<i64> {
    let (input, time_low) = nom_unsigned_four_bytes(data, Endian::Le).ok()?;
    let (input, time_mid) = nom_unsigned_two_bytes(input, Endian::Le).ok()?;
    let (_, time_hi_and_version) = nom_unsigned_two_bytes(input, Endian::Le).ok()?;

    let version = time_hi_and_version >> 12;
    let v1 = 1;
    if version != v1 {
        return None;
    }

    // 100-nanosecond intervals since the Gregorian reform (1582-10-15)
    let intervals = (((time_hi_and_version & 0xfff) as u64) << 48)
        | ((time_mid as u64) << 32)
        | time_low as u64;

    let windows_nano = 10000000;
    let seconds_to_unix: i64 = 12219292800;
    Some((intervals / windows_nano) as i64 - seconds_to_unix)
}
