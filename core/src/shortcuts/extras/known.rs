use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_unsigned_four_bytes},
    uuid::format_guid_le_bytes,
};
use common::windows::KnownFolderProps;
use nom::bytes::complete::take;
use std::mem::size_of;

/// Parse the known folder payload. A folder GUID plus the offset of the
/// matching item in the target ID list
pub(crate) fn parse_known(data: &[u8]) -> Result<KnownFolderProps, LnkError> {
    let (input, guid_data) = take(size_of::<u128>())(data)?;
    let (_, offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let known = KnownFolderProps {
        known_folder_id: format_guid_le_bytes(guid_data),
        offset,
    };

    Ok(known)
}
