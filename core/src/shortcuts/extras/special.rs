use crate::shortcuts::error::LnkError;
use crate::utils::nom_helper::{Endian, nom_unsigned_four_bytes};
use common::windows::SpecialFolderProps;

/// Parse the special folder payload. A folder ID plus the offset of the
/// matching item in the target ID list
pub(crate) fn parse_special(data: &[u8]) -> Result<SpecialFolderProps, LnkError> {
    let (input, special_folder_id) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (_, offset) = nom_unsigned_four_bytes(input, Endian::Le)?;

    Ok(SpecialFolderProps {
        special_folder_id,
        offset,
    })
}
