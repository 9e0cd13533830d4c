use super::error::LnkError;
use super::extras::parse_extra_data;
use super::header::parse_header;
use super::idlist::parse_target_idlist;
use super::location::parse_link_info;
use super::strings::parse_string_data;
use common::windows::{LinkFlags, LnkFile};

/// Assemble a `LnkFile` from raw shortcut bytes. The sections appear in a fixed
/// file order, each one present only when the header flags say so
pub(crate) fn get_lnk_file(data: &[u8]) -> Result<LnkFile, LnkError> {
    let (mut input, header) = parse_header(data)?;

    let mut target_idlist = None;
    if header.link_flags.contains(&LinkFlags::HasTargetIdList) {
        let (remaining_input, idlist) = parse_target_idlist(input)?;
        input = remaining_input;
        target_idlist = Some(idlist);
    }

    let mut link_info = None;
    if header.link_flags.contains(&LinkFlags::HasLinkInfo) {
        let (remaining_input, info) = parse_link_info(input)?;
        input = remaining_input;
        link_info = Some(info);
    }

    let (input, string_data) = parse_string_data(input, &header.link_flags)?;
    let extra_data = parse_extra_data(input)?;

    Ok(LnkFile {
        source_path: String::new(),
        header,
        target_idlist,
        link_info,
        string_data,
        extra_data,
    })
}
