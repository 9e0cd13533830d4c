use crate::utils::{
    nom_helper::{
        Endian, nom_signed_four_bytes, nom_unsigned_eight_bytes, nom_unsigned_four_bytes,
        nom_unsigned_one_byte, nom_unsigned_two_bytes,
    },
    time::{filetime_to_unixepoch, unixepoch_to_iso},
    uuid::format_guid_le_bytes,
};
use common::windows::{AttributeFlags, HotKey, LinkFlags, ShellLinkHeader, ShowCommand};
use log::warn;
use nom::bytes::complete::take;
use std::mem::size_of;

/// Verify if provided bytes start with a shortcut header. Only needs the
/// four (4) size bytes to rule data out
pub(crate) fn check_header(data: &[u8]) -> nom::IResult<&[u8], bool> {
    let (input, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

    let header_size = 76;
    if size != header_size {
        return Ok((data, false));
    }

    let (_, guid_data) = take(size_of::<u128>())(input)?;
    let class_id = format_guid_le_bytes(guid_data);

    let header_id = "00021401-0000-0000-c000-000000000046";
    if class_id == header_id {
        return Ok((data, true));
    }
    Ok((data, false))
}

/// Parse the `Shortcut` file header. Contains target file size and target file created, modified, accessed timestamps
pub(crate) fn parse_header(data: &[u8]) -> nom::IResult<&[u8], ShellLinkHeader> {
    let (input, _size) = nom_unsigned_four_bytes(data, Endian::Le)?;
    let (input, _guid_data) = take(size_of::<u128>())(input)?;
    let (input, link_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, attribute_flags) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let (input, created_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
    let (input, access_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;
    let (input, modified_filetime) = nom_unsigned_eight_bytes(input, Endian::Le)?;

    let (input, file_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, icon_index) = nom_signed_four_bytes(input, Endian::Le)?;
    let (input, show_command) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, keycode) = nom_unsigned_one_byte(input, Endian::Le)?;
    let (input, modifier) = nom_unsigned_one_byte(input, Endian::Le)?;

    let (input, reserved1) = nom_unsigned_two_bytes(input, Endian::Le)?;
    let (input, reserved2) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, reserved3) = nom_unsigned_four_bytes(input, Endian::Le)?;

    if reserved1 != 0 || reserved2 != 0 || reserved3 != 0 {
        warn!("[shortcuts] Non-zero reserved header fields: {reserved1} {reserved2} {reserved3}");
    }

    let header = ShellLinkHeader {
        link_flags: get_flags(&link_flags),
        attribute_flags: get_attribute_flags(&attribute_flags),
        created: unixepoch_to_iso(filetime_to_unixepoch(&created_filetime)),
        accessed: unixepoch_to_iso(filetime_to_unixepoch(&access_filetime)),
        modified: unixepoch_to_iso(filetime_to_unixepoch(&modified_filetime)),
        file_size,
        icon_index,
        show_command: get_show_command(&show_command),
        hotkey: HotKey { keycode, modifier },
        reserved1,
        reserved2,
        reserved3,
    };

    Ok((input, header))
}

/// Get link flags from `Shortcut` header. Control if other structures are available
pub(crate) fn get_flags(flags: &u32) -> Vec<LinkFlags> {
    let masks = [
        (0x1, LinkFlags::HasTargetIdList),
        (0x2, LinkFlags::HasLinkInfo),
        (0x4, LinkFlags::HasName),
        (0x8, LinkFlags::HasRelativePath),
        (0x10, LinkFlags::HasWorkingDirectory),
        (0x20, LinkFlags::HasArguments),
        (0x40, LinkFlags::HasIconLocation),
        (0x80, LinkFlags::IsUnicode),
        (0x100, LinkFlags::ForceNoLinkInfo),
        (0x200, LinkFlags::HasExpString),
        (0x400, LinkFlags::RunInSeparateProcess),
        (0x800, LinkFlags::HasLogo3Id),
        (0x1000, LinkFlags::HasDarwinId),
        (0x2000, LinkFlags::RunAsUser),
        (0x4000, LinkFlags::HasExpIcon),
        (0x8000, LinkFlags::NoPidlAlias),
        (0x10000, LinkFlags::ForceUncName),
        (0x20000, LinkFlags::RunWithShimLayer),
        (0x40000, LinkFlags::ForceNoLinkTrack),
        (0x80000, LinkFlags::EnableTargetMetadata),
        (0x100000, LinkFlags::DisableLinkPathTracking),
        (0x200000, LinkFlags::DisableKnownFolderTracking),
        (0x400000, LinkFlags::DisableKnownFolderAlias),
        (0x800000, LinkFlags::AllowLinkToLink),
        (0x1000000, LinkFlags::UnaliasOnSave),
        (0x2000000, LinkFlags::PreferEnvironmentPath),
        (0x4000000, LinkFlags::KeepLocalIdListForUncTarget),
        (0x8000000, LinkFlags::PersistVolumeIdRelative),
    ];

    let mut lnk_flags = Vec::new();
    // A shortcut file may have multiple flags
    for (mask, flag) in masks {
        if (flags & mask) == mask {
            lnk_flags.push(flag);
        }
    }
    lnk_flags
}

/// Get the target's filesystem attribute flags
fn get_attribute_flags(flags: &u32) -> Vec<AttributeFlags> {
    let masks = [
        (0x1, AttributeFlags::ReadOnly),
        (0x2, AttributeFlags::Hidden),
        (0x4, AttributeFlags::System),
        (0x8, AttributeFlags::Volume),
        (0x10, AttributeFlags::Directory),
        (0x20, AttributeFlags::Archive),
        (0x40, AttributeFlags::Device),
        (0x80, AttributeFlags::Normal),
        (0x100, AttributeFlags::Temporary),
        (0x200, AttributeFlags::SparseFile),
        (0x400, AttributeFlags::ReparsePoint),
        (0x800, AttributeFlags::Compressed),
        (0x1000, AttributeFlags::Offline),
        (0x2000, AttributeFlags::NotContentIndexed),
        (0x4000, AttributeFlags::Encrypted),
    ];

    let mut attrs = Vec::new();
    for (mask, flag) in masks {
        if (flags & mask) == mask {
            attrs.push(flag);
        }
    }
    attrs
}

/// Window activation for the launched target. Any other value means a normal window
fn get_show_command(value: &u32) -> ShowCommand {
    match value {
        3 => ShowCommand::ShowMaximized,
        7 => ShowCommand::ShowMinNoActive,
        _ => ShowCommand::ShowNormal,
    }
}
