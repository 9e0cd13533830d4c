use crate::shortcuts::error::LnkError;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_two_bytes};
use common::windows::{ItemId, TargetIdList};
use log::warn;

/// Parse the LinkTargetIDList. A two (2) byte total size followed by the item list
pub(crate) fn parse_target_idlist(data: &[u8]) -> Result<(&[u8], TargetIdList), LnkError> {
    let (input, list_size) = nom_unsigned_two_bytes(data, Endian::Le)?;

    if (input.len() as u64) < list_size as u64 {
        return Err(LnkError::BoundsViolation {
            structure: "LinkTargetIDList",
            offset: list_size as u32,
            size: input.len() as u32,
        });
    }
    let (remaining, list_data) = nom_data(input, list_size as u64)?;
    let idlist = parse_idlist(list_data)?;

    Ok((remaining, idlist))
}

/// Walk item IDs until only the two (2) byte terminator remains. The same
/// list shape appears in the Vista and above extra data block
pub(crate) fn parse_idlist(data: &[u8]) -> Result<TargetIdList, LnkError> {
    let mut items: Vec<ItemId> = Vec::new();

    let terminator_size = 2;
    if data.len() < terminator_size {
        warn!("[shortcuts] IDList too small for a terminator");
        return Ok(TargetIdList {
            items,
            terminator: 0,
        });
    }

    let mut input = data;
    while input.len() > terminator_size {
        let (rest, item_size) = nom_unsigned_two_bytes(input, Endian::Le)?;

        let min_item_size = 2;
        if item_size < min_item_size {
            return Err(LnkError::MalformedStructure { structure: "ItemID" });
        }

        // Item may not run into the terminator
        let payload_size = (item_size - min_item_size) as usize;
        if payload_size + terminator_size > rest.len() {
            return Err(LnkError::BoundsViolation {
                structure: "ItemID",
                offset: item_size as u32,
                size: rest.len() as u32,
            });
        }

        let (rest, item_data) = nom_data(rest, payload_size as u64)?;
        items.push(ItemId {
            size: item_size,
            data: item_data.to_vec(),
        });
        input = rest;
    }

    let (_, terminator) = nom_unsigned_two_bytes(input, Endian::Le)?;
    if terminator != 0 {
        warn!("[shortcuts] Non-zero IDList terminator: {terminator}");
    }

    Ok(TargetIdList { items, terminator })
}
