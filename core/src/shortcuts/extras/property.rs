use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_data, nom_unsigned_four_bytes},
    uuid::format_guid_le_bytes,
};
use common::windows::{PropertyStore, PropertyStoreProps};
use log::warn;
use nom::bytes::complete::take;
use std::mem::size_of;

/// Parse the property store payload. A sequence of serialized property
/// storages ended by a zero size. Property values stay opaque
pub(crate) fn parse_property(data: &[u8]) -> Result<PropertyStoreProps, LnkError> {
    let mut stores: Vec<PropertyStore> = Vec::new();
    let mut input = data;

    let size_field = 4;
    // Storage size field + version + format GUID
    let envelope_size = 24;
    while input.len() >= size_field {
        let (_, storage_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        if storage_size == 0 {
            break;
        }
        if (storage_size as usize) < envelope_size || storage_size as u64 > input.len() as u64 {
            return Err(LnkError::MalformedStructure {
                structure: "SerializedPropertyStorage",
            });
        }

        let (rest, window) = nom_data(input, storage_size as u64)?;
        let (store_input, _size) = nom_unsigned_four_bytes(window, Endian::Le)?;
        let (store_input, version) = nom_unsigned_four_bytes(store_input, Endian::Le)?;
        let (values, guid_data) = take(size_of::<u128>())(store_input)?;

        // "1SPS"
        let expected_version = 0x53505331;
        if version != expected_version {
            warn!("[shortcuts] Unexpected property storage version: {version:#x}");
        }

        stores.push(PropertyStore {
            storage_size,
            version,
            format_id: format_guid_le_bytes(guid_data),
            values: values.to_vec(),
        });
        input = rest;
    }

    Ok(PropertyStoreProps { stores })
}
