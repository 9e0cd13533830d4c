use crate::shortcuts::error::LnkError;
use crate::utils::{
    nom_helper::{Endian, nom_data, nom_unsigned_four_bytes},
    strings::extract_utf8_string,
};
use common::windows::{NetworkFlags, NetworkProviderType, NetworkRelativeLink};
use nom::bytes::complete::take_while;

/// Parse the CommonNetworkRelativeLink structure. Describes the mapped
/// network share the target lived on
pub(crate) fn parse_network(data: &[u8]) -> Result<(&[u8], NetworkRelativeLink), LnkError> {
    let (_, size) = nom_unsigned_four_bytes(data, Endian::Le)?;

    let header_size = 20;
    if size < header_size {
        return Err(LnkError::MalformedStructure {
            structure: "CommonNetworkRelativeLink",
        });
    }
    if (data.len() as u64) < size as u64 {
        return Err(LnkError::BoundsViolation {
            structure: "CommonNetworkRelativeLink",
            offset: size,
            size: data.len() as u32,
        });
    }

    let (remaining_input, window) = nom_data(data, size as u64)?;
    let (input, _size) = nom_unsigned_four_bytes(window, Endian::Le)?;
    let (input, flags_value) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, net_name_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (input, device_name_offset) = nom_unsigned_four_bytes(input, Endian::Le)?;
    let (_, provider) = nom_unsigned_four_bytes(input, Endian::Le)?;

    let flags = get_flags(&flags_value);

    let net_name = if flags.contains(&NetworkFlags::ValidNetType) {
        Some(read_name(window, net_name_offset, size)?)
    } else {
        None
    };

    let device_name = if flags.contains(&NetworkFlags::ValidDevice) {
        Some(read_name(window, device_name_offset, size)?)
    } else {
        None
    };

    let network = NetworkRelativeLink {
        size,
        flags,
        net_name_offset,
        device_name_offset,
        provider_type: get_provider_type(&provider),
        net_name,
        device_name,
    };

    Ok((remaining_input, network))
}

/// Read a NUL terminated name at an offset inside the structure
fn read_name(window: &[u8], offset: u32, size: u32) -> Result<String, LnkError> {
    if offset >= size {
        return Err(LnkError::BoundsViolation {
            structure: "CommonNetworkRelativeLink",
            offset,
            size,
        });
    }
    let (name_start, _) = nom_data(window, offset as u64)?;
    let end_of_string = 0;
    let (_, name_data) = take_while(|b| b != end_of_string)(name_start)?;
    Ok(extract_utf8_string(name_data))
}

/// Get validity flags for the network link
fn get_flags(flags: &u32) -> Vec<NetworkFlags> {
    let mut network_flags = Vec::new();

    let valid_device = 0x1;
    let valid_net_type = 0x2;
    if (flags & valid_device) == valid_device {
        network_flags.push(NetworkFlags::ValidDevice);
    }
    if (flags & valid_net_type) == valid_net_type {
        network_flags.push(NetworkFlags::ValidNetType);
    }
    network_flags
}

/// Get provider type for network device
fn get_provider_type(provider: &u32) -> NetworkProviderType {
    match provider {
        0x1a0000 => NetworkProviderType::WnncNetAvid,
        0x1b0000 => NetworkProviderType::WnncNetDocuspace,
        0x1c0000 => NetworkProviderType::WnncNetMangsoft,
        0x1d0000 => NetworkProviderType::WnncNetSernet,
        0x1e0000 => NetworkProviderType::WnncNetRiverFront1,
        0x1f0000 => NetworkProviderType::WnncNetRiverFront2,
        0x200000 => NetworkProviderType::WnncNetDecorb,
        0x210000 => NetworkProviderType::WnncNetProtstor,
        0x220000 => NetworkProviderType::WnncNetFjRedir,
        0x230000 => NetworkProviderType::WnncNetDistinct,
        0x240000 => NetworkProviderType::WnncNetTwins,
        0x250000 => NetworkProviderType::WnncNetRdr2Sample,
        0x260000 => NetworkProviderType::WnncNetCsc,
        0x270000 => NetworkProviderType::WnncNet3In1,
        0x290000 => NetworkProviderType::WnncNetExtendNet,
        0x2a0000 => NetworkProviderType::WnncNetStac,
        0x2b0000 => NetworkProviderType::WnncNetFoxbat,
        0x2c0000 => NetworkProviderType::WnncNetYahoo,
        0x2d0000 => NetworkProviderType::WnncNetExifs,
        0x2e0000 => NetworkProviderType::WnncNetDav,
        0x2f0000 => NetworkProviderType::WnncNetKnoware,
        0x300000 => NetworkProviderType::WnncNetObjectDire,
        0x310000 => NetworkProviderType::WnncNetMasfax,
        0x320000 => NetworkProviderType::WnncNetHobNfs,
        0x330000 => NetworkProviderType::WnncNetShiva,
        0x340000 => NetworkProviderType::WnncNetIbmal,
        0x350000 => NetworkProviderType::WnncNetLock,
        0x360000 => NetworkProviderType::WnncNetTermsrv,
        0x370000 => NetworkProviderType::WnncNetSrt,
        0x380000 => NetworkProviderType::WnncNetQuincy,
        0x390000 => NetworkProviderType::WnncNetOpenafs,
        0x3a0000 => NetworkProviderType::WnncNetAvid1,
        0x3b0000 => NetworkProviderType::WnncNetDfs,
        0x3c0000 => NetworkProviderType::WnncNetKwnp,
        0x3d0000 => NetworkProviderType::WnncNetZenworks,
        0x3e0000 => NetworkProviderType::WnncNetDriveOnWeb,
        0x3f0000 => NetworkProviderType::WnncNetVmware,
        0x400000 => NetworkProviderType::WnncNetRsfx,
        0x410000 => NetworkProviderType::WnncNetMfiles,
        0x420000 => NetworkProviderType::WnncNetMsNfs,
        0x430000 => NetworkProviderType::WnncNetGoogle,
        _ => NetworkProviderType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::error::LnkError;
    use crate::shortcuts::network::{get_flags, get_provider_type, parse_network};
    use common::windows::{NetworkFlags, NetworkProviderType};

    #[test]
    fn test_parse_network() {
        let test = [
            43, 0, 0, 0, 3, 0, 0, 0, 20, 0, 0, 0, 40, 0, 0, 0, 0, 0, 37, 0, 92, 92, 86, 66, 111,
            120, 83, 118, 114, 92, 68, 111, 119, 110, 108, 111, 97, 100, 115, 0, 90, 58, 0,
        ];
        let (_, results) = parse_network(&test).unwrap();
        assert_eq!(results.size, 43);
        assert_eq!(
            results.flags,
            [NetworkFlags::ValidDevice, NetworkFlags::ValidNetType]
        );
        assert_eq!(results.net_name_offset, 20);
        assert_eq!(results.device_name_offset, 40);
        assert_eq!(
            results.provider_type,
            NetworkProviderType::WnncNetRdr2Sample
        );
        assert_eq!(results.net_name, Some(String::from("\\\\VBoxSvr\\Downloads")));
        assert_eq!(results.device_name, Some(String::from("Z:")));
    }

    #[test]
    fn test_parse_network_no_device() {
        let test = [
            30, 0, 0, 0, 2, 0, 0, 0, 20, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 92, 92, 104, 111, 115,
            116, 92, 99, 36, 0,
        ];
        let (_, results) = parse_network(&test).unwrap();
        assert_eq!(results.flags, [NetworkFlags::ValidNetType]);
        assert_eq!(results.net_name, Some(String::from("\\\\host\\c$")));
        assert_eq!(results.device_name, None);
        assert_eq!(results.provider_type, NetworkProviderType::Unknown);
    }

    #[test]
    fn test_parse_network_offset_outside() {
        let test = [
            24, 0, 0, 0, 2, 0, 0, 0, 99, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 92, 92, 0, 0,
        ];
        let result = parse_network(&test);
        assert!(matches!(
            result,
            Err(LnkError::BoundsViolation {
                structure: "CommonNetworkRelativeLink",
                ..
            })
        ));
    }

    #[test]
    fn test_get_flags() {
        let test = 1;
        let result = get_flags(&test);
        assert_eq!(result, [NetworkFlags::ValidDevice]);
    }

    #[test]
    fn test_get_provider_type() {
        let test = 0x3f0000;
        let result = get_provider_type(&test);
        assert_eq!(result, NetworkProviderType::WnncNetVmware);
    }
}
