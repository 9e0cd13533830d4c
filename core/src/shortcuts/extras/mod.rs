use crate::shortcuts::error::LnkError;
use crate::utils::nom_helper::{Endian, nom_data, nom_unsigned_four_bytes};
use common::windows::{ExtraDataBlock, UnknownBlock};
use log::warn;

mod codepage;
mod console;
mod darwin;
mod environment;
mod items;
mod known;
mod property;
mod shim;
mod special;
mod tracker;

const ENVIRONMENT_PROPS: u32 = 0xa0000001;
const CONSOLE_PROPS: u32 = 0xa0000002;
const TRACKER_PROPS: u32 = 0xa0000003;
const CONSOLE_FE_PROPS: u32 = 0xa0000004;
const SPECIAL_FOLDER_PROPS: u32 = 0xa0000005;
const DARWIN_PROPS: u32 = 0xa0000006;
const ICON_ENVIRONMENT_PROPS: u32 = 0xa0000007;
const SHIM_PROPS: u32 = 0xa0000008;
const PROPERTY_STORE_PROPS: u32 = 0xa0000009;
const KNOWN_FOLDER_PROPS: u32 = 0xa000000b;
const VISTA_AND_ABOVE_IDLIST_PROPS: u32 = 0xa000000c;

/// Walk the extra data chain at the end of a shortcut. Each block carries
/// its own size, a zero size ends the chain. A size too small to hold the
/// size and signature fields can never advance and is fatal
pub(crate) fn parse_extra_data(data: &[u8]) -> Result<Vec<ExtraDataBlock>, LnkError> {
    let mut blocks: Vec<ExtraDataBlock> = Vec::new();
    let mut input = data;

    let size_field = 4;
    let block_header = 8;
    loop {
        if input.len() < size_field {
            if !input.is_empty() {
                warn!("[shortcuts] Extra data chain ends without a terminal block");
            }
            break;
        }
        let (_, block_size) = nom_unsigned_four_bytes(input, Endian::Le)?;
        if block_size == 0 {
            break;
        }
        if block_size as usize <= block_header {
            return Err(LnkError::MalformedExtraChain { size: block_size });
        }
        if block_size as u64 > input.len() as u64 {
            return Err(LnkError::BoundsViolation {
                structure: "ExtraData",
                offset: block_size,
                size: input.len() as u32,
            });
        }

        let (rest, window) = nom_data(input, block_size as u64)?;
        let (window, _size) = nom_unsigned_four_bytes(window, Endian::Le)?;
        let (payload, signature) = nom_unsigned_four_bytes(window, Endian::Le)?;

        let block = match signature {
            ENVIRONMENT_PROPS => {
                ExtraDataBlock::EnvironmentProps(environment::parse_environment(payload)?)
            }
            CONSOLE_PROPS => ExtraDataBlock::ConsoleProps(console::parse_console(payload)?),
            TRACKER_PROPS => ExtraDataBlock::TrackerProps(tracker::parse_tracker(payload)?),
            CONSOLE_FE_PROPS => {
                ExtraDataBlock::ConsoleFeProps(codepage::parse_codepage(payload)?)
            }
            SPECIAL_FOLDER_PROPS => {
                ExtraDataBlock::SpecialFolderProps(special::parse_special(payload)?)
            }
            DARWIN_PROPS => ExtraDataBlock::DarwinProps(darwin::parse_darwin(payload)?),
            ICON_ENVIRONMENT_PROPS => {
                ExtraDataBlock::IconEnvironmentProps(environment::parse_environment(payload)?)
            }
            SHIM_PROPS => ExtraDataBlock::ShimProps(shim::parse_shim(payload)?),
            PROPERTY_STORE_PROPS => {
                ExtraDataBlock::PropertyStoreProps(property::parse_property(payload)?)
            }
            KNOWN_FOLDER_PROPS => ExtraDataBlock::KnownFolderProps(known::parse_known(payload)?),
            VISTA_AND_ABOVE_IDLIST_PROPS => {
                ExtraDataBlock::VistaAndAboveIdListProps(items::parse_vista_idlist(payload)?)
            }
            _ => {
                warn!("[shortcuts] Unknown extra data block signature: {signature:#x}");
                ExtraDataBlock::Unknown(UnknownBlock {
                    signature,
                    data: payload.to_vec(),
                })
            }
        };

        blocks.push(block);
        input = rest;
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::error::LnkError;
    use crate::shortcuts::extras::parse_extra_data;
    use common::windows::ExtraDataBlock;

    #[test]
    fn test_parse_extra_data() {
        let mut test = Vec::new();
        // Special folder block
        test.extend_from_slice(&[16, 0, 0, 0, 5, 0, 0, 160, 38, 0, 0, 0, 177, 0, 0, 0]);
        // Tracker block
        test.extend_from_slice(&[96, 0, 0, 0, 3, 0, 0, 160]);
        test.extend_from_slice(&[
            88, 0, 0, 0, 0, 0, 0, 0, 100, 101, 115, 107, 116, 111, 112, 45, 101, 105, 115, 57, 51,
            56, 110, 0, 104, 69, 141, 62, 17, 228, 24, 73, 143, 120, 151, 205, 108, 179, 64, 197,
            192, 88, 241, 9, 106, 90, 237, 17, 161, 13, 8, 0, 39, 110, 180, 94, 104, 69, 141, 62,
            17, 228, 24, 73, 143, 120, 151, 205, 108, 179, 64, 197, 192, 88, 241, 9, 106, 90, 237,
            17, 161, 13, 8, 0, 39, 110, 180, 94,
        ]);
        // Terminal block
        test.extend_from_slice(&[0, 0, 0, 0]);

        let results = parse_extra_data(&test).unwrap();
        assert_eq!(results.len(), 2);
        match &results[0] {
            ExtraDataBlock::SpecialFolderProps(special) => {
                assert_eq!(special.special_folder_id, 38);
                assert_eq!(special.offset, 177);
            }
            _ => panic!("expected special folder block"),
        }
        match &results[1] {
            ExtraDataBlock::TrackerProps(tracker) => {
                assert_eq!(tracker.machine_id, "desktop-eis938n");
                assert_eq!(tracker.droid_file_created, "2022-11-02T04:51:39.000Z");
            }
            _ => panic!("expected tracker block"),
        }
    }

    #[test]
    fn test_parse_extra_data_unknown_signature() {
        let test = [
            12, 0, 0, 0, 0xff, 0, 0, 160, 1, 2, 3, 4, 0, 0, 0, 0,
        ];
        let results = parse_extra_data(&test).unwrap();
        assert_eq!(results.len(), 1);
        match &results[0] {
            ExtraDataBlock::Unknown(unknown) => {
                assert_eq!(unknown.signature, 0xa00000ff);
                assert_eq!(unknown.data, [1, 2, 3, 4]);
            }
            _ => panic!("expected unknown block"),
        }
    }

    #[test]
    fn test_parse_extra_data_stuck_chain() {
        let test = [8, 0, 0, 0, 5, 0, 0, 160, 38, 0, 0, 0];
        let result = parse_extra_data(&test);
        assert_eq!(result, Err(LnkError::MalformedExtraChain { size: 8 }));
    }

    #[test]
    fn test_parse_extra_data_missing_terminal() {
        let test = [16, 0, 0, 0, 5, 0, 0, 160, 38, 0, 0, 0, 177, 0, 0, 0];
        let results = parse_extra_data(&test).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_parse_extra_data_block_too_large() {
        let test = [200, 0, 0, 0, 5, 0, 0, 160, 38, 0, 0, 0, 177, 0, 0, 0];
        let result = parse_extra_data(&test);
        assert!(matches!(
            result,
            Err(LnkError::BoundsViolation {
                structure: "ExtraData",
                ..
            })
        ));
    }
}
