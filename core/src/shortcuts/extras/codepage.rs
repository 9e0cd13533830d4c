use crate::shortcuts::error::LnkError;
use crate::utils::nom_helper::{Endian, nom_unsigned_four_bytes};
use common::windows::ConsoleFeProps;

/// Parse the console far east payload. Just the code page for the console
pub(crate) fn parse_codepage(data: &[u8]) -> Result<ConsoleFeProps, LnkError> {
    let (_, code_page) = nom_unsigned_four_bytes(data, Endian::Le)?;
    Ok(ConsoleFeProps { code_page })
}
