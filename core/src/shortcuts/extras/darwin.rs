use crate::shortcuts::error::LnkError;
use crate::utils::{nom_helper::nom_data, strings::extract_utf16_string};
use common::windows::DarwinProps;
use nom::bytes::complete::take_while;

/// Parse the darwin payload. A Windows Installer product identifier stored
/// as a 260 byte ANSI value and a 520 byte UTF16 value
pub(crate) fn parse_darwin(data: &[u8]) -> Result<DarwinProps, LnkError> {
    let ansi_size = 260;
    let unicode_size = 520;
    let (input, ansi_data) = nom_data(data, ansi_size)?;
    let (_, unicode_data) = nom_data(input, unicode_size)?;

    let end_of_string = 0;
    let (_, darwin_data_ansi) = take_while(|b| b != end_of_string)(ansi_data)?;

    Ok(DarwinProps {
        darwin_data_ansi: darwin_data_ansi.to_vec(),
        darwin_data_unicode: extract_utf16_string(unicode_data),
    })
}
