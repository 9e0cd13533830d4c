use crate::shortcuts::error::LnkError;
use crate::utils::{nom_helper::nom_data, strings::extract_utf16_string};
use common::windows::EnvironmentProps;
use nom::bytes::complete::take_while;

/// Parse an environment variable payload. A 260 byte ANSI target followed
/// by a 520 byte UTF16 target. Shared by the icon environment block
pub(crate) fn parse_environment(data: &[u8]) -> Result<EnvironmentProps, LnkError> {
    let ansi_size = 260;
    let unicode_size = 520;
    let (input, ansi_data) = nom_data(data, ansi_size)?;
    let (_, unicode_data) = nom_data(input, unicode_size)?;

    let end_of_string = 0;
    let (_, target_ansi) = take_while(|b| b != end_of_string)(ansi_data)?;

    Ok(EnvironmentProps {
        target_ansi: target_ansi.to_vec(),
        target_unicode: extract_utf16_string(unicode_data),
    })
}
