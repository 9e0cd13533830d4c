use crate::shortcuts::error::LnkError;
use crate::utils::strings::extract_utf16_string;
use common::windows::ShimProps;

/// Parse the shim payload. A UTF16 compatibility layer name fills the block
pub(crate) fn parse_shim(data: &[u8]) -> Result<ShimProps, LnkError> {
    Ok(ShimProps {
        layer_name: extract_utf16_string(data),
    })
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::extras::shim::parse_shim;

    #[test]
    fn test_parse_shim() {
        let test = [
            103, 0, 105, 0, 109, 0, 109, 0, 101, 0, 32, 0, 109, 0, 111, 0, 114, 0, 101, 0, 32, 0,
            108, 0, 110, 0, 107, 0, 115, 0, 33, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0,
        ];

        let result = parse_shim(&test).unwrap();
        assert_eq!(result.layer_name, "gimme more lnks!");
    }
}
