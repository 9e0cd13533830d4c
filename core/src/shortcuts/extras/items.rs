use crate::shortcuts::error::LnkError;
use crate::shortcuts::idlist::parse_idlist;
use common::windows::VistaIdListProps;

/// Parse the Vista and above payload. A complete item ID list, decoded with
/// the same budget rules as the header-announced one
pub(crate) fn parse_vista_idlist(data: &[u8]) -> Result<VistaIdListProps, LnkError> {
    let idlist = parse_idlist(data)?;
    Ok(VistaIdListProps { idlist })
}

#[cfg(test)]
mod tests {
    use crate::shortcuts::extras::items::parse_vista_idlist;

    #[test]
    fn test_parse_vista_idlist() {
        let test = [5, 0, 31, 80, 224, 4, 0, 10, 20, 0, 0];
        let result = parse_vista_idlist(&test).unwrap();
        assert_eq!(result.idlist.items.len(), 2);
        assert_eq!(result.idlist.items[0].data, [31, 80, 224]);
        assert_eq!(result.idlist.items[1].data, [10, 20]);
        assert_eq!(result.idlist.terminator, 0);
    }
}
