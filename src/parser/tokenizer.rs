//! Block tokenizer for parameter file text

use crate::constants::BLOCK_DELIMITER;

/// Split parameter file text into raw blocks.
///
/// Text before the first `##` is discarded. Adjacent delimiters yield empty
/// blocks, which are kept here and dropped by the decoder.
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut blocks = text.split(BLOCK_DELIMITER);
    blocks.next();
    blocks.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_discarded() {
        let blocks = split_blocks("preamble\n##A=1\n##B=2\n");
        assert_eq!(blocks, vec!["A=1\n", "B=2\n"]);
    }

    #[test]
    fn test_empty_blocks_preserved() {
        let blocks = split_blocks("##A=1\n####B=2");
        assert_eq!(blocks, vec!["A=1\n", "", "B=2"]);
    }

    #[test]
    fn test_text_without_delimiter() {
        assert!(split_blocks("no parameters here").is_empty());
        assert!(split_blocks("").is_empty());
    }
}
