//! ASCII-space tokenizer.
//!
//! Splits on the single 0x20 byte, yields non-empty zero-copy subviews of
//! the input, and exposes a control-byte check that callers use to raise
//! the context-appropriate error (`InvalidWord`, `InvalidQuerySymbol`,
//! `InvalidStopWord`) — the tokenizer itself stays single-purpose and
//! context-free, same as `WhitespaceTokenizer` in the storage engine's
//! text index, minus the lowercasing/length-filtering this spec doesn't ask for.

/// Splits `text` on ASCII space, discarding empty runs from consecutive or
/// leading/trailing spaces. No allocation: every yielded token borrows `text`.
pub(crate) fn split(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|token| !token.is_empty())
}

/// True if `token` contains a byte in `[0x00, 0x1F]`.
pub(crate) fn has_control_byte(token: &str) -> bool {
    token.bytes().any(|b| b < 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_single_space_and_skips_empties() {
        let tokens: Vec<&str> = split("  funny   pet  and  nasty rat ").collect();
        assert_eq!(tokens, vec!["funny", "pet", "and", "nasty", "rat"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(split("").count(), 0);
        assert_eq!(split("     ").count(), 0);
    }

    #[test]
    fn tokens_borrow_the_input() {
        let text = String::from("alpha beta");
        let tokens: Vec<&str> = split(&text).collect();
        assert_eq!(tokens[0].as_ptr(), text.as_str()[0..].as_ptr());
    }

    #[test]
    fn detects_control_bytes() {
        assert!(has_control_byte("bad\u{0007}word"));
        assert!(!has_control_byte("goodword"));
    }
}
