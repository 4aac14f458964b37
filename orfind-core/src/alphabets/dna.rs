use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

/// Uppercase `text` and rewrite every `T` as `U`.
///
/// Symbols outside the DNA alphabet are only uppercased, so an RNA or
/// ambiguous `ACG` sequence passes through as its uppercase form.
pub fn transcribe(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'T' => 'U',
            up => up,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
        assert!(alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"gaUUaca"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }

    #[test]
    fn transcribe_rewrites_t_and_case() {
        assert_eq!(transcribe("atgTAA"), "AUGUAA");
        assert_eq!(transcribe("aug"), "AUG");
        assert_eq!(transcribe(""), "");
    }
}
