use crate::alphabets::Alphabet;

/// Number of nucleotides in a codon.
pub const CODON_LEN: usize = 3;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGUacgu")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GAUUACA"));
        assert!(alphabet().is_word(b"gauuaca"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
    }

    #[test]
    fn number_is_no_word() {
        assert!(!alphabet().is_word(b"42"));
    }
}
