pub mod dna;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;

#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Position and symbol of the first byte of `text` outside the alphabet.
    pub fn first_foreign(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .enumerate()
            .find(|&(_, &b)| !self.contains(b))
            .map(|(pos, &b)| (pos, b))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn union(&self, other: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.union(&other.symbols).collect(),
        }
    }
}
