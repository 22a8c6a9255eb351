//! Modulo-minimizer scheme.
//!
//! The simplest digestion policy: a k-mer is kept iff its selected hash is
//! divisible by a configured modulus.  Expected density on random input is
//! `1 / modulus`, and the decision depends on nothing but the k-mer itself,
//! so the same k-mer is kept or dropped identically wherever it occurs.

use crate::minimizer::Minimizer;
use crate::{DigestError, MinimizedHash, Result, SeqHasher};

/// Modulo-minimizer digester.
///
/// # Example
///
/// ```rust
/// use digest_rs::{Minimizer, ModMin, MinimizedHash};
///
/// // modulus 1 keeps every valid k-mer
/// let mut digester = ModMin::new(b"ACGTACGT", 4, 1, 0, MinimizedHash::Canonical)?;
/// assert_eq!(digester.roll_next_n_minimizers(16), vec![0, 1, 2, 3, 4]);
/// # Ok::<(), digest_rs::DigestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ModMin<'a> {
    hasher: SeqHasher<'a>,
    modulus: u64,
    minimizer_pos: Option<usize>,
}

impl<'a> ModMin<'a> {
    /// Create a modulo-minimizer over `seq`.
    ///
    /// # Errors
    ///
    /// `BadConstruction` if `modulus == 0`, `k == 0`, or `pos >= seq.len()`.
    pub fn new(
        seq: &'a [u8],
        k: u16,
        modulus: u64,
        pos: usize,
        minimized_h: MinimizedHash,
    ) -> Result<Self> {
        if modulus == 0 {
            return Err(DigestError::BadConstruction("modulus must be greater than 0"));
        }
        Ok(Self {
            hasher: SeqHasher::new(seq, k, pos, minimized_h)?,
            modulus,
            minimizer_pos: None,
        })
    }

    #[inline(always)]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Rebind to a fresh sequence; see [`SeqHasher::new_seq`].
    pub fn new_seq(&mut self, seq: &'a [u8], pos: usize) -> Result<()> {
        self.hasher.new_seq(seq, pos)?;
        self.minimizer_pos = None;
        Ok(())
    }

    /// Stream the next chunk; see [`SeqHasher::append_seq`].
    pub fn append_seq(&mut self, seq: &'a [u8]) -> Result<()> {
        self.hasher.append_seq(seq)
    }
}

impl Minimizer for ModMin<'_> {
    fn hasher(&self) -> &SeqHasher<'_> {
        &self.hasher
    }

    fn roll_next_minimizer(&mut self) -> bool {
        while !self.hasher.at_end() {
            if self.hasher.step() && self.hasher.selected_hash() % self.modulus == 0 {
                self.minimizer_pos = Some(self.hasher.pos());
                return true;
            }
        }
        false
    }

    fn minimizer_pos(&self) -> Option<usize> {
        self.minimizer_pos
    }
}

/// Configure a [`ModMin`] with chained setters.
///
/// ```rust
/// use digest_rs::{Minimizer, ModMinBuilder};
///
/// let digester = ModMinBuilder::new(b"ACGTACGT").k(4).modulus(2).finish()?;
/// # Ok::<(), digest_rs::DigestError>(())
/// ```
pub struct ModMinBuilder<'a> {
    seq: &'a [u8],
    k: u16,
    modulus: u64,
    pos: usize,
    minimized_h: MinimizedHash,
}

impl<'a> ModMinBuilder<'a> {
    pub fn new(seq: &'a [u8]) -> Self {
        Self {
            seq,
            k: 0,
            modulus: 0,
            pos: 0,
            minimized_h: MinimizedHash::default(),
        }
    }

    /// Set the k-mer length.
    pub fn k(mut self, k: u16) -> Self {
        self.k = k;
        self
    }

    /// Set the selection modulus.
    pub fn modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Set the starting position.
    pub fn pos(mut self, pos: usize) -> Self {
        self.pos = pos;
        self
    }

    /// Choose which hash is minimized.
    pub fn minimized_h(mut self, minimized_h: MinimizedHash) -> Self {
        self.minimized_h = minimized_h;
        self
    }

    pub fn finish(self) -> Result<ModMin<'a>> {
        ModMin::new(self.seq, self.k, self.modulus, self.pos, self.minimized_h)
    }
}
