//! Rolling hash cursor over a borrowed DNA sequence.
//!
//! [`SeqHasher`] advances one base at a time through a sequence, maintaining
//! the forward, reverse-complement, and canonical ntHash of the current
//! k-mer window together with the window's validity.  Ambiguous bases
//! (anything outside A/C/G/T, either case) are not errors: they invalidate
//! the window, and the hash becomes valid again exactly k bases after the
//! last ambiguous base.
//!
//! The hasher does not own the sequence.  A caller streaming a long sequence
//! in chunks hands over each next chunk with [`SeqHasher::append_seq`]; the
//! up-to-k trailing bytes of the old chunk that still lie inside the window
//! are kept in a small carryover queue, so the rolling hashes continue
//! across the seam as if the chunks had been one contiguous string.
//!
//! Selector types ([`ModMin`](crate::ModMin), [`WindowMin`](crate::WindowMin),
//! [`Syncmer`](crate::Syncmer)) compose a `SeqHasher` rather than extending
//! it; the same rolling protocol drives the inner small-mer hash of the
//! syncmer scheme.

use std::collections::VecDeque;

use crate::nthash::{
    canonical, forward_hash, is_ambiguous, next_forward_hash, next_reverse_hash, reverse_hash,
};
use crate::{DigestError, Result};

/// Which of the three rolling hashes a digester minimizes over.
///
/// The discriminants match the original engine's configuration values
/// (0 = canonical, 1 = forward, 2 = reverse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MinimizedHash {
    /// `min(forward, reverse)`, strand-independent.
    #[default]
    Canonical = 0,
    /// Forward-strand hash only.
    Forward = 1,
    /// Reverse-complement-strand hash only.
    Reverse = 2,
}

/// Rolling k-mer hasher with ambiguity tracking and chunk-seam carryover.
///
/// Validity is a run counter: `run` counts the contiguous unambiguous bases
/// ending at the cursor, saturating at k.  `run < k` covers both the
/// not-yet-initialized and the invalidated-pending-reinit phases; `run == k`
/// means the three hashes describe the window starting at [`pos`](Self::pos).
#[derive(Clone, Debug)]
pub struct SeqHasher<'a> {
    seq: &'a [u8],
    k: u16,
    minimized_h: MinimizedHash,
    /// Buffer index of the next incoming base.
    end: usize,
    /// Length of the trailing unambiguous run, saturated at k.
    run: u16,
    /// Bytes of previous buffers still inside the window, oldest first.
    c_outs: VecDeque<u8>,
    /// Cumulative position of the current buffer's first byte.
    buf_cum: usize,
    fhash: u64,
    rhash: u64,
    chash: u64,
}

impl<'a> SeqHasher<'a> {
    /// Create a hasher over `seq`, ready to roll from `pos`.
    ///
    /// # Errors
    ///
    /// `BadConstruction` if `k == 0` or `pos >= seq.len()`.  A sequence
    /// shorter than k constructs successfully and simply never produces a
    /// valid hash.
    pub fn new(seq: &'a [u8], k: u16, pos: usize, minimized_h: MinimizedHash) -> Result<Self> {
        if k == 0 {
            return Err(DigestError::BadConstruction("k must be greater than 0"));
        }
        if pos >= seq.len() {
            return Err(DigestError::BadConstruction("pos is outside the sequence"));
        }
        Ok(Self {
            seq,
            k,
            minimized_h,
            end: pos,
            run: 0,
            c_outs: VecDeque::with_capacity(k as usize),
            buf_cum: 0,
            fhash: 0,
            rhash: 0,
            chash: 0,
        })
    }

    /// Advance by one base.
    ///
    /// Returns `true` iff the hash is valid after the step.  While a window
    /// is (re)initializing (at the start of a sequence, or within k bases
    /// after an ambiguous base) each step consumes one base and returns
    /// `false` until the run is complete.
    ///
    /// # Errors
    ///
    /// `OutOfRange` once the current buffer is consumed; call
    /// [`append_seq`](Self::append_seq) or [`new_seq`](Self::new_seq) first.
    pub fn roll_one(&mut self) -> Result<bool> {
        if self.at_end() {
            return Err(DigestError::OutOfRange);
        }
        Ok(self.step())
    }

    /// Infallible single-base advance; caller guarantees `!self.at_end()`.
    pub(crate) fn step(&mut self) -> bool {
        debug_assert!(!self.at_end());
        let incoming = self.seq[self.end];
        self.end += 1;
        if is_ambiguous(incoming) {
            self.run = 0;
            self.c_outs.clear();
        } else if self.run == self.k {
            let outgoing = match self.c_outs.pop_front() {
                Some(c) => c,
                None => self.seq[self.end - 1 - self.k as usize],
            };
            self.fhash = next_forward_hash(self.fhash, self.k, outgoing, incoming);
            self.rhash = next_reverse_hash(self.rhash, self.k, outgoing, incoming);
            self.chash = canonical(self.fhash, self.rhash);
        } else {
            self.run += 1;
            if self.run == self.k {
                self.rehash();
            }
        }
        self.is_valid_hash()
    }

    /// Recompute the base hashes over the freshly completed window
    /// (carryover bytes first, then the buffer part).
    fn rehash(&mut self) {
        let window = self
            .c_outs
            .iter()
            .copied()
            .chain(self.seq[self.tail_start()..self.end].iter().copied());
        self.fhash = forward_hash(window.clone());
        self.rhash = reverse_hash(window);
        self.chash = canonical(self.fhash, self.rhash);
    }

    /// Buffer index where the tracked window/run enters the current buffer.
    fn tail_start(&self) -> usize {
        self.end - (self.run as usize - self.c_outs.len())
    }

    /// True once every base of the current buffer has been consumed.
    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.end >= self.seq.len()
    }

    /// 0-indexed start of the current window within the cumulative sequence
    /// (spanning appends).  Before the hash is valid this is the position
    /// the next candidate window would start at.
    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.buf_cum + self.end - self.run as usize
    }

    /// Forward-strand hash; describes the window iff
    /// [`is_valid_hash`](Self::is_valid_hash).
    #[inline(always)]
    pub fn forward_hash(&self) -> u64 {
        self.fhash
    }

    /// Reverse-complement-strand hash; describes the window iff
    /// [`is_valid_hash`](Self::is_valid_hash).
    #[inline(always)]
    pub fn reverse_hash(&self) -> u64 {
        self.rhash
    }

    /// Canonical hash, `min(forward, reverse)`; describes the window iff
    /// [`is_valid_hash`](Self::is_valid_hash).
    #[inline(always)]
    pub fn canonical_hash(&self) -> u64 {
        self.chash
    }

    /// The hash configured for minimization.
    #[inline(always)]
    pub fn selected_hash(&self) -> u64 {
        match self.minimized_h {
            MinimizedHash::Canonical => self.chash,
            MinimizedHash::Forward => self.fhash,
            MinimizedHash::Reverse => self.rhash,
        }
    }

    /// Whether the three hashes describe the window at [`pos`](Self::pos).
    #[inline(always)]
    pub fn is_valid_hash(&self) -> bool {
        self.run == self.k
    }

    #[inline(always)]
    pub fn k(&self) -> u16 {
        self.k
    }

    /// Length of the current underlying buffer.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline(always)]
    pub fn minimized_h(&self) -> MinimizedHash {
        self.minimized_h
    }

    /// Bytes of the current window, carryover included, when the hash is
    /// valid.
    pub fn kmer(&self) -> Option<Vec<u8>> {
        if !self.is_valid_hash() {
            return None;
        }
        Some(
            self.c_outs
                .iter()
                .copied()
                .chain(self.seq[self.tail_start()..self.end].iter().copied())
                .collect(),
        )
    }

    /// Rebind the hasher to a fresh sequence, discarding all rolling state.
    ///
    /// # Errors
    ///
    /// `BadConstruction` if `pos >= seq.len()`.
    pub fn new_seq(&mut self, seq: &'a [u8], pos: usize) -> Result<()> {
        if pos >= seq.len() {
            return Err(DigestError::BadConstruction("pos is outside the sequence"));
        }
        self.seq = seq;
        self.end = pos;
        self.run = 0;
        self.c_outs.clear();
        self.buf_cum = 0;
        self.fhash = 0;
        self.rhash = 0;
        self.chash = 0;
        Ok(())
    }

    /// Logically concatenate `seq` to the end of the digested stream.
    ///
    /// The old buffer is no longer read afterwards: the trailing bytes that
    /// still lie inside the window are copied into the carryover queue, and
    /// rolling proceeds across the seam as if the buffers were contiguous.
    /// Cursor position and hash validity are preserved.
    ///
    /// # Errors
    ///
    /// `NotRolledTillEnd` unless the current buffer has been consumed.
    pub fn append_seq(&mut self, seq: &'a [u8]) -> Result<()> {
        if !self.at_end() {
            return Err(DigestError::NotRolledTillEnd);
        }
        let tail = self.tail_start();
        self.c_outs.extend(&self.seq[tail..]);
        self.buf_cum += self.seq.len();
        self.seq = seq;
        self.end = 0;
        Ok(())
    }
}
