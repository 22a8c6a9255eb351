//! Syncmer scheme.
//!
//! A k-mer is a syncmer iff the minimum-hash small-mer (s-mer, `s < k`)
//! among the `w = k - s + 1` s-mers it contains sits at a designated offset:
//! the leftmost, the rightmost, or either end.  Unlike window-minimizers the
//! decision depends only on the k-mer's own content, so syncmer sets are
//! context-free and conserved under substring extraction.
//!
//! The selector runs a second [`SeqHasher`] with window length `s` in
//! lockstep with the outer k-hasher: both consume the same incoming base on
//! every step, so the s-mer cursor leads the k-mer cursor by `w - 1`
//! positions and the s-mer window of a k-mer completes on exactly the step
//! that completes the k-mer itself.  Ambiguity handling comes along for
//! free: a base that invalidates any s-mer also invalidates the k-mer.

use std::collections::VecDeque;

use crate::minimizer::Minimizer;
use crate::{DigestError, MinimizedHash, Result, SeqHasher};

/// Which s-mer offsets make a k-mer a syncmer.
///
/// Ties among equal s-mer hashes resolve to the leftmost position before
/// the offset test is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SyncmerPolicy {
    /// Minimum s-mer at offset 0 ("closed" syncmers anchored left).
    #[default]
    First,
    /// Minimum s-mer at offset `w - 1`.
    Last,
    /// Minimum s-mer at offset 0 or `w - 1`.
    Either,
}

/// Syncmer digester.
///
/// # Example
///
/// ```rust
/// use digest_rs::{Minimizer, Syncmer, SyncmerPolicy, MinimizedHash};
///
/// // every 2-mer of AAAAAAAA hashes identically, so the leftmost minimum
/// // sits at offset 0 of every k-mer: all of them are First-syncmers ...
/// let mut first = Syncmer::new(
///     b"AAAAAAAA", 4, 2, SyncmerPolicy::First, 0, MinimizedHash::Canonical)?;
/// assert_eq!(first.roll_next_n_minimizers(8), vec![0, 1, 2, 3, 4]);
///
/// // ... and none of them is a Last-syncmer
/// let mut last = Syncmer::new(
///     b"AAAAAAAA", 4, 2, SyncmerPolicy::Last, 0, MinimizedHash::Canonical)?;
/// assert_eq!(last.roll_next_n_minimizers(8), vec![]);
/// # Ok::<(), digest_rs::DigestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Syncmer<'a> {
    hasher: SeqHasher<'a>,
    small: SeqHasher<'a>,
    /// Number of s-mers per k-mer window, `k - s + 1`.
    w: usize,
    policy: SyncmerPolicy,
    /// Monotonic (hash, position) deque over recent valid s-mers.
    deque: VecDeque<(u64, usize)>,
    minimizer_pos: Option<usize>,
}

impl<'a> Syncmer<'a> {
    /// Create a syncmer digester over `seq` with small-mer length `s`.
    ///
    /// # Errors
    ///
    /// `BadConstruction` if `s == 0` or `s >= k`, if `k == 0`, or if
    /// `pos >= seq.len()`.
    pub fn new(
        seq: &'a [u8],
        k: u16,
        s: u16,
        policy: SyncmerPolicy,
        pos: usize,
        minimized_h: MinimizedHash,
    ) -> Result<Self> {
        if s == 0 || s >= k {
            return Err(DigestError::BadConstruction(
                "small-mer length must satisfy 1 <= s < k",
            ));
        }
        Ok(Self {
            hasher: SeqHasher::new(seq, k, pos, minimized_h)?,
            small: SeqHasher::new(seq, s, pos, minimized_h)?,
            w: (k - s + 1) as usize,
            policy,
            deque: VecDeque::with_capacity((k - s + 1) as usize),
            minimizer_pos: None,
        })
    }

    /// The small-mer length.
    #[inline(always)]
    pub fn small_k(&self) -> u16 {
        self.small.k()
    }

    #[inline(always)]
    pub fn policy(&self) -> SyncmerPolicy {
        self.policy
    }

    /// Rebind to a fresh sequence, clearing the s-mer window.
    pub fn new_seq(&mut self, seq: &'a [u8], pos: usize) -> Result<()> {
        self.hasher.new_seq(seq, pos)?;
        self.small.new_seq(seq, pos)?;
        self.deque.clear();
        self.minimizer_pos = None;
        Ok(())
    }

    /// Stream the next chunk; both hashers cross the seam together.
    pub fn append_seq(&mut self, seq: &'a [u8]) -> Result<()> {
        self.hasher.append_seq(seq)?;
        self.small.append_seq(seq)
    }
}

impl Minimizer for Syncmer<'_> {
    fn hasher(&self) -> &SeqHasher<'_> {
        &self.hasher
    }

    fn roll_next_minimizer(&mut self) -> bool {
        while !self.hasher.at_end() {
            // both hashers consume the same incoming base
            let kmer_ok = self.hasher.step();
            let smer_ok = self.small.step();
            if smer_ok {
                let h = self.small.selected_hash();
                let q = self.small.pos();
                while matches!(self.deque.back(), Some(&(back, _)) if back > h) {
                    self.deque.pop_back();
                }
                self.deque.push_back((h, q));
                // s-mers left of the k-mer at q - w + 1 can never be seen again
                let lo = q.saturating_sub(self.w - 1);
                while matches!(self.deque.front(), Some(&(_, front)) if front < lo) {
                    self.deque.pop_front();
                }
            }
            if kmer_ok {
                let p = self.hasher.pos();
                let (_, min_pos) = *self.deque.front().expect("s-mer window is complete");
                let hit = match self.policy {
                    SyncmerPolicy::First => min_pos == p,
                    SyncmerPolicy::Last => min_pos == p + self.w - 1,
                    SyncmerPolicy::Either => min_pos == p || min_pos == p + self.w - 1,
                };
                if hit {
                    self.minimizer_pos = Some(p);
                    return true;
                }
            }
        }
        false
    }

    fn minimizer_pos(&self) -> Option<usize> {
        self.minimizer_pos
    }
}

/// Configure a [`Syncmer`] with chained setters.
///
/// ```rust
/// use digest_rs::{Minimizer, SyncmerBuilder, SyncmerPolicy};
///
/// let digester = SyncmerBuilder::new(b"ACGTACGTACGT")
///     .k(8)
///     .small_k(4)
///     .policy(SyncmerPolicy::Either)
///     .finish()?;
/// # Ok::<(), digest_rs::DigestError>(())
/// ```
pub struct SyncmerBuilder<'a> {
    seq: &'a [u8],
    k: u16,
    s: u16,
    policy: SyncmerPolicy,
    pos: usize,
    minimized_h: MinimizedHash,
}

impl<'a> SyncmerBuilder<'a> {
    pub fn new(seq: &'a [u8]) -> Self {
        Self {
            seq,
            k: 0,
            s: 0,
            policy: SyncmerPolicy::default(),
            pos: 0,
            minimized_h: MinimizedHash::default(),
        }
    }

    /// Set the k-mer length.
    pub fn k(mut self, k: u16) -> Self {
        self.k = k;
        self
    }

    /// Set the small-mer length.
    pub fn small_k(mut self, s: u16) -> Self {
        self.s = s;
        self
    }

    /// Choose the qualifying s-mer offsets (defaults to
    /// [`SyncmerPolicy::First`]).
    pub fn policy(mut self, policy: SyncmerPolicy) -> Self {
        self.policy = policy;
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

    pub fn finish(self) -> Result<Syncmer<'a>> {
        Syncmer::new(
            self.seq,
            self.k,
            self.s,
            self.policy,
            self.pos,
            self.minimized_h,
        )
    }
}
