//! Window-minimizer scheme.
//!
//! Over every window of `w` consecutive valid k-mers, the k-mer with the
//! minimum selected hash is the window's minimizer; successive windows that
//! agree on the minimizer produce a single emission.  The sliding minimum is
//! maintained with a monotonic deque, one amortized push/pop per k-mer.
//!
//! Ties are broken toward the smaller position: back eviction is strictly
//! greater-than, so an equal hash already in the deque outranks a newcomer,
//! and the deque front is always the leftmost minimum of the window.

use std::collections::VecDeque;

use crate::minimizer::Minimizer;
use crate::{DigestError, MinimizedHash, Result, SeqHasher};

/// Window-minimizer digester.
///
/// # Example
///
/// ```rust
/// use digest_rs::{Minimizer, WindowMin, MinimizedHash};
///
/// // every 4-mer of AAAAAAAA hashes identically, so the leftmost
/// // tie-break makes each window select its first k-mer
/// let mut digester = WindowMin::new(b"AAAAAAAA", 4, 3, 0, MinimizedHash::Canonical)?;
/// assert_eq!(digester.roll_next_n_minimizers(8), vec![0, 1, 2]);
/// # Ok::<(), digest_rs::DigestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WindowMin<'a> {
    hasher: SeqHasher<'a>,
    w: usize,
    /// Monotonic (hash, position) deque over the current valid run.
    deque: VecDeque<(u64, usize)>,
    /// k-mers seen in the current contiguous valid run, saturating at `w`.
    filled: usize,
    last_emitted: Option<usize>,
    minimizer_pos: Option<usize>,
}

impl<'a> WindowMin<'a> {
    /// Create a window-minimizer over `seq` with a large window of `w`
    /// consecutive k-mers.
    ///
    /// # Errors
    ///
    /// `BadConstruction` if `w == 0`, `k == 0`, or `pos >= seq.len()`.
    pub fn new(
        seq: &'a [u8],
        k: u16,
        w: usize,
        pos: usize,
        minimized_h: MinimizedHash,
    ) -> Result<Self> {
        if w == 0 {
            return Err(DigestError::BadConstruction(
                "large window must be at least 1",
            ));
        }
        Ok(Self {
            hasher: SeqHasher::new(seq, k, pos, minimized_h)?,
            w,
            deque: VecDeque::with_capacity(w),
            filled: 0,
            last_emitted: None,
            minimizer_pos: None,
        })
    }

    /// The large-window size, in k-mers.
    #[inline(always)]
    pub fn window(&self) -> usize {
        self.w
    }

    /// Rebind to a fresh sequence, clearing the window state.
    pub fn new_seq(&mut self, seq: &'a [u8], pos: usize) -> Result<()> {
        self.hasher.new_seq(seq, pos)?;
        self.deque.clear();
        self.filled = 0;
        self.last_emitted = None;
        self.minimizer_pos = None;
        Ok(())
    }

    /// Stream the next chunk; window state carries across the seam.
    pub fn append_seq(&mut self, seq: &'a [u8]) -> Result<()> {
        self.hasher.append_seq(seq)
    }
}

impl Minimizer for WindowMin<'_> {
    fn hasher(&self) -> &SeqHasher<'_> {
        &self.hasher
    }

    fn roll_next_minimizer(&mut self) -> bool {
        while !self.hasher.at_end() {
            if !self.hasher.step() {
                // ambiguous base: the run is broken, the window refills
                self.deque.clear();
                self.filled = 0;
                continue;
            }
            let h = self.hasher.selected_hash();
            let p = self.hasher.pos();
            while matches!(self.deque.back(), Some(&(back, _)) if back > h) {
                self.deque.pop_back();
            }
            self.deque.push_back((h, p));
            let lo = (p + 1).saturating_sub(self.w);
            while matches!(self.deque.front(), Some(&(_, front)) if front < lo) {
                self.deque.pop_front();
            }
            if self.filled < self.w {
                self.filled += 1;
            }
            if self.filled == self.w {
                let (_, min_pos) = *self.deque.front().expect("deque holds the current k-mer");
                if self.last_emitted != Some(min_pos) {
                    self.last_emitted = Some(min_pos);
                    self.minimizer_pos = Some(min_pos);
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

/// Configure a [`WindowMin`] with chained setters.
pub struct WindowMinBuilder<'a> {
    seq: &'a [u8],
    k: u16,
    w: usize,
    pos: usize,
    minimized_h: MinimizedHash,
}

impl<'a> WindowMinBuilder<'a> {
    pub fn new(seq: &'a [u8]) -> Self {
        Self {
            seq,
            k: 0,
            w: 0,
            pos: 0,
            minimized_h: MinimizedHash::default(),
        }
    }

    /// Set the k-mer length.
    pub fn k(mut self, k: u16) -> Self {
        self.k = k;
        self
    }

    /// Set the large-window size, in k-mers.
    pub fn window(mut self, w: usize) -> Self {
        self.w = w;
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

    pub fn finish(self) -> Result<WindowMin<'a>> {
        WindowMin::new(self.seq, self.k, self.w, self.pos, self.minimized_h)
    }
}
