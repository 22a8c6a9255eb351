//! The selector protocol shared by all digestion schemes.
//!
//! A selector owns a [`SeqHasher`] and layers a small state machine over the
//! stream of k-mer hashes it produces, committing a sparse subset of k-mer
//! positions as minimizers.  The three schemes ([`ModMin`](crate::ModMin),
//! [`WindowMin`](crate::WindowMin), [`Syncmer`](crate::Syncmer)) implement
//! the [`Minimizer`] trait; callers
//! that do not care which scheme is active can hold a `dyn Minimizer`.

use crate::SeqHasher;

/// A digestion scheme: advance the underlying hasher until the next
/// minimizer commits.
pub trait Minimizer {
    /// The rolling hasher this selector drives.
    ///
    /// All cursor state (current position, the three hashes, validity,
    /// k, buffer length) is read through here.
    fn hasher(&self) -> &SeqHasher<'_>;

    /// Advance until the next minimizer position commits.
    ///
    /// Returns `true` iff a minimizer was emitted; its position is then
    /// available from [`minimizer_pos`](Self::minimizer_pos).  Returns
    /// `false` once the current buffer is exhausted; after
    /// `append_seq`, rolling resumes where it left off.
    fn roll_next_minimizer(&mut self) -> bool;

    /// Position of the most recently committed minimizer, in cumulative
    /// coordinates, or `None` if none has been emitted yet.
    fn minimizer_pos(&self) -> Option<usize>;

    /// Roll up to `n` further minimizers, returning their positions in
    /// emission order.  Fewer than `n` are returned when the buffer runs
    /// out first.
    fn roll_next_n_minimizers(&mut self, n: usize) -> Vec<usize> {
        let mut positions = Vec::new();
        while positions.len() < n && self.roll_next_minimizer() {
            if let Some(p) = self.minimizer_pos() {
                positions.push(p);
            }
        }
        positions
    }

    /// Consume the selector, iterating the remaining minimizer positions.
    fn positions(self) -> Positions<Self>
    where
        Self: Sized,
    {
        Positions { inner: self }
    }
}

/// Iterator over the minimizer positions of a selector.
///
/// The counterpart of the builder-plus-iterator facade used by rolling-hash
/// crates: each `next` rolls the selector to its next committed minimizer.
pub struct Positions<M> {
    inner: M,
}

impl<M: Minimizer> Iterator for Positions<M> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.roll_next_minimizer() {
            self.inner.minimizer_pos()
        } else {
            None
        }
    }
}

impl<M: Minimizer> Positions<M> {
    /// The selector being iterated, e.g. to `append_seq` after exhaustion.
    pub fn get_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Give the selector back.
    pub fn into_inner(self) -> M {
        self.inner
    }
}
