//! # digest-rs
//!
//! A streaming k-mer digestion engine for DNA sequences, built on a rolling
//! ntHash core.  Given a sequence, supplied whole or streamed in chunks,
//! it selects a sparse, reproducible subset of k-mer positions under one of
//! three schemes:
//!
//! - [`ModMin`]: keep k-mers whose hash is divisible by a modulus;
//! - [`WindowMin`]: keep the minimum-hash k-mer of every window of `w`
//!   consecutive k-mers, leftmost on ties;
//! - [`Syncmer`]: keep k-mers whose minimum-hash small-mer sits at a
//!   designated offset.
//!
//! All schemes roll forward, reverse-complement, and canonical 64-bit
//! hashes one base at a time, skip windows containing ambiguous bases
//! (`N` or anything else outside A/C/G/T, either case), and keep rolling
//! seamlessly across chunk boundaries fed in with `append_seq`.
//!
//! ## Example
//!
//! ```rust
//! use digest_rs::{Minimizer, ModMinBuilder, Result};
//!
//! fn main() -> Result<()> {
//!     // modulus 1 keeps every valid 4-mer; the N blacks out the
//!     // windows overlapping it
//!     let mut digester = ModMinBuilder::new(b"ACGTNACGT").k(4).modulus(1).finish()?;
//!
//!     let mut positions = Vec::new();
//!     while digester.roll_next_minimizer() {
//!         positions.extend(digester.minimizer_pos());
//!     }
//!     assert_eq!(positions, vec![0, 5]);
//!     Ok(())
//! }
//! ```

/// Per-base seed tables and the O(1) rolling-hash arithmetic.
// Not re-exported: selectors and the hasher are the public surface.
mod nthash;

/// Rolling hash cursor with ambiguity tracking and chunk-seam carryover.
pub mod hasher;
/// The selector protocol shared by all schemes.
pub mod minimizer;
/// Modulo-minimizer scheme.
pub mod mod_min;
/// Syncmer scheme.
pub mod syncmer;
/// Window-minimizer scheme.
pub mod window_min;

// ──────────────────────────────────────────────────────────────
// Re-exports: public API surface
// --------------------------------------------------------------------------

/// Rolling k-mer hash cursor.
///
/// See [`hasher::SeqHasher`] for full documentation.
pub use hasher::SeqHasher;
pub use hasher::MinimizedHash;

/// Selector protocol and its iterator facade.
pub use minimizer::Minimizer;
pub use minimizer::Positions;

pub use mod_min::ModMin;
pub use mod_min::ModMinBuilder;

pub use window_min::WindowMin;
pub use window_min::WindowMinBuilder;

pub use syncmer::Syncmer;
pub use syncmer::SyncmerBuilder;
pub use syncmer::SyncmerPolicy;

// ──────────────────────────────────────────────────────────────
// Crate-wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate's operations.
pub type Result<T, E = DigestError> = std::result::Result<T, E>;

/// Errors reported by digester construction and streaming.
///
/// Ambiguous bases are *not* errors: they invalidate the
/// rolling hash, and selectors skip over them silently.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Invalid construction parameter: `k == 0`, a start position outside
    /// the sequence, or a scheme parameter out of range (zero modulus,
    /// zero window, small-mer length not in `1..k`).
    #[error("bad construction: {0}")]
    BadConstruction(&'static str),

    /// `append_seq` was called before the current buffer was consumed.
    #[error("sequence must be rolled to its end before appending")]
    NotRolledTillEnd,

    /// `roll_one` was called past the end of the current buffer.
    #[error("rolled past the end of the sequence")]
    OutOfRange,
}
