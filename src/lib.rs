//! # Adaptive Huffman coding (FGK)
//!
//! *One-pass entropy coding that learns the code while the data streams.*
//!
//! ## Intuition First
//!
//! Classic Huffman coding reads the whole input once to count symbols,
//! builds an optimal prefix tree, then reads the input again to encode it —
//! and still has to ship the frequency table to the decoder.
//!
//! Adaptive Huffman coding skips both the second pass and the table. Encoder
//! and decoder start from the same trivial tree and grow it in lockstep: after
//! every symbol, each side applies the identical update, so the decoder always
//! knows exactly which tree the encoder used for the *next* code. Frequent
//! symbols drift toward the root and their codes shrink, all without a single
//! bit of side information.
//!
//! ## The Problem
//!
//! A one-pass coder has to answer two questions the static coder never faces:
//! - How do you encode a symbol the tree has never seen? (Answer: a
//!   distinguished *escape* leaf whose path says "raw value follows".)
//! - How do you keep an incrementally mutated tree optimal? (Answer: the
//!   sibling property and a deterministic swap discipline.)
//!
//! ## Historical Context
//!
//! ```text
//! 1952  Huffman   Optimal prefix codes from known frequencies
//! 1973  Faller    First adaptive variant: update the tree per symbol
//! 1978  Gallager  Sibling property: the invariant behind all of them
//! 1985  Knuth     Practical O(depth) update algorithm ("FGK")
//! 1987  Vitter    Tightened variant with optimal height guarantees
//! ```
//!
//! ## Mathematical Formulation
//!
//! A binary code tree with non-negative node weights is a Huffman tree iff it
//! satisfies Gallager's sibling property: the nodes can be listed in
//! non-decreasing weight order such that every node is adjacent to its
//! sibling. Equivalently, enumerating nodes in level order from the root,
//! weights never increase. The FGK update preserves this invariant with at
//! most one subtree swap per level on the path from the changed leaf to the
//! root, so each symbol costs $O(\text{depth})$ swaps.
//!
//! ## Complexity Analysis
//!
//! - **Time**: O(tree size) per symbol in this implementation (the swap
//!   target search scans the level order enumeration; alphabets are small).
//! - **Space**: O(alphabet) nodes — two per distinct symbol, ever.
//!
//! ## Failure Modes
//!
//! 1. **Alphabet overflow**: a symbol that does not fit the configured raw
//!    escape width cannot be transmitted and is rejected, never truncated.
//! 2. **Truncated streams**: a bit source that runs dry mid-code is an
//!    error; treating it as end-of-stream would silently drop a symbol.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - [`FgkEncoder`] / [`FgkDecoder`]: the per-symbol streaming pair.
//! - [`compress`] / [`decompress`]: whole-buffer convenience over a byte
//!   alphabet, using [`BitWriter`] / [`BitReader`] for packing.
//! - [`CodeTree`]: the underlying tree, exposed for inspection and
//!   invariant checking.
//!
//! ## References
//!
//! - Gallager, R. (1978). "Variations on a Theme by Huffman."
//! - Knuth, D. (1985). "Dynamic Huffman Coding."
//! - Vitter, J. (1987). "Design and Analysis of Dynamic Huffman Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitio;
pub mod coder;
pub mod error;
pub mod tree;

pub use bitio::{BitReader, BitWriter};
pub use coder::{compress, decompress, FgkDecoder, FgkEncoder};
pub use error::{Error, Result};
pub use tree::CodeTree;
