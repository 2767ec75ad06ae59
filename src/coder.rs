//! Adaptive encoding and decoding over the shared code tree.
//!
//! The encoder resolves a symbol to its current code *before* folding the
//! symbol into the tree; the decoder walks the received bits to a leaf and
//! then replays the exact same update. Both sides therefore hold
//! structurally identical trees after every symbol — the correctness
//! contract of the whole scheme. Nothing here buffers: one symbol in, one
//! code out, per call.

use crate::bitio::{BitReader, BitWriter};
use crate::error::{Error, Result};
use crate::tree::{CodeTree, Symbol};

/// Adaptive Huffman encoder.
///
/// Owns its tree; feed it symbols in stream order and emit the returned bit
/// sequences back to back.
#[derive(Debug)]
pub struct FgkEncoder {
    tree: CodeTree,
}

impl FgkEncoder {
    /// Create an encoder for an alphabet of `raw_width`-bit symbols.
    pub fn new(raw_width: u32) -> Result<Self> {
        Ok(Self {
            tree: CodeTree::new(raw_width)?,
        })
    }

    /// Encode one symbol against the current tree state, then update the
    /// tree.
    ///
    /// Returns the bits to emit, first bit first: the root-to-leaf path for
    /// a symbol already in the tree, or the root-to-escape path followed by
    /// the symbol's `raw_width`-bit value (most significant bit first) on
    /// its first occurrence. For the very first symbol the escape path is
    /// empty and the code is exactly the raw value.
    ///
    /// # Errors
    ///
    /// [`Error::SymbolOutOfRange`] if the symbol does not fit the raw width;
    /// the tree is left untouched in that case.
    pub fn encode_symbol(&mut self, symbol: Symbol) -> Result<Vec<u8>> {
        let width = self.tree.raw_width();
        if u32::from(symbol) >= (1u32 << width) {
            return Err(Error::SymbolOutOfRange {
                symbol,
                raw_width: width,
            });
        }
        match self.tree.locate(symbol) {
            Some(leaf) => {
                let bits = self.tree.path_from_root(leaf);
                self.tree.increment_existing(leaf);
                self.tree.rebalance(leaf);
                Ok(bits)
            }
            None => {
                let mut bits = self.tree.path_from_root(self.tree.escape());
                for shift in (0..width).rev() {
                    bits.push(((symbol >> shift) & 1) as u8);
                }
                let branch = self.tree.insert_first(symbol);
                self.tree.rebalance(branch);
                Ok(bits)
            }
        }
    }

    /// The tree as shaped by everything encoded so far.
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }
}

/// Adaptive Huffman decoder.
///
/// Mirrors [`FgkEncoder`]: given the same bit stream, it reproduces the same
/// symbol sequence and the same tree states.
#[derive(Debug)]
pub struct FgkDecoder {
    tree: CodeTree,
}

impl FgkDecoder {
    /// Create a decoder for an alphabet of `raw_width`-bit symbols.
    pub fn new(raw_width: u32) -> Result<Self> {
        Ok(Self {
            tree: CodeTree::new(raw_width)?,
        })
    }

    /// Resolve the next symbol from `bits`, then update the tree exactly as
    /// the encoder did for this symbol.
    ///
    /// Walks from the root, zero to the left and nonzero to the right, until
    /// a leaf is reached; the escape leaf means the next `raw_width` bits
    /// spell a first-occurrence symbol. Returns the symbol together with the
    /// number of bits consumed, which always equals the length the encoder
    /// produced for the same tree state.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteCode`] if the source runs dry mid-walk or mid-raw
    /// payload; [`Error::InvariantViolation`] if an escape code names a
    /// symbol the tree already holds, which can only mean the stream is
    /// corrupt or desynchronized. Decoding must not continue after either.
    pub fn decode_next<I: Iterator<Item = u8>>(&mut self, bits: &mut I) -> Result<(Symbol, usize)> {
        let mut node = self.tree.root();
        let mut consumed = 0usize;
        while !self.tree.is_leaf(node) {
            let bit = bits.next().ok_or(Error::IncompleteCode)?;
            consumed += 1;
            node = match self.tree.child(node, bit) {
                Some(next) => next,
                None => unreachable!("interior nodes always have two children"),
            };
        }
        if node == self.tree.escape() {
            let width = self.tree.raw_width();
            let mut symbol: Symbol = 0;
            for _ in 0..width {
                let bit = bits.next().ok_or(Error::IncompleteCode)?;
                symbol = (symbol << 1) | Symbol::from(bit != 0);
            }
            consumed += width as usize;
            if self.tree.locate(symbol).is_some() {
                return Err(Error::InvariantViolation(
                    "escape code for a symbol already in the tree",
                ));
            }
            let branch = self.tree.insert_first(symbol);
            self.tree.rebalance(branch);
            Ok((symbol, consumed))
        } else {
            let symbol = match self.tree.symbol_at(node) {
                Some(symbol) => symbol,
                None => unreachable!("non-escape leaves always hold a symbol"),
            };
            self.tree.increment_existing(node);
            self.tree.rebalance(node);
            Ok((symbol, consumed))
        }
    }

    /// The tree as shaped by everything decoded so far.
    pub fn tree(&self) -> &CodeTree {
        &self.tree
    }
}

/// Compress a byte stream in one pass.
///
/// The output is an 8-byte little-endian symbol count followed by the packed
/// code bits, zero-padded to a whole byte. The count is what lets
/// [`decompress`] stop before misreading the padding as codes; the coded
/// bits themselves carry no framing. `raw_width` must be in `1..=8` for a
/// byte alphabet — width 7 matches classic text-only streams and rejects
/// bytes above 127, width 8 covers arbitrary data.
pub fn compress(input: &[u8], raw_width: u32) -> Result<Vec<u8>> {
    check_byte_width(raw_width)?;
    let mut encoder = FgkEncoder::new(raw_width)?;
    let mut writer = BitWriter::new();
    for &byte in input {
        writer.extend(&encoder.encode_symbol(Symbol::from(byte))?);
    }
    let mut out = Vec::with_capacity(8 + input.len());
    out.extend_from_slice(&(input.len() as u64).to_le_bytes());
    out.extend_from_slice(&writer.finish());
    Ok(out)
}

/// Expand a stream produced by [`compress`] with the same `raw_width`.
pub fn decompress(data: &[u8], raw_width: u32) -> Result<Vec<u8>> {
    check_byte_width(raw_width)?;
    if data.len() < 8 {
        return Err(Error::IncompleteCode);
    }
    let (header, body) = data.split_at(8);
    let mut count_bytes = [0u8; 8];
    count_bytes.copy_from_slice(header);
    let count = u64::from_le_bytes(count_bytes);
    // every symbol costs at least one bit, so a larger count cannot be honest
    if count > body.len() as u64 * 8 {
        return Err(Error::IncompleteCode);
    }
    let mut decoder = FgkDecoder::new(raw_width)?;
    let mut reader = BitReader::new(body);
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (symbol, _) = decoder.decode_next(&mut reader)?;
        out.push(symbol as u8);
    }
    Ok(out)
}

fn check_byte_width(raw_width: u32) -> Result<()> {
    if raw_width == 0 || raw_width > 8 {
        return Err(Error::InvalidRawWidth(raw_width));
    }
    Ok(())
}
