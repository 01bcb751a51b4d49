use std::ops::Deref;

use tracing::trace;

use super::ecc;
use crate::common::metadata::{ECLevel, Version};
use crate::common::tables::MAX_BLOCK_SIZE;

// Block
//------------------------------------------------------------------------------

/// One Reed-Solomon block: data codewords followed by their ecc codewords.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Block {
    data: [u8; MAX_BLOCK_SIZE],
    // Block length
    len: usize,
    // Data length
    dlen: usize,
}

impl Block {
    pub fn new(raw: &[u8], ecc_len: usize) -> Self {
        let dlen = raw.len();
        let len = dlen + ecc_len;
        assert!(len <= MAX_BLOCK_SIZE, "Block too long: {len}");

        let mut data = [0u8; MAX_BLOCK_SIZE];
        data[..dlen].copy_from_slice(raw);
        data[dlen..len].copy_from_slice(&ecc(raw, ecc_len));
        Self { data, len, dlen }
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.dlen]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.data[self.dlen..self.len]
    }
}

/// Splits the data codewords into blocks and computes the ecc of each. The first short blocks
/// carry one data codeword fewer than the rest.
pub(crate) fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<Block> {
    let (count, short_len, short_count, ecc_len) = ver.block_layout(ecl);
    let short_dlen = short_len - ecc_len;
    let short_total = short_dlen * short_count;

    assert_eq!(
        data.len(),
        short_total + (short_dlen + 1) * (count - short_count),
        "Data len doesn't match total size of blocks"
    );

    let mut blocks = Vec::with_capacity(count);
    blocks.extend(data[..short_total].chunks(short_dlen).map(|c| Block::new(c, ecc_len)));
    blocks.extend(data[short_total..].chunks(short_dlen + 1).map(|c| Block::new(c, ecc_len)));
    blocks
}

/// Column-wise read of uneven rows: index `i` of every row in order, skipping rows that end
/// before `i`.
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_len = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total = blocks.iter().map(|b| b.len()).sum();
    let mut res = Vec::with_capacity(total);
    for i in 0..max_len {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

/// Final codeword sequence: interleaved data codewords then interleaved ecc codewords.
pub(crate) fn interleave_blocks(blocks: &[Block]) -> Vec<u8> {
    let data = blocks.iter().map(|b| b.data()).collect::<Vec<_>>();
    let ecc = blocks.iter().map(|b| b.ecc()).collect::<Vec<_>>();
    let mut res = interleave(&data);
    res.extend(interleave(&ecc));
    trace!("Interleaved {} codewords from {} blocks", res.len(), blocks.len());
    res
}
