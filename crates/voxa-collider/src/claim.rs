use voxa_chunk::{CHUNK_SIZE, CHUNK_VOLUME};

const BITS_PER_WORD: usize = 64;
const WORD_INDEX_SHIFT: usize = 6; // log2(64)
const WORD_INDEX_MASK: usize = 63;

/// One bit per voxel of a chunk, marking cells already covered by a box.
/// Owned by the caller and reused between decompositions.
#[derive(Clone, Debug)]
pub struct ClaimMap {
    words: Vec<u64>,
}

impl Default for ClaimMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimMap {
    pub fn new() -> Self {
        Self {
            words: vec![0; CHUNK_VOLUME.div_ceil(BITS_PER_WORD)],
        }
    }

    #[inline]
    fn bit(x: usize, y: usize, z: usize) -> (usize, u64) {
        let i = (z * CHUNK_SIZE + y) * CHUNK_SIZE + x;
        (i >> WORD_INDEX_SHIFT, 1u64 << (i & WORD_INDEX_MASK))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    #[inline]
    pub fn is_claimed(&self, x: usize, y: usize, z: usize) -> bool {
        let (w, m) = Self::bit(x, y, z);
        self.words[w] & m != 0
    }

    #[inline]
    pub fn claim(&mut self, x: usize, y: usize, z: usize) {
        let (w, m) = Self::bit(x, y, z);
        self.words[w] |= m;
    }

    pub fn claimed_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_and_clear() {
        let mut map = ClaimMap::new();
        assert!(!map.is_claimed(15, 15, 15));
        map.claim(15, 15, 15);
        map.claim(0, 0, 0);
        assert!(map.is_claimed(15, 15, 15));
        assert!(!map.is_claimed(14, 15, 15));
        assert_eq!(map.claimed_count(), 2);
        map.clear();
        assert_eq!(map.claimed_count(), 0);
    }
}
