//! Longest-matching-block similarity ratio.
//!
//! The ratio between `a` and `b` is `2 * M / (len(a) + len(b))` where `M` is the
//! number of characters covered by matching blocks. Blocks are found by taking
//! the longest common contiguous run, then recursing on the parts left and right
//! of it. Two empty strings have ratio `1.0`.

use crate::core::normalize::NormalizedText;

/// Minimum length of the second string before the popular-character heuristic
/// applies.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

#[inline]
fn ratio_from(matches: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        1.0
    } else {
        2.0 * count_to_f64(matches) / count_to_f64(total_len)
    }
}

/// A contiguous run shared by both sequences: `a[a_start..a_start + size]`
/// equals `b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Block matcher over two byte sequences.
///
/// The index of `b` is built once in [`BlockMatcher::new`]; matching walks `a`
/// against it.
pub struct BlockMatcher<'a> {
    a: &'a [u8],
    b: &'a [u8],
    /// Positions of each byte value in `b`, ascending
    b2j: Vec<Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    #[must_use]
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        Self::with_autojunk(a, b, false)
    }

    /// Build a matcher, optionally dropping "popular" bytes of `b` from the
    /// index. When `b` is at least 200 bytes long, a byte occurring more than
    /// `len(b) / 100 + 1` times cannot start a match.
    #[must_use]
    pub fn with_autojunk(a: &'a [u8], b: &'a [u8], autojunk: bool) -> Self {
        let mut b2j: Vec<Vec<usize>> = vec![Vec::new(); 256];
        for (j, &byte) in b.iter().enumerate() {
            b2j[usize::from(byte)].push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            for positions in &mut b2j {
                if positions.len() > ntest {
                    positions.clear();
                }
            }
        }

        Self { a, b, b2j }
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// Returns a block of size 0 at `(alo, blo)` when nothing matches.
    #[must_use]
    pub fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j + 1] = length of the match ending at a[i - 1], b[j]
        let mut j2len = vec![0usize; self.b.len() + 1];
        let mut new_j2len = vec![0usize; self.b.len() + 1];
        let mut touched: Vec<usize> = Vec::new();
        let mut new_touched: Vec<usize> = Vec::new();

        for i in alo..ahi {
            for &j in &self.b2j[usize::from(self.a[i])] {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j2len[j] + 1;
                new_j2len[j + 1] = k;
                new_touched.push(j + 1);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }

            for &idx in &touched {
                j2len[idx] = 0;
            }
            std::mem::swap(&mut j2len, &mut new_j2len);
            std::mem::swap(&mut touched, &mut new_touched);
            new_touched.clear();
        }

        // Extend across bytes that were left out of the index
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// All matching blocks, in no particular order.
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a_start && blo < block.b_start {
                queue.push((alo, block.a_start, blo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < ahi && b_end < bhi {
                queue.push((a_end, ahi, b_end, bhi));
            }
            blocks.push(block);
        }

        blocks
    }

    /// Number of bytes covered by matching blocks.
    #[must_use]
    pub fn matches(&self) -> usize {
        self.matching_blocks().iter().map(|b| b.size).sum()
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        ratio_from(self.matches(), self.a.len() + self.b.len())
    }
}

/// Upper bound on the ratio from byte counts alone.
#[must_use]
pub fn quick_ratio(a: &[u8], b: &[u8]) -> f64 {
    let mut avail = [0usize; 256];
    for &byte in b {
        avail[usize::from(byte)] += 1;
    }

    let mut matches = 0usize;
    for &byte in a {
        let slot = &mut avail[usize::from(byte)];
        if *slot > 0 {
            *slot -= 1;
            matches += 1;
        }
    }

    ratio_from(matches, a.len() + b.len())
}

/// Upper bound on the ratio from lengths alone.
#[must_use]
pub fn real_quick_ratio(a: &[u8], b: &[u8]) -> f64 {
    ratio_from(a.len().min(b.len()), a.len() + b.len())
}

/// Similarity of two normalized texts, in `[0, 1]`.
///
/// The arguments are put in a fixed order before matching so the result does
/// not depend on which text is passed first.
///
/// # Examples
///
/// ```
/// use issue_dedup::core::normalize::normalize_str;
/// use issue_dedup::matching::similarity::similarity;
///
/// let a = normalize_str("abcd");
/// let b = normalize_str("bcde");
/// assert!((similarity(&a, &b) - 0.75).abs() < 1e-12);
/// ```
#[must_use]
pub fn similarity(a: &NormalizedText, b: &NormalizedText) -> f64 {
    similarity_with(a, b, false)
}

/// [`similarity`] with the popular-character heuristic selectable.
#[must_use]
pub fn similarity_with(a: &NormalizedText, b: &NormalizedText, autojunk: bool) -> f64 {
    if a == b && !autojunk {
        return 1.0;
    }
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    BlockMatcher::with_autojunk(first.as_bytes(), second.as_bytes(), autojunk).ratio()
}
