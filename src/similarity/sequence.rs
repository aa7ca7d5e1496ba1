use std::collections::HashMap;
use std::hash::Hash;

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A maximal run of equal elements: `a[a_start..a_start + len] == b[b_start..b_start + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// One step of the edit script turning `a` into `b`.
///
/// Ranges are half-open indices into `a` and `b` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Equal { a: (usize, usize), b: (usize, usize) },
    Delete { a: (usize, usize), b: (usize, usize) },
    Insert { a: (usize, usize), b: (usize, usize) },
    Replace { a: (usize, usize), b: (usize, usize) },
}

/// Ratcliff/Obershelp sequence matcher.
///
/// Finds the longest contiguous common block, then recurses on the unmatched
/// regions to its left and right. On ties the block starting earliest in `a`
/// wins, then earliest in `b`. No elements are treated as junk.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each element of `b`, ascending
    b_index: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b_index: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, item) in b.iter().enumerate() {
            b_index.entry(item).or_default().push(j);
        }
        Self { a, b, b_index }
    }

    /// Longest matching block within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
    fn find_longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> MatchBlock {
        let mut best = MatchBlock {
            a_start: a_lo,
            b_start: b_lo,
            len: 0,
        };

        // prev[j + 1] = length of the match ending at a[i - 1] and b[j]; zero outside the window
        let mut prev = vec![0usize; b_hi + 1];
        let mut curr = vec![0usize; b_hi + 1];
        let mut prev_touched: Vec<usize> = Vec::new();
        let mut curr_touched: Vec<usize> = Vec::new();

        for i in a_lo..a_hi {
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = prev[j] + 1;
                    curr[j + 1] = k;
                    curr_touched.push(j + 1);
                    if k > best.len {
                        best = MatchBlock {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            len: k,
                        };
                    }
                }
            }

            for &t in &prev_touched {
                prev[t] = 0;
            }
            prev_touched.clear();
            std::mem::swap(&mut prev, &mut curr);
            std::mem::swap(&mut prev_touched, &mut curr_touched);
        }

        best
    }

    /// All matching blocks in ascending order, adjacent blocks merged.
    ///
    /// Always ends with a zero-length sentinel at `(a.len(), b.len())`.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let block = self.find_longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.len == 0 {
                continue;
            }
            if a_lo < block.a_start && b_lo < block.b_start {
                pending.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            let (a_end, b_end) = (block.a_start + block.len, block.b_start + block.len);
            if a_end < a_hi && b_end < b_hi {
                pending.push((a_end, a_hi, b_end, b_hi));
            }
            blocks.push(block);
        }
        blocks.sort_by_key(|block| (block.a_start, block.b_start));

        let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.a_start + last.len == block.a_start
                        && last.b_start + last.len == block.b_start =>
                {
                    last.len += block.len;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchBlock {
            a_start: self.a.len(),
            b_start: self.b.len(),
            len: 0,
        });
        merged
    }

    /// Edit script describing how to turn `a` into `b`
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut opcodes = Vec::new();
        let (mut i, mut j) = (0, 0);

        for block in self.matching_blocks() {
            let a = (i, block.a_start);
            let b = (j, block.b_start);
            match (i < block.a_start, j < block.b_start) {
                (true, true) => opcodes.push(Opcode::Replace { a, b }),
                (true, false) => opcodes.push(Opcode::Delete { a, b }),
                (false, true) => opcodes.push(Opcode::Insert { a, b }),
                (false, false) => {}
            }
            i = block.a_start + block.len;
            j = block.b_start + block.len;
            if block.len > 0 {
                opcodes.push(Opcode::Equal {
                    a: (block.a_start, i),
                    b: (block.b_start, j),
                });
            }
        }

        opcodes
    }

    /// `2 * M / (len(a) + len(b))`, where `M` is the total matched length.
    ///
    /// Returns 1.0 when both sequences are empty.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|block| block.len).sum();
        2.0 * count_to_f64(matched) / count_to_f64(total)
    }
}
