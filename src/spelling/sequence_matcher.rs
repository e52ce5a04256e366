//! Ratcliff/Obershelp "gestalt" sequence matching.
//!
//! The matcher finds the longest contiguous matching block between two
//! strings, then recurses into the pieces to the left and right of it. The
//! total size of all matching blocks `M` gives the similarity ratio
//! `2 * M / (len(a) + len(b))`.
//!
//! Strings are compared as sequences of Unicode scalar values.

use ahash::AHashMap;

/// Second sequences at least this long get the popular-element heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    /// Start offset in the first sequence.
    pub a: usize,
    /// Start offset in the second sequence.
    pub b: usize,
    /// Length of the block.
    pub size: usize,
}

impl Match {
    fn new(a: usize, b: usize, size: usize) -> Self {
        Match { a, b, size }
    }
}

/// Compares a pair of strings.
///
/// The second sequence is indexed once on construction, so when one string is
/// compared against many others it should be passed as `b` and the others fed
/// through [`SequenceMatcher::set_first`].
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each element of `b`, popular elements excluded.
    b2j: AHashMap<char, Vec<usize>>,
    /// Occurrence counts of every element of `b`.
    b_counts: AHashMap<char, usize>,
}

impl SequenceMatcher {
    /// Create a matcher for the pair `(a, b)`.
    pub fn new(a: &str, b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();

        let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
        let mut b_counts: AHashMap<char, usize> = AHashMap::new();
        for (j, &elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
            *b_counts.entry(elt).or_insert(0) += 1;
        }

        // Elements that occur in more than 1% of a long sequence make poor
        // anchors. They can still be absorbed when extending a block.
        if b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= threshold);
        }

        SequenceMatcher {
            a: a.chars().collect(),
            b,
            b2j,
            b_counts,
        }
    }

    /// Replace the first sequence, keeping the index of the second.
    pub fn set_first(&mut self, a: &str) {
        self.a.clear();
        self.a.extend(a.chars());
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, and
    /// among those the one starting earliest in `b`. A block of size 0 at
    /// `(alo, blo)` means there is no match.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match::new(alo, blo, 0);

        // j2len[j] = length of the longest block ending at a[i - 1], b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();
        let mut next_j2len: AHashMap<usize, usize> = AHashMap::new();

        for i in alo..ahi {
            next_j2len.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let previous = match j.checked_sub(1) {
                        Some(prev_j) => j2len.get(&prev_j).copied().unwrap_or(0),
                        None => 0,
                    };
                    let k = previous + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = Match::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next_j2len);
        }

        // Grow the block over equal elements that were left out of the index.
        while best.a > alo && best.b > blo && self.a[best.a - 1] == self.b[best.b - 1] {
            best = Match::new(best.a - 1, best.b - 1, best.size + 1);
        }
        while best.a + best.size < ahi
            && best.b + best.size < bhi
            && self.a[best.a + best.size] == self.b[best.b + best.size]
        {
            best.size += 1;
        }

        best
    }

    /// Return the non-overlapping matching blocks in increasing order.
    ///
    /// Adjacent blocks are merged. The list always ends with the sentinel
    /// `Match { a: len(a), b: len(b), size: 0 }`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let found = self.find_longest_match(alo, ahi, blo, bhi);
            if found.size == 0 {
                continue;
            }
            blocks.push(found);
            if alo < found.a && blo < found.b {
                queue.push((alo, found.a, blo, found.b));
            }
            if found.a + found.size < ahi && found.b + found.size < bhi {
                queue.push((found.a + found.size, ahi, found.b + found.size, bhi));
            }
        }
        blocks.sort();

        let mut merged = Vec::with_capacity(blocks.len() + 1);
        let mut current = Match::new(0, 0, 0);
        for block in blocks {
            if current.a + current.size == block.a && current.b + current.size == block.b {
                current.size += block.size;
            } else {
                if current.size > 0 {
                    merged.push(current);
                }
                current = block;
            }
        }
        if current.size > 0 {
            merged.push(current);
        }
        merged.push(Match::new(la, lb, 0));
        merged
    }

    /// Similarity in `[0, 1]`; 1.0 when the sequences are identical.
    pub fn ratio(&self) -> f64 {
        let matches: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// An upper bound on [`ratio`](Self::ratio) from element multisets.
    pub fn quick_ratio(&self) -> f64 {
        let mut available: AHashMap<char, isize> = AHashMap::new();
        let mut matches = 0;
        for elt in &self.a {
            let remaining = available
                .entry(*elt)
                .or_insert_with(|| self.b_counts.get(elt).copied().unwrap_or(0) as isize);
            if *remaining > 0 {
                matches += 1;
            }
            *remaining -= 1;
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// An upper bound on [`ratio`](Self::ratio) from lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Similarity ratio of two strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}
