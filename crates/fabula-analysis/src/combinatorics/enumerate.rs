//! Index-space enumeration in lexicographic order.
//!
//! Both enumerators work on positions `0..n`, so repeated codes still
//! count as distinct elements.

/// Lexicographic permutations of `0..n`.
#[derive(Debug, Clone)]
pub struct IndexPermutations {
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl IndexPermutations {
    pub fn new(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Step to the next permutation and borrow it.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !next_permutation(&mut self.indices) {
            self.exhausted = true;
            return None;
        }
        Some(&self.indices)
    }
}

/// Lexicographic `k`-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl IndexCombinations {
    /// `k > n` yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !next_combination(&mut self.indices, self.n) {
            self.exhausted = true;
            return None;
        }
        Some(&self.indices)
    }
}

/// Rearrange into the next lexicographic permutation; false on the last one.
fn next_permutation(indices: &mut [usize]) -> bool {
    let n = indices.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && indices[i - 1] >= indices[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while indices[j] <= indices[i - 1] {
        j -= 1;
    }
    indices.swap(i - 1, j);
    indices[i..].reverse();
    true
}

/// Advance a sorted index combination over `0..n`; false on the last one.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        // Highest value position i may hold is n - k + i.
        if indices[i] != n - k + i {
            indices[i] += 1;
            for j in (i + 1)..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
