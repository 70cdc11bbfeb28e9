//! LCS token alignment with deterministic tie-breaking
//!
//! The aligner computes a longest common subsequence over two token slices
//! and reports it as a flat op sequence. When several optimal alignments
//! exist, the leftmost-greedy one is chosen: walking both sequences from
//! the front, a pair of equal tokens is matched as soon as doing so still
//! yields an optimal alignment. This makes the output a reproducible
//! contract instead of "whatever a diff library happens to emit".

/// One step of an alignment between a reference and a hypothesis sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    /// Reference token `ref_idx` matched hypothesis token `hyp_idx`.
    Match { ref_idx: usize, hyp_idx: usize },
    /// Reference token `ref_idx` has no counterpart in the hypothesis.
    RefGap { ref_idx: usize },
    /// Hypothesis token `hyp_idx` has no counterpart in the reference.
    HypGap { hyp_idx: usize },
}

/// Align `reference` against `hypothesis` using exact token equality.
///
/// Ops are emitted in order: reference indices and hypothesis indices are
/// both strictly increasing across the sequence. Within a changed region
/// the hypothesis gaps precede the reference gaps.
pub fn align<T: AsRef<str>>(reference: &[T], hypothesis: &[T]) -> Vec<AlignOp> {
    let n = reference.len();
    let m = hypothesis.len();

    // Suffix LCS table: lcs[i][j] = LCS length of reference[i..] vs
    // hypothesis[j..]. Built back to front so the forward walk below can
    // check whether a candidate step preserves optimality.
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if reference[i].as_ref() == hypothesis[j].as_ref() {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if reference[i].as_ref() == hypothesis[j].as_ref() && lcs[i + 1][j + 1] + 1 == lcs[i][j] {
            ops.push(AlignOp::Match {
                ref_idx: i,
                hyp_idx: j,
            });
            i += 1;
            j += 1;
        } else if lcs[i][j + 1] == lcs[i][j] {
            // Skipping this hypothesis token loses nothing; consuming it
            // first keeps the reference token available for a later match.
            ops.push(AlignOp::HypGap { hyp_idx: j });
            j += 1;
        } else {
            ops.push(AlignOp::RefGap { ref_idx: i });
            i += 1;
        }
    }
    while i < n {
        ops.push(AlignOp::RefGap { ref_idx: i });
        i += 1;
    }
    while j < m {
        ops.push(AlignOp::HypGap { hyp_idx: j });
        j += 1;
    }

    ops
}
