//! Readback Comparison Engine
//!
//! Aligns a transcribed utterance against a reference paragraph and reports
//! which words were matched, substituted, or dropped.
//!
//! ## Pipeline
//!
//! ```text
//! reference ─┐
//!            ├─> normalize() ─> LCS alignment ─> ComparisonResult
//! hypothesis ┘
//! ```
//!
//! The match criterion is exact token equality after normalization
//! (case folding, contraction expansion, punctuation stripping). There is
//! no fuzzy matching at this layer; "how close a substitution sounds" is a
//! presentation concern.
//!
//! ## Quick Start
//!
//! ```
//! use readback_compare::compare;
//!
//! let result = compare("The quick brown fox jumps", "the quick brown fox jumped");
//! assert_eq!(result.total_words, 5);
//! assert_eq!(result.matched_words, 4);
//! assert_eq!(result.accuracy, 80.0);
//! ```

pub mod align;
pub mod compare;
pub mod normalize;

pub use align::{align, AlignOp};
pub use compare::{compare, ComparisonResult, ErrorKind, WordError};
pub use normalize::{normalize, NormalizedText};
