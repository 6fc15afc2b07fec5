// enumerate.rs - Alignment enumeration by backward search through the D matrix

use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
use crate::core::error::MsdError;
use crate::core::matrix::DistanceMatrix;
use crate::data::SequencePair;

/// Pending-queue size above which the search starts discarding branches
pub const DEFAULT_THINNING_THRESHOLD: usize = 200;

/// Limits applied while enumerating alignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Thin the pending queue whenever it holds more nodes than this
    pub thinning_threshold: usize,
    /// Fail with `ResourceExhausted` after expanding this many nodes
    pub max_expansions: Option<usize>,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            thinning_threshold: DEFAULT_THINNING_THRESHOLD,
            max_expansions: None,
        }
    }
}

impl EnumerationConfig {
    pub fn validate(&self) -> Result<(), MsdError> {
        if self.thinning_threshold == 0 {
            return Err(MsdError::InvalidInput(
                "thinning threshold must be at least 1".to_string(),
            ));
        }
        if self.max_expansions == Some(0) {
            return Err(MsdError::InvalidInput(
                "max expansions must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// How much the growth mitigation cut from the search.
/// Any pass at all means the alignment set is a sample, not the full set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinningStats {
    pub passes: usize,
    pub discarded: usize,
    pub peak_frontier: usize,
}

impl ThinningStats {
    pub fn is_approximate(&self) -> bool {
        self.passes > 0
    }
}

/// Raw enumeration output: explanation strings in discovery order
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub explanations: Vec<String>,
    pub thinning: ThinningStats,
    pub expanded: usize,
}

impl Enumeration {
    /// Arithmetic mean of the explanation lengths (0.0 when empty)
    pub fn average_length(&self) -> f64 {
        if self.explanations.is_empty() {
            return 0.0;
        }
        let total: usize = self.explanations.iter().map(|e| e.len()).sum();
        total as f64 / self.explanations.len() as f64
    }
}

/// Search frontier node: a matrix cell and the explanation accumulated on
/// the way back from the terminal cell
#[derive(Debug)]
struct Placeholder {
    x: usize,
    y: usize,
    explanation: String,
}

impl Placeholder {
    fn terminal(matrix: &DistanceMatrix) -> Self {
        Self {
            x: matrix.rows() - 1,
            y: matrix.cols() - 1,
            explanation: String::new(),
        }
    }

    /// Move to `(x, y)`, prepending `ops` since the path is built backwards
    fn step(&self, ops: &str, x: usize, y: usize) -> Self {
        let mut explanation = String::with_capacity(ops.len() + self.explanation.len());
        explanation.push_str(ops);
        explanation.push_str(&self.explanation);
        Self { x, y, explanation }
    }
}

/// Discard every second pending node, keeping positions 0, 2, 4, ...
/// Returns the number of nodes dropped.
fn thin(frontier: &mut VecDeque<Placeholder>) -> usize {
    let before = frontier.len();
    let mut position = 0usize;
    frontier.retain(|_| {
        let keep = position % 2 == 0;
        position += 1;
        keep
    });
    before - frontier.len()
}

/// Find the minimum-cost paths from the bottom-right cell of `matrix` back
/// to the origin.
///
/// The search is breadth-first over an explicit queue, so its depth never
/// touches the call stack. Each cell forks into every predecessor whose
/// cost accounting matches `D`, which is how multiple alignments arise.
///
/// Long, pathologically different texts can make the number of pending
/// branches grow exponentially. Whenever the queue exceeds
/// `config.thinning_threshold`, every second pending node is dropped. The
/// surviving alignments are then an order-dependent sample rather than the
/// complete set; `ThinningStats` records that this happened.
pub fn enumerate(
    matrix: &DistanceMatrix,
    pair: &dyn SequencePair,
    config: &EnumerationConfig,
) -> Result<Enumeration, MsdError> {
    config.validate()?;

    let mut result = Enumeration::default();
    let mut frontier = VecDeque::new();
    frontier.push_back(Placeholder::terminal(matrix));

    while !frontier.is_empty() {
        if frontier.len() > config.thinning_threshold {
            result.thinning.passes += 1;
            result.thinning.discarded += thin(&mut frontier);
        }

        let Some(ph) = frontier.pop_front() else {
            break;
        };
        let (x, y) = (ph.x, ph.y);

        if x == 0 && y == 0 {
            result.explanations.push(ph.explanation);
            continue;
        }

        result.expanded += 1;
        if let Some(limit) = config.max_expansions {
            if result.expanded > limit {
                return Err(MsdError::ResourceExhausted {
                    expanded: result.expanded,
                    limit,
                });
            }
        }

        let here = matrix.get(x, y);

        if x > 0 && y > 0 {
            let diagonal = matrix.get(x - 1, y - 1);

            // correct
            if here == diagonal && pair.item_distance(x - 1, y - 1) == 0 {
                frontier.push_back(ph.step("c", x - 1, y - 1));
            }

            // substitution
            if here == diagonal + 1 {
                frontier.push_back(ph.step("x", x - 1, y - 1));
            }
        }

        // insertion
        if y > 0 && here == matrix.get(x, y - 1) + 1 {
            frontier.push_back(ph.step("i", x, y - 1));
        }

        // deletion
        if x > 0 && here == matrix.get(x - 1, y) + 1 {
            frontier.push_back(ph.step("d", x - 1, y));
        }

        // transposition
        if x >= 2 && y >= 2 {
            let swapped = here.checked_sub(matrix.get(x - 2, y - 2));
            if swapped == Some(pair.transposed_distance(x - 1, y - 1)) {
                frontier.push_back(ph.step("tt", x - 2, y - 2));
            }
        }

        result.thinning.peak_frontier = result.thinning.peak_frontier.max(frontier.len());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CharPair;

    fn explanations(presented: &str, transcribed: &str, transpositions: bool) -> Vec<String> {
        let pair = CharPair::new(presented, transcribed).with_transpositions(transpositions);
        let matrix = DistanceMatrix::build(&pair);
        enumerate(&matrix, &pair, &EnumerationConfig::default())
            .unwrap()
            .explanations
    }

    #[test]
    fn test_identity() {
        assert_eq!(explanations("hello", "hello", false), vec!["ccccc"]);
    }

    #[test]
    fn test_pure_insertions_and_deletions() {
        assert_eq!(explanations("", "abc", false), vec!["iii"]);
        assert_eq!(explanations("abc", "", false), vec!["ddd"]);
        assert_eq!(explanations("", "", false), vec![""]);
    }

    #[test]
    fn test_swap_without_transpositions() {
        let found = explanations("ab", "ba", false);
        assert!(found.iter().all(|e| !e.contains('t')));
        assert_eq!(found, vec!["xx", "dci", "icd"]);
    }

    #[test]
    fn test_swap_with_transpositions() {
        let found = explanations("ab", "ba", true);
        assert_eq!(found, vec!["tt"]);

        let found = explanations("abcd", "abdc", true);
        assert_eq!(found, vec!["cctt"]);
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(explanations("cat", "cot", false), vec!["cxc"]);
    }

    #[test]
    fn test_breadth_first_order() {
        // Both insertion points are equally cheap
        assert_eq!(explanations("a", "aa", false), vec!["ic", "ci"]);
    }

    #[test]
    fn test_thin_keeps_even_positions() {
        let mut frontier: VecDeque<Placeholder> = (0..7)
            .map(|i| Placeholder {
                x: i,
                y: 0,
                explanation: String::new(),
            })
            .collect();
        assert_eq!(thin(&mut frontier), 3);
        let kept: Vec<usize> = frontier.iter().map(|p| p.x).collect();
        assert_eq!(kept, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_growth_mitigation() {
        let pair = CharPair::new("abcdefghijklmnopqrst", "ABCDEFGHIJ");
        let matrix = DistanceMatrix::build(&pair);
        let found = enumerate(&matrix, &pair, &EnumerationConfig::default()).unwrap();

        assert!(found.thinning.is_approximate());
        assert!(found.thinning.discarded > 0);
        assert!(found.thinning.peak_frontier <= DEFAULT_THINNING_THRESHOLD + 4);
        assert!(!found.explanations.is_empty());
        for e in &found.explanations {
            assert_eq!(e.len(), 20);
        }
    }

    #[test]
    fn test_small_search_is_not_thinned() {
        let pair = CharPair::new("kitten", "sitting");
        let matrix = DistanceMatrix::build(&pair);
        let found = enumerate(&matrix, &pair, &EnumerationConfig::default()).unwrap();
        assert!(!found.thinning.is_approximate());
        assert_eq!(found.thinning.passes, 0);
    }

    #[test]
    fn test_expansion_budget() {
        let pair = CharPair::new("abcdefghijklmnopqrst", "ABCDEFGHIJ");
        let matrix = DistanceMatrix::build(&pair);
        let config = EnumerationConfig {
            max_expansions: Some(50),
            ..EnumerationConfig::default()
        };
        let err = enumerate(&matrix, &pair, &config).unwrap_err();
        assert_eq!(
            err,
            MsdError::ResourceExhausted {
                expanded: 51,
                limit: 50
            }
        );
    }

    #[test]
    fn test_invalid_config() {
        let pair = CharPair::new("a", "b");
        let matrix = DistanceMatrix::build(&pair);
        let config = EnumerationConfig {
            thinning_threshold: 0,
            max_expansions: None,
        };
        assert!(matches!(
            enumerate(&matrix, &pair, &config),
            Err(MsdError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_average_length() {
        let e = Enumeration {
            explanations: vec!["ci".to_string(), "icd".to_string()],
            ..Enumeration::default()
        };
        assert!((e.average_length() - 2.5).abs() < 1e-12);
        assert_eq!(Enumeration::default().average_length(), 0.0);
    }
}
