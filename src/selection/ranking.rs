use crate::entry::ResultEntry;

/// Lowercase, turn every non-alphanumeric character into a space, trim.
///
/// Applied to both sides before scoring, so `#FF0000` and `ff0000` compare
/// equal.
pub fn normalize(text: &str) -> Vec<char> {
    let mapped: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    mapped.trim().chars().collect()
}

pub trait Similarity {
    /// Similarity in `[0, 100]` between two already normalized strings.
    fn score_normalized(&self, query: &[char], choice: &[char]) -> u8;

    fn score(&self, query: &str, choice: &str) -> u8 {
        let score = self.score_normalized(&normalize(query), &normalize(choice));
        debug_assert!(score <= 100, "similarity {score} out of range [0, 100]");
        score
    }
}

/// Insertion/deletion edit-distance ratio over the whole of both strings.
///
/// ratio := round(100 * 2 * lcs(q, c) / (len(q) + len(c)))
#[derive(Debug, Default, Clone, Copy)]
pub struct StrictRatio;

impl Similarity for StrictRatio {
    fn score_normalized(&self, query: &[char], choice: &[char]) -> u8 {
        indel_ratio(query, choice)
    }
}

/// Best strict ratio between the shorter string and any same-length window
/// of the longer one. Length mismatch is not penalized.
#[derive(Debug, Default, Clone, Copy)]
pub struct PartialRatio;

impl Similarity for PartialRatio {
    fn score_normalized(&self, query: &[char], choice: &[char]) -> u8 {
        let (shorter, longer) = if query.len() <= choice.len() {
            (query, choice)
        } else {
            (choice, query)
        };

        if shorter.is_empty() {
            return 0;
        }

        let mut best = 0;
        for window in longer.windows(shorter.len()) {
            let score = indel_ratio(shorter, window);
            if score > best {
                best = score;
                if best == 100 {
                    break;
                }
            }
        }
        best
    }
}

fn indel_ratio(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = (a.len() + b.len()) as f64;
    let matched = (2 * lcs_len(a, b)) as f64;
    (100.0 * matched / total).round() as u8
}

/// Longest common subsequence length, two-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Tie-break signals of a rankable candidate.
pub trait Rankable {
    fn base_score(&self) -> i64;

    /// Provider priority multiplier. Only ever compared, never multiplied in.
    fn weight(&self) -> f32 {
        1.0
    }
}

impl Rankable for ResultEntry {
    fn base_score(&self) -> i64 {
        ResultEntry::base_score(self)
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn base_score(&self) -> i64 {
        (**self).base_score()
    }

    fn weight(&self) -> f32 {
        (**self).weight()
    }
}
