//! Static question/answer knowledge base with fuzzy lookup.
//!
//! Every entry is keyed by its canonical question. A lookup scores the
//! normalized input against each entry with two independent signals and keeps
//! the larger one:
//!
//! - question similarity: Sørensen–Dice over character bigrams
//!   (whitespace ignored), symmetric and bounded in `[0, 1]`;
//! - keyword score: `0.2` per stored keyword found as a substring of the
//!   input, summed without any clamp.
//!
//! Entries are iterated in insertion order, and a later entry only replaces
//! the current best when its score is strictly greater, so ties resolve to
//! the first-seen entry.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::AgentError;
use crate::seed;

/// Minimum combined score for a lookup to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;

/// Score contributed by each keyword contained in the input.
pub const KEYWORD_WEIGHT: f64 = 0.2;

/// Canned answer plus the keywords that route to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub answer: String,
    pub keywords: Vec<String>,
}

/// Per-entry breakdown of one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore<'a> {
    pub question: &'a str,
    pub question_similarity: f64,
    pub keyword_score: f64,
    pub combined: f64,
}

/// One record of a knowledge file.
#[derive(Debug, Deserialize)]
struct KnowledgeRecord {
    question: String,
    answer: String,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Ordered mapping from canonical question to [`KnowledgeEntry`].
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<(String, KnowledgeEntry)>,
}

impl KnowledgeBase {
    /// Empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seeded support pairs shipped with the service.
    pub fn builtin() -> Self {
        let mut kb = Self::new();
        for (question, answer, keywords) in seed::SUPPORT_PAIRS {
            kb.add_qa_pair(*question, *answer, keywords.iter().copied());
        }
        kb
    }

    /// Loads pairs from a JSON array of `{ "question", "answer", "keywords" }`.
    ///
    /// File order is kept; a repeated question overwrites the earlier one.
    ///
    /// # Errors
    /// `AgentError::KnowledgeLoad` if the file cannot be read,
    /// `AgentError::Json` if it is not the expected shape.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| AgentError::KnowledgeLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let kb = Self::from_json_str(&raw)?;
        info!(path = %path.display(), entries = kb.len(), "knowledge file loaded");
        Ok(kb)
    }

    /// Same as [`KnowledgeBase::from_json_file`] for an in-memory document.
    pub fn from_json_str(raw: &str) -> Result<Self, AgentError> {
        let records: Vec<KnowledgeRecord> = serde_json::from_str(raw)?;
        let mut kb = Self::new();
        for r in records {
            kb.add_qa_pair(r.question, r.answer, r.keywords);
        }
        Ok(kb)
    }

    /// Inserts a pair, or overwrites the entry already stored under `question`
    /// (keeping its position).
    pub fn add_qa_pair<Q, A, K, S>(&mut self, question: Q, answer: A, keywords: K)
    where
        Q: Into<String>,
        A: Into<String>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let question = question.into();
        let entry = KnowledgeEntry {
            answer: answer.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        };
        match self.entries.iter_mut().find(|(q, _)| *q == question) {
            Some((_, slot)) => *slot = entry,
            None => self.entries.push((question, entry)),
        }
    }

    /// All canonical questions, in iteration order.
    pub fn get_all_questions(&self) -> Vec<String> {
        self.entries.iter().map(|(q, _)| q.clone()).collect()
    }

    /// Entry stored under an exact canonical question.
    pub fn get(&self, question: &str) -> Option<&KnowledgeEntry> {
        self.entries
            .iter()
            .find(|(q, _)| q == question)
            .map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores `text` against every entry, in iteration order.
    pub fn score(&self, text: &str) -> Vec<MatchScore<'_>> {
        let input = normalize(text);
        self.entries
            .iter()
            .map(|(question, entry)| {
                let question_similarity = question_similarity(&input, &normalize(question));
                let keyword_score = keyword_score(&input, &entry.keywords);
                MatchScore {
                    question,
                    question_similarity,
                    keyword_score,
                    combined: question_similarity.max(keyword_score),
                }
            })
            .collect()
    }

    /// Best entry whose combined score reaches `threshold`, if any.
    pub fn find_best_match(
        &self,
        text: &str,
        threshold: f64,
    ) -> Option<(&str, &KnowledgeEntry)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, s) in self.score(text).iter().enumerate() {
            let best_score = best.map_or(0.0, |(_, score)| score);
            if s.combined > best_score && s.combined >= threshold {
                best = Some((idx, s.combined));
            }
        }

        let (idx, score) = best?;
        let (question, entry) = &self.entries[idx];
        debug!(question = %question, score, threshold, "knowledge match");
        Some((question.as_str(), entry))
    }
}

/// Lower-cased, trimmed form used on both sides of a comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Symmetric similarity ratio of two already-normalized strings.
pub fn question_similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

/// `KEYWORD_WEIGHT` per keyword contained in `input`, unclamped.
///
/// A keyword counts once no matter how often it occurs.
pub fn keyword_score<S: AsRef<str>>(input: &str, keywords: &[S]) -> f64 {
    keywords
        .iter()
        .filter(|k| input.contains(k.as_ref()))
        .fold(0.0, |acc, _| acc + KEYWORD_WEIGHT)
}
