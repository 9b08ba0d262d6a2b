//! Japanese address candidate expansion and relevance scoring.
//!
//! Free-form Japanese addresses write the same block/lot numbering three
//! ways (`1丁目2番3号`, `1-2-3`, `1丁目2-3`), and geocoders rarely index
//! all of them. [`candidates`] expands one input into an ordered list of
//! query strings, most literal first, progressively more generalized.
//! [`relevance_score`] ranks what the geocoder returns against the
//! original input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Upper bound on the candidate list produced by [`candidates`]
pub const MAX_CANDIDATES: usize = 10;

/// Fixed rewrite rules, applied independently to the trimmed input.
///
/// Each rule substitutes its first match only, mirroring how the three
/// numbering notations alias each other; later rules generalize by
/// dropping the lot number, then everything after the block number, then
/// everything after the municipality.
static REWRITES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // N丁目M番K号 into the sibling notations
        (r"(\d+)丁目(\d+)番(\d+)号?", "${1}丁目${2}番"),
        (r"(\d+)丁目(\d+)番(\d+)号?", "${1}-${2}-${3}"),
        (r"(\d+)丁目(\d+)番(\d+)号?", "${1}丁目${2}-${3}"),
        // N-M-K into the kanji notations
        (r"(\d+)-(\d+)-(\d+)", "${1}丁目${2}番${3}号"),
        (r"(\d+)-(\d+)-(\d+)", "${1}丁目${2}-${3}"),
        // N丁目M-K into the sibling notations
        (r"(\d+)丁目(\d+)-(\d+)", "${1}丁目${2}番${3}号"),
        (r"(\d+)丁目(\d+)-(\d+)", "${1}-${2}-${3}"),
        // lot number dropped
        (r"(\d+)丁目(\d+)番(\d+)号?.*", "${1}丁目${2}番"),
        (r"(\d+)-(\d+)-(\d+).*", "${1}-${2}"),
        (r"(\d+)丁目(\d+)-(\d+).*", "${1}丁目${2}番"),
        // block number only
        (r"(\d+)丁目.*", "${1}丁目"),
        // municipality prefix only
        (r"([都道府県市区町村]+).*", "${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("static rewrite pattern"), replacement)
    })
    .collect()
});

static NUMERIC_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static pattern"));

/// Contiguous CJK ideograph runs (the range the original data uses)
static KANJI_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[一-龯]+").expect("static pattern"));

/// Expand a raw address into an ordered list of geocoding query strings.
///
/// The first entry is always the trimmed input; rewritten variants follow
/// in fixed rule order with duplicates suppressed (first occurrence
/// wins). Input with no recognizable numbering yields the single
/// unmodified candidate; nothing is ever rejected here — blank-input
/// validation is the caller's concern.
pub fn candidates(address: &str) -> Vec<String> {
    let base = address.trim();
    let mut out = vec![base.to_string()];

    for (pattern, replacement) in REWRITES.iter() {
        let variant = pattern.replace(base, *replacement);
        let variant = variant.as_ref();
        if !variant.is_empty() && variant != base && !out.iter().any(|c| c == variant) {
            out.push(variant.to_string());
        }
    }

    out.truncate(MAX_CANDIDATES);
    out
}

/// Scoring weights for [`relevance_score`].
///
/// The defaults are observed heuristics carried over from the original
/// behavior, not tuned values; callers may override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeights {
    /// Either string contains the other, case-insensitively
    pub containment: u32,
    /// Per numeric token shared between input and candidate
    pub numeric_token: u32,
    /// Per kanji run of the input found inside a candidate kanji run
    pub kanji_run: u32,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self { containment: 100, numeric_token: 20, kanji_run: 10 }
    }
}

/// Score how well a candidate's formatted address matches the original
/// input. Higher is more relevant; the score only orders results.
pub fn relevance_score(original: &str, candidate: &str, weights: &RankingWeights) -> u32 {
    let mut score = 0;

    let original_lower = original.to_lowercase();
    let candidate_lower = candidate.to_lowercase();
    if candidate_lower.contains(&original_lower) || original_lower.contains(&candidate_lower) {
        score += weights.containment;
    }

    let candidate_numbers: Vec<&str> =
        NUMERIC_TOKEN.find_iter(candidate).map(|m| m.as_str()).collect();
    for token in NUMERIC_TOKEN.find_iter(original) {
        if candidate_numbers.contains(&token.as_str()) {
            score += weights.numeric_token;
        }
    }

    let candidate_runs: Vec<&str> = KANJI_RUN.find_iter(candidate).map(|m| m.as_str()).collect();
    for run in KANJI_RUN.find_iter(original) {
        if candidate_runs.iter().any(|cr| cr.contains(run.as_str())) {
            score += weights.kanji_run;
        }
    }

    score
}

/// Reorder a provider display name into Japanese address order.
///
/// Providers return comma-separated parts finest-first, ending in the
/// country name. Drop the country, reverse the rest, and concatenate
/// without separators. Display names with fewer than three parts are
/// returned unchanged.
pub fn format_japanese_address(display_name: &str) -> String {
    let parts: Vec<&str> = display_name.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return display_name.to_string();
    }
    parts[..parts.len() - 1].iter().rev().copied().collect()
}
