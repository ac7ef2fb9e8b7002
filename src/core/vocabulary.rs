//! Word and emoji frequency.
//!
//! Word analysis skips system records (group notifications, headerless media
//! lines) and `<Media omitted>` bodies. Emoji analysis looks at every body of
//! the selected author and walks extended grapheme clusters, so ZWJ sequences,
//! skin tones and flags count as one emoji. Each emoji is tallied under its
//! fully-qualified form, so `❤` and `❤️` land in the same row.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::counter::OrderedCounter;
use super::filter::UserFilter;
use super::models::MessageRecord;
use crate::config::{DEFAULT_TOP_TERMS, StopWords};

/// A word or emoji with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl From<(String, usize)> for TermCount {
    fn from((term, count): (String, usize)) -> Self {
        Self { term, count }
    }
}

fn human_text<'a>(
    records: &'a [MessageRecord],
    filter: &'a UserFilter,
) -> impl Iterator<Item = &'a str> + 'a {
    filter
        .select(records)
        .filter(|r| !r.is_system() && !r.is_media())
        .map(|r| r.body())
}

/// All human-written bodies joined by a space, for word-cloud rendering.
pub fn word_cloud_source(records: &[MessageRecord], filter: &UserFilter) -> String {
    human_text(records, filter).collect::<Vec<_>>().join(" ")
}

/// The 20 most frequent lower-cased words, excluding `stop_words`.
pub fn most_common_words(
    records: &[MessageRecord],
    filter: &UserFilter,
    stop_words: &StopWords,
) -> Vec<TermCount> {
    most_common_words_n(records, filter, stop_words, DEFAULT_TOP_TERMS)
}

/// Like [`most_common_words`] with a custom ranking size.
pub fn most_common_words_n(
    records: &[MessageRecord],
    filter: &UserFilter,
    stop_words: &StopWords,
    n: usize,
) -> Vec<TermCount> {
    let mut counter = OrderedCounter::new();
    for body in human_text(records, filter) {
        let lowered = body.to_lowercase();
        for word in lowered.split_whitespace() {
            if !stop_words.contains(word) {
                counter.add(word);
            }
        }
    }

    counter.most_common(n).into_iter().map(TermCount::from).collect()
}

/// The fully-qualified form of `grapheme` if it is a single emoji.
pub fn canonical_emoji(grapheme: &str) -> Option<&'static str> {
    emojis::get(grapheme).map(emojis::Emoji::as_str)
}

/// The 20 most frequent emoji.
pub fn most_common_emoji(records: &[MessageRecord], filter: &UserFilter) -> Vec<TermCount> {
    most_common_emoji_n(records, filter, DEFAULT_TOP_TERMS)
}

/// Like [`most_common_emoji`] with a custom ranking size.
pub fn most_common_emoji_n(
    records: &[MessageRecord],
    filter: &UserFilter,
    n: usize,
) -> Vec<TermCount> {
    filter
        .select(records)
        .flat_map(|r| r.body().graphemes(true))
        .filter_map(canonical_emoji)
        .collect::<OrderedCounter>()
        .most_common(n)
        .into_iter()
        .map(TermCount::from)
        .collect()
}
