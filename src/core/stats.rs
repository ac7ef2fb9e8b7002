//! Headline counts and per-author activity shares.

use linkify::{LinkFinder, LinkKind};
use serde::{Deserialize, Serialize};

use super::counter::OrderedCounter;
use super::filter::UserFilter;
use super::models::MessageRecord;
use crate::config::DEFAULT_TOP_USERS;

/// Message, word, media and link totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStats {
    pub messages: usize,
    pub words: usize,
    /// Messages whose body is exactly `<Media omitted>`.
    pub media: usize,
    pub links: usize,
}

/// Messages sent by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub messages: usize,
}

/// An author's share of all messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorShare {
    pub author: String,
    /// Rounded to two decimals.
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// Most active authors, most messages first.
    pub top: Vec<AuthorCount>,
    /// Every author's share, most messages first.
    pub shares: Vec<AuthorShare>,
}

/// Counts messages, words, media placeholders and links for `filter`.
///
/// Words are whitespace-delimited tokens. Links are detected with `linkify`;
/// a link without a scheme (`example.com`) only counts when its host ends in
/// a known public suffix, so `file.txt` or `done.Thanks` are not links.
pub fn fetch_stats(records: &[MessageRecord], filter: &UserFilter) -> ChatStats {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]).url_must_have_scheme(false);

    filter
        .select(records)
        .fold(ChatStats::default(), |mut stats, record| {
            let body = record.body();
            stats.messages += 1;
            stats.words += body.split_whitespace().count();
            stats.media += usize::from(record.is_media());
            stats.links += finder
                .links(body)
                .filter(|link| is_link(link.as_str()))
                .count();
            stats
        })
}

/// Returns `true` for URLs with a scheme and for bare hosts under a known
/// public suffix.
pub fn is_link(candidate: &str) -> bool {
    if let Some((scheme, _)) = candidate.split_once("://") {
        if !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c))
        {
            return true;
        }
    }

    let host = candidate
        .split(['/', '?', '#', ':'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('.')
        .to_ascii_lowercase();
    host.contains('.') && psl::suffix(host.as_bytes()).is_some_and(|suffix| suffix.is_known())
}

/// Ranks authors by message count over the whole log.
///
/// The ranking keeps the top five; `shares` covers every author. Equal counts
/// keep first-appearance order. Empty input gives empty results.
pub fn most_busy_users(records: &[MessageRecord]) -> BusyUsers {
    most_busy_users_n(records, DEFAULT_TOP_USERS)
}

/// Like [`most_busy_users`] with a custom ranking size.
pub fn most_busy_users_n(records: &[MessageRecord], n: usize) -> BusyUsers {
    let counter: OrderedCounter = records.iter().map(|r| r.author()).collect();
    let total = counter.total();
    if total == 0 {
        return BusyUsers::default();
    }

    let ranked = counter.ranked();
    let shares = ranked
        .iter()
        .map(|(author, count)| AuthorShare {
            author: author.clone(),
            percent: round2(*count as f64 * 100.0 / total as f64),
        })
        .collect();
    let top = ranked
        .into_iter()
        .take(n)
        .map(|(author, messages)| AuthorCount { author, messages })
        .collect();

    BusyUsers { top, shares }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
