//! Ordered team-name matching between feed names and quote names

use super::types::{Matchup, OddsQuote};
use serde::{Deserialize, Serialize};

/// Which strategy produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Case-insensitive equality on both names
    Exact,
    /// Substring either way on both names
    Contains,
    /// First and last words agree, or the abbreviation appears as a word
    Words,
}

pub type MatchStrategy = fn(&Matchup, &OddsQuote) -> bool;

/// Strategies in the order they are tried
pub const STRATEGIES: &[(MatchKind, MatchStrategy)] = &[
    (MatchKind::Exact, exact),
    (MatchKind::Contains, contains),
    (MatchKind::Words, words),
];

fn exact(m: &Matchup, q: &OddsQuote) -> bool {
    let side = |feed: &str, quote: &str| !feed.is_empty() && feed.eq_ignore_ascii_case(quote);
    side(&m.away_name, &q.away) && side(&m.home_name, &q.home)
}

fn contains(m: &Matchup, q: &OddsQuote) -> bool {
    let side = |feed: &str, quote: &str| {
        let (feed, quote) = (feed.trim().to_lowercase(), quote.trim().to_lowercase());
        !feed.is_empty() && !quote.is_empty() && (feed.contains(&quote) || quote.contains(&feed))
    };
    side(&m.away_name, &q.away) && side(&m.home_name, &q.home)
}

fn words(m: &Matchup, q: &OddsQuote) -> bool {
    let side = |name: &str, abbr: &str, quote: &str| {
        let name = name.to_lowercase();
        let quote = quote.to_lowercase();
        let name_words: Vec<&str> = name.split_whitespace().collect();
        let quote_words: Vec<&str> = quote.split_whitespace().collect();

        let ends_agree = match (name_words.first(), name_words.last(), quote_words.first(), quote_words.last()) {
            (Some(nf), Some(nl), Some(qf), Some(ql)) => nf == qf && nl == ql,
            _ => false,
        };
        let abbr = abbr.trim().to_lowercase();
        ends_agree || (!abbr.is_empty() && quote_words.contains(&abbr.as_str()))
    };
    side(&m.away_name, &m.away_abbr, &q.away) && side(&m.home_name, &m.home_abbr, &q.home)
}

/// Find the quote for a matchup, trying each strategy over every quote
/// before falling back to the next
pub fn find_quote<'q, I>(matchup: &Matchup, quotes: I) -> Option<(MatchKind, &'q OddsQuote)>
where
    I: IntoIterator<Item = &'q OddsQuote>,
    I::IntoIter: Clone,
{
    let quotes = quotes.into_iter();
    STRATEGIES.iter().find_map(|(kind, strategy)| {
        quotes
            .clone()
            .find(|q| strategy(matchup, q))
            .map(|q| (*kind, q))
    })
}
