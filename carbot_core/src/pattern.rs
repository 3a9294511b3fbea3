//! Wildcard template matching over token sequences.
//!
//! A [`Template`] is an ordered mix of literal tokens and `%` wildcards,
//! parsed from a whitespace-separated spec string such as
//! `"top speed of %"`. Matching a query against a template either fails
//! or binds every wildcard to a contiguous, non-empty run of query
//! tokens.
//!
//! Binding policy (both halves are load-bearing for the rule table):
//! - a wildcard consumes **at least one** token; zero-width bindings are
//!   rejected, so the catch-all template `"%"` never fires on an empty
//!   query;
//! - the match is **total** over the query — a template never matches a
//!   proper prefix, so trailing tokens the template does not account for
//!   make the match fail.
//!
//! Wildcards bind shortest-first: a wildcard takes one token and grows
//! only when the rest of the template cannot match the rest of the
//! query. Failed (template-position, query-position) states are
//! memoized so repeated backtracking over a long query stays linear in
//! the number of states rather than exponential.

use std::collections::HashSet;

/// The wildcard marker used in template spec strings.
pub const WILDCARD: &str = "%";

/// One element of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Matches exactly this token.
    Literal(String),
    /// Matches a contiguous run of one or more query tokens.
    Wildcard,
}

/// An ordered pattern of literal and wildcard tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parse a template from a whitespace-separated spec string.
    ///
    /// Each `%` word becomes a wildcard; every other word is a literal.
    /// An empty spec yields the empty template, which matches only the
    /// empty query.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let tokens = spec
            .split_whitespace()
            .map(|word| {
                if word == WILDCARD {
                    Token::Wildcard
                } else {
                    Token::Literal(word.to_string())
                }
            })
            .collect();
        Self { tokens }
    }

    /// Number of wildcard tokens in this template.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Wildcard))
            .count()
    }

    /// Minimum query length this template can match: one token per
    /// element, since wildcards consume at least one token.
    #[must_use]
    pub fn min_query_len(&self) -> usize {
        self.tokens.len()
    }

    /// Match `query` against this template.
    ///
    /// On success returns the captured spans, one per wildcard in
    /// template order. `None` is the normal "does not fit" outcome,
    /// never an error.
    #[must_use]
    pub fn bind<'q>(&self, query: &'q [String]) -> Option<Vec<&'q [String]>> {
        if query.len() < self.min_query_len() {
            return None;
        }

        let mut spans = Vec::with_capacity(self.wildcard_count());
        let mut dead = HashSet::new();
        if step(&self.tokens, query, 0, 0, &mut spans, &mut dead) {
            Some(spans)
        } else {
            None
        }
    }
}

/// Try to match `tokens[ti..]` against `query[qi..]`, appending wildcard
/// spans to `spans` on the successful path. `dead` records failed
/// `(ti, qi)` states so each is explored at most once.
fn step<'q>(
    tokens: &[Token],
    query: &'q [String],
    ti: usize,
    qi: usize,
    spans: &mut Vec<&'q [String]>,
    dead: &mut HashSet<(usize, usize)>,
) -> bool {
    if dead.contains(&(ti, qi)) {
        return false;
    }

    match tokens.get(ti) {
        None => {
            // Template exhausted; total match requires the query to be too.
            if qi == query.len() {
                return true;
            }
        }
        Some(Token::Literal(word)) => {
            if query.get(qi).is_some_and(|t| t == word)
                && step(tokens, query, ti + 1, qi + 1, spans, dead)
            {
                return true;
            }
        }
        Some(Token::Wildcard) => {
            // Shortest span first, growing until the remainder matches.
            for end in (qi + 1)..=query.len() {
                spans.push(&query[qi..end]);
                if step(tokens, query, ti + 1, end, spans, dead) {
                    return true;
                }
                spans.pop();
            }
        }
    }

    dead.insert((ti, qi));
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn captures(template: &str, query: &str) -> Option<Vec<Vec<String>>> {
        let query = q(query);
        Template::parse(template)
            .bind(&query)
            .map(|spans| spans.into_iter().map(<[String]>::to_vec).collect())
    }

    #[test]
    fn test_parse_mixes_literals_and_wildcards() {
        let template = Template::parse("top speed of %");
        assert_eq!(template.wildcard_count(), 1);
        assert_eq!(template.min_query_len(), 4);
    }

    #[test]
    fn test_all_literal_exact_match() {
        assert_eq!(captures("hello there", "hello there"), Some(vec![]));
    }

    #[test]
    fn test_all_literal_rejects_extra_tokens() {
        // Total match: a trailing token the template ignores is a failure.
        assert_eq!(captures("hello there", "hello there friend"), None);
    }

    #[test]
    fn test_all_literal_rejects_different_token() {
        assert_eq!(captures("hello there", "hello friend"), None);
    }

    #[test]
    fn test_empty_template_matches_only_empty_query() {
        assert_eq!(captures("", ""), Some(vec![]));
        assert_eq!(captures("", "anything"), None);
    }

    #[test]
    fn test_query_shorter_than_template_fails() {
        assert_eq!(captures("top speed of %", "top speed of"), None);
        assert_eq!(captures("a b c", "a b"), None);
    }

    #[test]
    fn test_wildcard_at_end() {
        assert_eq!(
            captures("top speed of %", "top speed of huracán evo"),
            Some(vec![q("huracán evo")])
        );
    }

    #[test]
    fn test_wildcard_at_start() {
        assert_eq!(
            captures("% top speed", "urus top speed"),
            Some(vec![q("urus")])
        );
        assert_eq!(
            captures("% top speed", "huracán evo top speed"),
            Some(vec![q("huracán evo")])
        );
    }

    #[test]
    fn test_wildcard_in_middle() {
        assert_eq!(
            captures("when was the % produced", "when was the countach produced"),
            Some(vec![q("countach")])
        );
    }

    #[test]
    fn test_wildcard_requires_at_least_one_token() {
        assert_eq!(captures("top speed of %", "top speed of"), None);
        assert_eq!(captures("%", ""), None);
    }

    #[test]
    fn test_lone_wildcard_captures_whole_query() {
        assert_eq!(captures("%", "miura"), Some(vec![q("miura")]));
        assert_eq!(captures("%", "the miura sv"), Some(vec![q("the miura sv")]));
    }

    #[test]
    fn test_adjacent_wildcards_bind_shortest_first() {
        // Each wildcard needs one token; the first stays minimal.
        assert_eq!(
            captures("% %", "alpha beta gamma"),
            Some(vec![q("alpha"), q("beta gamma")])
        );
    }

    #[test]
    fn test_two_wildcards_around_literal() {
        assert_eq!(
            captures("% versus %", "urus versus aventador svj"),
            Some(vec![q("urus"), q("aventador svj")])
        );
    }

    #[test]
    fn test_backtracking_over_repeated_literal() {
        // "speed" also occurs inside the span the wildcard should take.
        // Shortest-first would stop at "the", but the remainder only
        // matches when the wildcard grows past the inner "speed".
        assert_eq!(
            captures("% speed", "the speed demon speed"),
            Some(vec![q("the speed demon")])
        );
    }

    #[test]
    fn test_shortest_first_stops_at_first_feasible_split() {
        // Both "is" positions admit a match; policy picks the earliest.
        assert_eq!(
            captures("% is %", "this is what it is about"),
            Some(vec![q("this"), q("what it is about")])
        );
    }

    #[test]
    fn test_no_match_when_literal_absent() {
        assert_eq!(captures("% top speed", "urus engine type"), None);
    }

    #[test]
    fn test_wildcard_cannot_leave_tokens_unconsumed() {
        assert_eq!(captures("engine of %", "engine of urus please thanks"), Some(vec![q("urus please thanks")]));
        assert_eq!(captures("% engine", "urus engine swap"), None);
    }

    #[test]
    fn test_many_wildcards_long_query_terminates() {
        // Worst case for naive backtracking; the memo keeps this cheap.
        let template = Template::parse("% % % % % zz");
        let query = q("a a a a a a a a a a a a a a a a a a a a a a a a");
        assert_eq!(template.bind(&query), None);
    }
}
