//! Ordered rule table with first-match-wins dispatch.
//!
//! A [`RuleSet`] holds (template, action) pairs and tries them strictly
//! in insertion order. Ordering is a correctness invariant, not an
//! implementation detail: a general template listed before a more
//! specific one makes the specific rule unreachable. The catalog that
//! builds the default set keeps the catch-all `"%"` rule last for
//! exactly this reason.

use crate::pattern::Template;

/// One template bound to an action value.
#[derive(Debug, Clone)]
pub struct Rule<A> {
    template: Template,
    action: A,
}

impl<A> Rule<A> {
    /// Build a rule from a template spec string (see [`Template::parse`]).
    #[must_use]
    pub fn new(spec: &str, action: A) -> Self {
        Self {
            template: Template::parse(spec),
            action,
        }
    }

    /// The template this rule matches on.
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }
}

/// A successful dispatch: the matched rule's action plus the wildcard
/// captures, one span per wildcard in template order.
#[derive(Debug)]
pub struct Dispatch<'q, 'r, A> {
    pub action: &'r A,
    pub captures: Vec<&'q [String]>,
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet<A> {
    rules: Vec<Rule<A>>,
}

impl<A> RuleSet<A> {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Later rules only fire when no earlier rule matches.
    #[must_use]
    pub fn with_rule(mut self, spec: &str, action: A) -> Self {
        self.rules.push(Rule::new(spec, action));
        self
    }

    pub fn push(&mut self, rule: Rule<A>) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Try each rule in insertion order; the first template that binds
    /// wins. `None` means no rule matched, which callers answer with
    /// their fixed fallback response.
    #[must_use]
    pub fn dispatch<'q>(&self, query: &'q [String]) -> Option<Dispatch<'q, '_, A>> {
        self.rules.iter().find_map(|rule| {
            rule.template.bind(query).map(|captures| Dispatch {
                action: &rule.action,
                captures,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::tokenize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Probe {
        TopSpeed,
        Summary,
    }

    #[test]
    fn test_dispatch_first_match_wins() {
        // The catch-all "%" would also bind "urus top speed"; the more
        // specific rule listed first must take it.
        let rules = RuleSet::new()
            .with_rule("% top speed", Probe::TopSpeed)
            .with_rule("%", Probe::Summary);

        let query = tokenize("urus top speed");
        let Some(hit) = rules.dispatch(&query) else {
            panic!("expected a match");
        };
        assert_eq!(*hit.action, Probe::TopSpeed);
        assert_eq!(hit.captures, vec![&["urus".to_string()][..]]);
    }

    #[test]
    fn test_dispatch_general_rule_shadows_when_listed_first() {
        // The inverse ordering proves the invariant is real.
        let rules = RuleSet::new()
            .with_rule("%", Probe::Summary)
            .with_rule("% top speed", Probe::TopSpeed);

        let query = tokenize("urus top speed");
        let Some(hit) = rules.dispatch(&query) else {
            panic!("expected a match");
        };
        assert_eq!(*hit.action, Probe::Summary);
    }

    #[test]
    fn test_dispatch_falls_through_to_later_rule() {
        let rules = RuleSet::new()
            .with_rule("% top speed", Probe::TopSpeed)
            .with_rule("%", Probe::Summary);

        let query = tokenize("miura");
        let Some(hit) = rules.dispatch(&query) else {
            panic!("expected a match");
        };
        assert_eq!(*hit.action, Probe::Summary);
        assert_eq!(hit.captures, vec![&["miura".to_string()][..]]);
    }

    #[test]
    fn test_dispatch_no_match_on_empty_query() {
        let rules = RuleSet::new()
            .with_rule("% top speed", Probe::TopSpeed)
            .with_rule("%", Probe::Summary);

        assert!(rules.dispatch(&[]).is_none());
    }

    #[test]
    fn test_empty_rule_set_never_matches() {
        let rules: RuleSet<Probe> = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.dispatch(&tokenize("anything")).is_none());
    }
}
