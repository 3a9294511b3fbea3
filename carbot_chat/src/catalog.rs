//! Built-in query rules.
//!
//! Dispatch is first-match-wins, so the list below goes from most
//! specific to most general. The bare-model rule `"%"` must stay last:
//! it binds any non-empty query, and anything listed after it is
//! unreachable. Exit rules come first so `"bye"` is never treated as a
//! model name.

use carbot_core::RuleSet;

/// What a matched rule asks the session to do. Attribute actions use
/// the first captured span as the model name; `Farewell` ends the loop
/// instead of producing an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    TopSpeed,
    Engine,
    Production,
    ModelSummary,
    Farewell,
}

/// The default ordered rule table.
#[must_use]
pub fn default_rules() -> RuleSet<QueryAction> {
    RuleSet::new()
        // Session control
        .with_rule("bye", QueryAction::Farewell)
        .with_rule("exit", QueryAction::Farewell)
        .with_rule("quit", QueryAction::Farewell)
        // Top speed
        .with_rule("what is the top speed of the %", QueryAction::TopSpeed)
        .with_rule("what is the top speed of %", QueryAction::TopSpeed)
        .with_rule("how fast is the %", QueryAction::TopSpeed)
        .with_rule("how fast is %", QueryAction::TopSpeed)
        .with_rule("top speed of the %", QueryAction::TopSpeed)
        .with_rule("top speed of %", QueryAction::TopSpeed)
        .with_rule("% top speed", QueryAction::TopSpeed)
        // Engine
        .with_rule("what engine is in the %", QueryAction::Engine)
        .with_rule("what engine does the % have", QueryAction::Engine)
        .with_rule("engine type of %", QueryAction::Engine)
        .with_rule("engine of the %", QueryAction::Engine)
        .with_rule("engine of %", QueryAction::Engine)
        .with_rule("% engine type", QueryAction::Engine)
        .with_rule("% engine", QueryAction::Engine)
        // Production duration
        .with_rule("when was the % produced", QueryAction::Production)
        .with_rule("when was % produced", QueryAction::Production)
        .with_rule("years of production of %", QueryAction::Production)
        .with_rule("production of the %", QueryAction::Production)
        .with_rule("production of %", QueryAction::Production)
        .with_rule("% production", QueryAction::Production)
        // Catch-all: bare model name. Keep last.
        .with_rule("%", QueryAction::ModelSummary)
}
