//! Interactive question-answering session.
//!
//! The [`ChatLoop`] owns the rule table and the scraped spec book,
//! which never changes after startup. One call to [`ChatLoop::respond`]
//! handles one line: normalize, dispatch, format. The loop itself is
//! synchronous stdin/stdout; EOF and the farewell rules both end it
//! normally.

use std::io::Write;
use tracing::{debug, info};

use carbot_core::{Attribute, Lookup, ModelRecord, RuleSet, SpecBook, tokenize};

use crate::catalog::{QueryAction, default_rules};

/// Response when no rule matches (in practice only the empty query,
/// since the catch-all rule binds anything non-empty).
const FALLBACK: &str =
    "Sorry, I didn't understand that. Ask about top speed, engine type, or production duration.";

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print; the loop continues.
    Answer(String),
    /// End of session; the loop prints a goodbye and stops.
    Farewell,
}

/// The read-eval-print loop over a scraped spec book.
pub struct ChatLoop {
    rules: RuleSet<QueryAction>,
    book: SpecBook,
}

impl ChatLoop {
    #[must_use]
    pub fn new(book: SpecBook) -> Self {
        Self {
            rules: default_rules(),
            book,
        }
    }

    /// Replace the default rule table. Rule order is first-match-wins;
    /// see [`crate::catalog`].
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet<QueryAction>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub const fn book(&self) -> &SpecBook {
        &self.book
    }

    /// Answer one raw input line.
    #[must_use]
    pub fn respond(&self, line: &str) -> Reply {
        let query = tokenize(line);

        let Some(hit) = self.rules.dispatch(&query) else {
            debug!("No rule matched {:?}", query);
            return Reply::Answer(FALLBACK.to_string());
        };

        match hit.action {
            QueryAction::Farewell => Reply::Farewell,
            QueryAction::TopSpeed => self.answer_attribute(&hit.captures, Attribute::TopSpeed),
            QueryAction::Engine => self.answer_attribute(&hit.captures, Attribute::Engine),
            QueryAction::Production => self.answer_attribute(&hit.captures, Attribute::Production),
            QueryAction::ModelSummary => self.answer_summary(&hit.captures),
        }
    }

    fn answer_attribute(&self, captures: &[&[String]], attr: Attribute) -> Reply {
        let model = join_capture(captures);
        let text = match self.book.attribute(&model, attr) {
            Lookup::Found { record, value } => match attr {
                Attribute::TopSpeed => {
                    format!("The top speed of the Lamborghini {} is {}.", record.name, value)
                }
                Attribute::Engine => {
                    format!("The engine type of the Lamborghini {} is {}.", record.name, value)
                }
                Attribute::Production => {
                    format!("The Lamborghini {} was produced from {}.", record.name, value)
                }
            },
            Lookup::MissingAttribute(record) => format!(
                "No {} is recorded for the Lamborghini {}.",
                attr.label(),
                record.name
            ),
            Lookup::UnknownModel => not_found(&model),
        };
        Reply::Answer(text)
    }

    fn answer_summary(&self, captures: &[&[String]]) -> Reply {
        let model = join_capture(captures);
        let text = self
            .book
            .record(&model)
            .map_or_else(|| not_found(&model), summarize);
        Reply::Answer(text)
    }

    /// Run the interactive loop over stdin/stdout.
    ///
    /// Empty lines are skipped. A farewell rule prints a goodbye and
    /// returns; EOF on stdin returns silently. Both are normal
    /// termination.
    pub fn run_interactive(&self) -> std::io::Result<()> {
        info!("Starting interactive session over {} models", self.book.len());

        println!(
            "Lamborghini spec assistant: {} models loaded. Type 'bye' to quit.\n",
            self.book.len()
        );

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break; // EOF
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.respond(line) {
                Reply::Answer(text) => println!("{text}\n"),
                Reply::Farewell => {
                    println!("Goodbye!");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// The first captured span, joined back into a model name.
fn join_capture(captures: &[&[String]]) -> String {
    captures.first().map(|span| span.join(" ")).unwrap_or_default()
}

fn not_found(model: &str) -> String {
    format!("Sorry, I don't know a Lamborghini model called '{model}'. Try the bare model name first.")
}

fn summarize(record: &ModelRecord) -> String {
    let mut parts = Vec::new();
    for attr in [Attribute::Production, Attribute::Engine, Attribute::TopSpeed] {
        if let Some(value) = record.attribute(attr) {
            parts.push(format!("{}: {}", attr.label(), value));
        }
    }

    if parts.is_empty() {
        format!("The Lamborghini {} is listed, but no attributes were scraped for it.", record.name)
    } else {
        format!("Lamborghini {} — {}.", record.name, parts.join("; "))
    }
}
