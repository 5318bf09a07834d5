pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod splitter;

pub use config::Config;
pub use error::{Error, Result};
pub use parser::{parse_function, AccessModifier, Argument, Signature};
pub use splitter::{split_by_delimiters, Segment, Splitter};

/// Outcome of parsing one signature, tagged with where it came from
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub origin: String,
    pub input: String,
    pub result: Result<Signature>,
}

#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub outcomes: Vec<ParseOutcome>,
}

impl ParseReport {
    /// Parse every `(origin, input)` pair, keeping failures alongside successes
    pub fn collect<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let outcomes = inputs
            .into_iter()
            .map(|(origin, input)| {
                let result = parse_function(&input);
                ParseOutcome {
                    origin,
                    input,
                    result,
                }
            })
            .collect();
        Self { outcomes }
    }

    pub fn parsed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.len() - self.parsed_count()
    }
}
