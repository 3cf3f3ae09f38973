use thiserror::Error;

use super::solver::{self, Solution};

/// {a, b, c} make up one equation `a*x^2 + b*x + c = 0`
pub const COEFFICIENTS_PER_EQUATION: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoefficientTriple {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CoefficientTriple {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn coefs(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn solve(&self) -> Solution {
        solver::solve(self.a, self.b, self.c)
    }
}

/// # Description
/// Problems found while grouping tokens. None of them stop the batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// `position` counts the tokens pushed into the grouper from 1, command line options are
    /// not tokens
    #[error("skipping invalid input at coefficient #{position}: '{token}'")]
    InvalidToken { position: usize, token: String },
    #[error("{count} trailing coefficient(s) ignored")]
    TrailingCoefficients { count: usize },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grouping {
    pub triples: Vec<CoefficientTriple>,
    pub diagnostics: Vec<Diagnostic>,
}

/// # Description
/// Accepts tokens one at a time and packs every three valid numbers into a `CoefficientTriple`
/// ## Comments
/// - invalid tokens are dropped from the stream, they do not split a triple
/// - a partial triple left over by `finish` is reported, never padded
#[derive(Clone, Debug, Default)]
pub struct CoefficientGrouper {
    pending: [f64; COEFFICIENTS_PER_EQUATION],
    pending_len: usize,
    position: usize,
    grouping: Grouping,
}

impl CoefficientGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &str) {
        self.position += 1;

        let value = match parse_token(token) {
            Some(value) => value,
            None => {
                self.grouping.diagnostics.push(Diagnostic::InvalidToken {
                    position: self.position,
                    token: token.to_string(),
                });
                return;
            }
        };

        self.pending[self.pending_len] = value;
        self.pending_len += 1;

        if self.pending_len == COEFFICIENTS_PER_EQUATION {
            let [a, b, c] = self.pending;
            self.grouping.triples.push(CoefficientTriple::new(a, b, c));
            self.pending_len = 0;
        }
    }

    pub fn finish(mut self) -> Grouping {
        if self.pending_len > 0 {
            self.grouping
                .diagnostics
                .push(Diagnostic::TrailingCoefficients {
                    count: self.pending_len,
                });
        }
        self.grouping
    }
}

/// groups a whole batch of tokens, see `CoefficientGrouper`
pub fn group<I, S>(tokens: I) -> Grouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouper = CoefficientGrouper::new();
    tokens
        .into_iter()
        .for_each(|token| grouper.push(token.as_ref()));
    grouper.finish()
}

/// # Description
/// parses a coefficient, only finite values are accepted
/// ## Comments
/// - `inf`, `NaN` and literals that overflow (eg `1e999`) are rejected
/// - surrounding whitespace is not trimmed
pub fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
