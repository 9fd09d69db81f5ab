//! The predictor contract shared by every completion source.
//!
//! A [`Predictor`] answers one completion request: given the token under the
//! cursor, return the candidate strings it could become. Predictors are
//! infallible by contract -- whatever goes wrong behind the scenes, the shell
//! gets a (possibly empty) list, never an error.

use std::collections::HashSet;

/// A single completion request, as handed over by the completion framework.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Every token on the command line.
    pub all: Vec<String>,

    /// Tokens before the word being completed.
    pub completed: Vec<String>,

    /// The partial token under the cursor. The only field the predictors in
    /// this crate consult.
    pub last: String,

    /// The most recent fully-typed token.
    pub last_completed: String,
}

impl Args {
    /// Build a request for a partial token with no surrounding context.
    pub fn from_last(last: impl Into<String>) -> Self {
        let last = last.into();
        Self {
            all: vec![last.clone()],
            last,
            ..Self::default()
        }
    }
}

/// Supplies completion candidates for the token under the cursor.
///
/// Implementations must not panic: tab completion runs inside the user's
/// shell prompt, and a broken predictor has to degrade to "no suggestions".
pub trait Predictor {
    /// Candidates for `args.last`, each of which has `args.last` as a prefix.
    fn predict(&self, args: &Args) -> Vec<String>;
}

/// Adapts a plain function or closure into a [`Predictor`].
#[derive(Debug, Clone, Copy)]
pub struct PredictFn<F>(pub F);

impl<F> Predictor for PredictFn<F>
where
    F: Fn(&Args) -> Vec<String>,
{
    fn predict(&self, args: &Args) -> Vec<String> {
        (self.0)(args)
    }
}

/// Offers the candidates of one predictor followed by another's, dropping
/// duplicates (first occurrence wins). Built with [`or`].
#[derive(Debug, Clone, Copy)]
pub struct OrPredictor<A, B> {
    a: A,
    b: B,
}

/// Combine two predictors into one that offers both candidate sets.
pub fn or<A, B>(a: A, b: B) -> OrPredictor<A, B>
where
    A: Predictor,
    B: Predictor,
{
    OrPredictor { a, b }
}

impl<A, B> Predictor for OrPredictor<A, B>
where
    A: Predictor,
    B: Predictor,
{
    fn predict(&self, args: &Args) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for candidate in self.a.predict(args).into_iter().chain(self.b.predict(args)) {
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
        candidates
    }
}

/// Keep the names that start with `prefix`, preserving order.
///
/// An empty prefix keeps everything.
pub fn filter_prefix<I, S>(names: I, prefix: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| name.starts_with(prefix))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
