use crate::problem::{Problem, UnrecognizedAttribute};

/// The result of a check that keeps going after the first problem.
///
/// Unlike a `Result`, a `Failure` collects every problem found, so they can all be reported at
/// once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation<A> {
    Failure(Vec<Problem>),
    Success(A),
}

impl<A> From<Problem> for Validation<A> {
    fn from(value: Problem) -> Self {
        Self::Failure(vec![value])
    }
}

impl<A> From<UnrecognizedAttribute> for Validation<A> {
    fn from(value: UnrecognizedAttribute) -> Self {
        Problem::from(value).into()
    }
}

impl<A> Validation<A> {
    /// Map the success value, leaving failures untouched.
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> Validation<B> {
        match self {
            Self::Failure(err) => Validation::Failure(err),
            Self::Success(value) => Validation::Success(f(value)),
        }
    }

    /// Combine with another validation. Problems from both sides are kept, in order.
    pub fn and<B>(self, other: Validation<B>) -> Validation<B> {
        match (self, other) {
            (Self::Success(_), other) => other,
            (Self::Failure(errors), Validation::Success(_)) => Validation::Failure(errors),
            (Self::Failure(errors_l), Validation::Failure(errors_r)) => {
                Validation::Failure(itertools::concat([errors_l, errors_r]))
            }
        }
    }

    pub fn into_result(self) -> Result<A, Vec<Problem>> {
        match self {
            Self::Failure(problems) => Err(problems),
            Self::Success(value) => Ok(value),
        }
    }
}

/// Combine many validations into one, keeping all problems.
pub fn sequence_(validations: impl IntoIterator<Item = Validation<()>>) -> Validation<()> {
    let problems: Vec<Problem> = validations
        .into_iter()
        .filter_map(|validation| match validation {
            Validation::Success(()) => None,
            Validation::Failure(problems) => Some(problems),
        })
        .flatten()
        .collect();

    if problems.is_empty() {
        Validation::Success(())
    } else {
        Validation::Failure(problems)
    }
}
