use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools as _;

use crate::problem::UnrecognizedAttribute;
use crate::validation::{self, Validation};

/// The attribute names recognized in some context, e.g. the attributes of a function annotation.
///
/// Names are matched exactly, including case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnownAttributes {
    names: BTreeSet<String>,
}

impl KnownAttributes {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().collect()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Known names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn check(&self, name: &str) -> Result<(), UnrecognizedAttribute> {
        if self.is_known(name) {
            Ok(())
        } else {
            Err(UnrecognizedAttribute::new(name))
        }
    }

    /// Checks names in order and stops at the first one that isn't known.
    pub fn check_all<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), UnrecognizedAttribute> {
        names.into_iter().try_for_each(|name| self.check(name))
    }

    /// Checks every name, reporting each unknown one (including repeats) in input order.
    pub fn validate<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Validation<()> {
        validation::sequence_(names.into_iter().map(|name| match self.check(name) {
            Ok(()) => Validation::Success(()),
            Err(problem) => problem.into(),
        }))
    }
}

impl<S: Into<String>> FromIterator<S> for KnownAttributes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for KnownAttributes {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for KnownAttributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            f.write_str("(none)")
        } else {
            write!(f, "{}", self.names().join(", "))
        }
    }
}
