use std::fmt;

use derive_enum_from_into::EnumFrom;

mod unrecognized_attribute;

pub use unrecognized_attribute::UnrecognizedAttribute;

/// Any problem that can occur when checking the attributes passed to SQL generation.
///
/// Each variant is a caller contract violation. Callers propagate a `Problem` with `?` without
/// having to name the specific variant.
#[derive(Clone, Debug, PartialEq, Eq, EnumFrom)]
pub enum Problem {
    /// An attribute name is not part of the known-attribute set.
    UnrecognizedAttribute(UnrecognizedAttribute),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnrecognizedAttribute(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

// The message of the wrapped value is the whole message, so there is no source to chain.
impl std::error::Error for Problem {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Problem, UnrecognizedAttribute};

    fn lookup(name: &str) -> Result<usize, UnrecognizedAttribute> {
        match name {
            "name" => Ok(0),
            "schema" => Ok(1),
            _ => Err(UnrecognizedAttribute::new(name)),
        }
    }

    fn lookup_pair(first: &str, second: &str, reached: &mut Vec<usize>) -> Result<(), Problem> {
        reached.push(lookup(first)?);
        reached.push(lookup(second)?);
        Ok(())
    }

    #[test]
    fn display_delegates() {
        let problem = Problem::from(UnrecognizedAttribute::new("color"));
        assert_eq!(problem.to_string(), "The attribute color is not recognized");
    }

    #[test]
    fn question_mark_aborts_the_operation() {
        let mut reached = vec![];
        let result = lookup_pair("color", "name", &mut reached);

        assert_eq!(
            result,
            Err(Problem::UnrecognizedAttribute(UnrecognizedAttribute::new(
                "color"
            )))
        );
        assert!(reached.is_empty());
    }

    #[test]
    fn converts_into_anyhow() {
        let error: anyhow::Error = Problem::from(UnrecognizedAttribute::new("trust")).into();
        assert_eq!(format!("{error:#}"), "The attribute trust is not recognized");
        assert!(error.downcast_ref::<Problem>().is_some());
    }
}
