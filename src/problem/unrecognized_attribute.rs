use derive_more::{Display, Error};
use derive_new::new;

/// An attribute name that the consulted known-attribute set does not contain.
///
/// This is a caller contract violation: the attribute set supplied by the caller included a name
/// that is invalid in this context. Fix the calling code rather than retrying.
///
/// Only the formatted message is observable, through `Display`.
#[derive(Clone, Debug, PartialEq, Eq, new, Display, Error)]
#[display("The attribute {attribute_name} is not recognized")]
pub struct UnrecognizedAttribute {
    #[new(into)]
    attribute_name: String,
}
