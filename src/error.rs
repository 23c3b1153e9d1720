use core::fmt::{self, Display, Formatter};

/// Failure returned by the fallible list operations.
///
/// Lookups that miss (`index_of`, `contains`) never produce one of these,
/// they report absence with a sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// A removal was attempted on a list with no elements.
    EmptyCollection,
    /// No element compared equal to the requested value.
    ElementNotFound,
    /// `index` was negative or not below `len`.
    IndexOutOfRange { index: isize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "list is empty"),
            Self::ElementNotFound => write!(f, "item not found in the list"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a list of length {len}")
            }
        }
    }
}

impl core::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn messages() {
        assert_eq!(ListError::EmptyCollection.to_string(), "list is empty");
        assert_eq!(
            ListError::ElementNotFound.to_string(),
            "item not found in the list"
        );
        assert_eq!(
            ListError::IndexOutOfRange { index: -1, len: 0 }.to_string(),
            "index -1 is out of range for a list of length 0"
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ListError::EmptyCollection);
        assert!(err.source().is_none());
        assert_eq!(format!("{err}"), "list is empty");
    }
}
