use std::str::FromStr;

use regex::Regex;

use crate::list::LinkedList;

/// Failures from parsing a comma separated value string into a [`LinkedList`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseListError {
    #[error("element {index} of {input:?} is empty")]
    EmptyElement { index: usize, input: String },
    #[error("element {index} ({text:?}) cannot be parsed")]
    InvalidElement { index: usize, text: String },
}

/// Splits `input` on commas (whitespace around separators is ignored) and
/// appends each parsed element in order. Blank input gives the empty list.
pub fn string_to_list<T: FromStr>(input: &str) -> Result<LinkedList<T>, ParseListError> {
    let mut list = LinkedList::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(list);
    }
    let separator = Regex::new(r"\s*,\s*").unwrap();
    for (index, text) in separator.split(trimmed).enumerate() {
        if text.is_empty() {
            return Err(ParseListError::EmptyElement {
                index,
                input: trimmed.to_owned(),
            });
        }
        match text.parse::<T>() {
            Ok(value) => list.insert_end(value),
            Err(_) => {
                return Err(ParseListError::InvalidElement {
                    index,
                    text: text.to_owned(),
                })
            }
        }
    }
    Ok(list)
}

impl<T: FromStr> LinkedList<T> {
    /// Parses the comma separated rendering produced by the `Display` impl
    /// back into a list, so `from_string` and `to_string` round trip.
    ///
    /// ```
    /// use slink::LinkedList;
    ///
    /// let lst: LinkedList<i64> = LinkedList::from_string("10, 20, 30").unwrap();
    /// assert_eq!(lst.to_string(), "10, 20, 30");
    /// ```
    pub fn from_string(input: &str) -> Result<LinkedList<T>, ParseListError> {
        string_to_list(input)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_simple_list() {
        let lst: LinkedList<i64> = LinkedList::from_string("10, 20, 30").unwrap();
        assert_eq!(lst.to_string(), "10, 20, 30");
        assert_eq!(lst.len(), 3);
    }

    #[test]
    fn parses_single_element() {
        let lst: LinkedList<i64> = LinkedList::from_string("42").unwrap();
        assert_eq!(lst.to_string(), "42");
    }

    #[test]
    fn tolerates_loose_whitespace() {
        let lst: LinkedList<i64> = LinkedList::from_string("  6 ,10,   8 , 15 ").unwrap();
        assert_eq!(lst.to_string(), "6, 10, 8, 15");
    }

    #[test]
    fn blank_input_is_the_empty_list() {
        let lst: LinkedList<i64> = LinkedList::from_string("   ").unwrap();
        assert!(lst.is_empty());
    }

    #[test]
    fn reports_unparsable_element() {
        let err = LinkedList::<i64>::from_string("10, x, 30").unwrap_err();
        assert_eq!(
            err,
            ParseListError::InvalidElement {
                index: 1,
                text: "x".to_owned()
            }
        );
    }

    #[test]
    fn reports_empty_element() {
        let err = LinkedList::<i64>::from_string("10,,30").unwrap_err();
        assert_eq!(
            err,
            ParseListError::EmptyElement {
                index: 1,
                input: "10,,30".to_owned()
            }
        );
    }

    #[test]
    fn round_trips_with_display() {
        let original: LinkedList<i64> = LinkedList::from_values([3, 1, 4, 1, 5]);
        let reparsed: LinkedList<i64> = LinkedList::from_string(&original.to_string()).unwrap();
        assert!(original.is_identical_to(&reparsed));
    }

    #[test]
    fn parses_other_payload_types() {
        let lst: LinkedList<String> = LinkedList::from_string("alpha, beta").unwrap();
        assert_eq!(lst.to_string(), "alpha, beta");
    }
}
