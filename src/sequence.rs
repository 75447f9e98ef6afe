use std::fmt::{self, Display};

use crate::error::{ListError, Result};

/// Deepest recursion the recursive algorithms will attempt. Each level costs
/// one call frame, so longer lists are refused with
/// [`ListError::ResourceExhausted`] instead of risking a stack overflow.
pub const RECURSION_LIMIT: usize = 4096;

/// Operations shared by the singly- and doubly-linked lists.
///
/// Positions are 1-based. Every fallible operation validates its position
/// before touching the list, so an `Err` means nothing changed.
pub trait Sequence<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` as the new first element.
    fn insert_head(&mut self, value: T);

    /// Inserts `value` so that it ends up at `pos`. `pos == len + 1` appends.
    fn insert(&mut self, pos: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `pos`.
    fn delete(&mut self, pos: usize) -> Result<T>;

    /// Returns the element at `pos`.
    fn get(&self, pos: usize) -> Result<&T>;

    /// Reverses the list in place without recursion.
    fn reverse(&mut self);

    /// Reverses the list in place recursively. Uses one call frame per
    /// element and fails with `ResourceExhausted` past [`RECURSION_LIMIT`].
    fn reverse_recursive(&mut self) -> Result<()>;

    /// Renders the elements last to first, space separated, leaving the list
    /// untouched.
    fn reverse_print(&self) -> String
    where
        T: Display;
}

/// Validates a position for insertion, which may address one past the end.
pub(crate) fn check_insert(pos: usize, len: usize) -> Result<()> {
    if pos == 0 {
        return Err(ListError::InvalidArgument { pos });
    }
    if pos > len + 1 {
        return Err(ListError::OutOfRange { pos, len });
    }
    Ok(())
}

/// Validates a position that must name an existing element.
pub(crate) fn check_position(pos: usize, len: usize) -> Result<()> {
    if pos == 0 {
        return Err(ListError::InvalidArgument { pos });
    }
    if pos > len {
        return Err(ListError::OutOfRange { pos, len });
    }
    Ok(())
}

pub(crate) fn check_recursion(len: usize) -> Result<()> {
    if len > RECURSION_LIMIT {
        return Err(ListError::ResourceExhausted {
            len,
            limit: RECURSION_LIMIT,
        });
    }
    Ok(())
}

/// Writes `values` separated by single spaces.
pub(crate) fn write_joined<I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

pub(crate) fn join<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_allows_one_past_the_end() {
        assert_eq!(check_insert(1, 0), Ok(()));
        assert_eq!(check_insert(4, 3), Ok(()));
        assert_eq!(
            check_insert(5, 3),
            Err(ListError::OutOfRange { pos: 5, len: 3 })
        );
    }

    #[test]
    fn zero_is_invalid_everywhere() {
        assert_eq!(
            check_insert(0, 3),
            Err(ListError::InvalidArgument { pos: 0 })
        );
        assert_eq!(
            check_position(0, 0),
            Err(ListError::InvalidArgument { pos: 0 })
        );
    }

    #[test]
    fn existing_position_stops_at_len() {
        assert_eq!(check_position(3, 3), Ok(()));
        assert_eq!(
            check_position(1, 0),
            Err(ListError::OutOfRange { pos: 1, len: 0 })
        );
    }

    #[test]
    fn recursion_limit_is_inclusive() {
        assert!(check_recursion(RECURSION_LIMIT).is_ok());
        assert_eq!(
            check_recursion(RECURSION_LIMIT + 1),
            Err(ListError::ResourceExhausted {
                len: RECURSION_LIMIT + 1,
                limit: RECURSION_LIMIT,
            })
        );
    }

    #[test]
    fn join_has_no_trailing_separator() {
        assert_eq!(join(vec![1, 2, 3]), "1 2 3");
        assert_eq!(join(Vec::<i32>::new()), "");
    }
}
