//! Singly linked lists with tracked head and tail pointers.
//!
//! [`LinkedList`] owns its chain of nodes through the head link and keeps the
//! tail and length tracked across every structural mutation (append, prepend,
//! delete front/last/nth). Debug builds re-validate the bookkeeping after
//! every mutation; see [`LinkedList::verify_integrity`].
//!
//! ```
//! use slink::LinkedList;
//!
//! let mut lst = LinkedList::from_values([10, 20, 30, 40]);
//! lst.delete_front().unwrap();
//! lst.delete_last().unwrap();
//! assert_eq!(lst.to_string(), "20, 30");
//! assert_eq!(lst.get_tail(), Some(&30));
//! ```

mod integrity;
mod list;
mod node;
mod parse;

pub use integrity::{IntegrityViolation, CYCLE_GUARD_STEPS};
pub use list::{Iter, LinkedList, ListError, Removed};
pub use parse::{string_to_list, ParseListError};
