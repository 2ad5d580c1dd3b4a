//! An owned linked list implementation.
//!
//! In an owned linked list, every node holds exclusive ownership of its
//! successor. This is in contrast to an intrusive linked list, where links are
//! embedded in externally owned structures. Ownership makes the chain acyclic
//! and finite by construction, and releasing a handle releases every node
//! reachable from it.
//!
//! A list is addressed by a handle to its first node; `None` is the empty
//! list. The handle is not a distinct object: any node reference acts as the
//! head of the chain that starts at it.
//!
//! # Examples
//!
//! ```
//! use chain_collections::linked_list::owned::list;
//!
//! let lst = list::create(1);
//! let lst = list::append(lst, 2);
//! let lst = list::append(lst, 3);
//!
//! assert_eq!(list::size(lst.as_deref()), 3);
//! assert_eq!(list::to_array(lst.as_deref()), vec![1, 2, 3]);
//! assert!(list::find(lst.as_deref(), 2).is_some());
//!
//! let lst = list::remove(lst, 1);
//! assert_eq!(list::size(lst.as_deref()), 2);
//! assert_eq!(list::to_array(lst.as_deref()), vec![2, 3]);
//!
//! list::destroy(lst);
//! ```
pub mod owned;
