//! # Owned Singly Linked List
//!
//! This module provides a singly linked list of `i32` values with exclusive
//! ownership between nodes.
//!
//! ## Core Components
//!
//! - [`node::IntNode`]: a node holding one value and owning its successor.
//! - [`node::Head`]: the owning handle type, `None` for the empty list.
//! - [`list`]: list-wide operations over a chain, given a handle to its head.
//! - [`iter::Iter`]: a borrowing iterator over the nodes of a chain.
//!
//! ## Handles
//!
//! Handles come in two shapes:
//!
//! - `Option<&IntNode>` for read-only traversal.
//! - [`node::Head`] for operations that restructure the chain; these take the
//!   handle by value and hand back the possibly changed head.
//!
//! `Option::as_deref` converts the owning shape into the borrowing one.
//!
//! ## Ownership
//!
//! Each chain has one logical owner. Nothing here synchronizes concurrent
//! access; the borrow checker rules out shared mutation within safe code, and
//! the types are plain data with no interior mutability.

pub mod node;
pub mod list;
pub mod iter;
