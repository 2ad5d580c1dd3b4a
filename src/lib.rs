//! A small collections library built around owned node chains.

#![no_std]

extern crate alloc;

pub mod linked_list;
