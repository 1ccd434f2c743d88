#![cfg_attr(not(feature = "std"), no_std)]

//! `anypool`: generic growable containers with explicit single ownership.
//!
//! The crate provides a fixed-capacity array, a growable vector, narrow and
//! wide text built on the same growth policy, a non-owning text view, a
//! key/value pair, an inline optional, a chained hash map, and a pluggable
//! FNV-1a hashing facility. Every heap buffer has exactly one owner at all
//! times: deep copies go through `Clone`, and ownership transfer goes
//! through Rust moves or [`Take`](traits::Take), which empties the source
//! instead of duplicating the buffer.
//!
//! This crate is `no_std` compatible and allocates through `alloc`. Enable
//! the optional `std` feature to forward it to the error types:
//! ```toml
//! [dependencies]
//! anypool = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Growth Policy
//!
//! Buffer-backed containers allocate lazily: nothing is allocated before
//! the first insert or an explicit reserve. On overflow the buffer doubles,
//! or jumps straight to the requested capacity if that is larger, so
//! appending is amortized O(1). Buffers are released exactly once, on drop
//! or an explicit `reset`.
//!
//! Every growing operation has a fallible `try_` form that reports
//! allocation failure as a distinct [`Error`] instead of corrupting the
//! container; the plain forms fail fast.
//!
//! # Vector
//!
//! ```
//! use anypool::Vector;
//!
//! let mut values = Vector::new();
//! for i in 0..5 {
//!     values.push(i);
//! }
//! assert_eq!(values.len(), 5);
//!
//! values.remove(2);
//! assert_eq!(values.as_slice(), &[0, 1, 3, 4]);
//! ```
//!
//! # Text and views
//!
//! ```
//! use anypool::{Text8, TextView};
//!
//! let mut greeting = Text8::from("hello");
//! greeting.append(b" world");
//! assert_eq!(greeting.len(), 11);
//!
//! // Views borrow the buffer; the borrow checker ties their lifetime to it.
//! let view = greeting.view();
//! assert_eq!(view, TextView::from_str("hello world"));
//! ```
//!
//! The buffer behind a [`Text`] keeps one reserved terminator slot, so
//! collaborators that expect NUL-terminated data can read it directly via
//! [`Text::as_nul_terminated`].
//!
//! # UnorderedMap
//!
//! ```
//! use anypool::{Text8, UnorderedMap};
//!
//! let mut fields = UnorderedMap::new();
//! fields.insert(Text8::from("a"), 1);
//! fields.insert(Text8::from("b"), 2);
//! fields.insert(Text8::from("a"), 3); // replaces
//!
//! assert_eq!(fields.len(), 2);
//! assert_eq!(fields.find(&Text8::from("a")), Some(&3));
//! assert_eq!(fields.find(&Text8::from("c")), None);
//! ```
//!
//! # Ownership transfer
//!
//! ```
//! use anypool::{traits::Take, Vector};
//!
//! let mut source = Vector::from_slice(&[1, 2, 3]);
//! let moved = source.take();
//!
//! assert_eq!(moved.as_slice(), &[1, 2, 3]);
//! assert_eq!(source.len(), 0);
//! assert_eq!(source.capacity(), 0); // no buffer left behind
//! ```
//!
//! # Concurrency
//!
//! Containers are single-threaded value types with no internal
//! synchronization. Concurrent mutation of one instance is the caller's
//! responsibility to prevent; read-only sharing of an instance nobody
//! mutates is safe.

extern crate alloc;

mod array;
mod error;
pub mod hash;
mod iter;
mod map;
mod optional;
mod pair;
mod raw;
mod text;
pub mod traits;
mod vector;
mod view;

// Re-export public types
pub use array::Array;
pub use error::Error;
pub use hash::{FnvBuildHasher, FnvHasher};
pub use iter::IntoIter;
pub use map::{IntoIter as MapIntoIter, Iter as MapIter, IterMut as MapIterMut, UnorderedMap};
pub use optional::Optional;
pub use pair::Pair;
pub use text::{CodeUnit, Text, Text16, Text8};
pub use vector::Vector;
pub use view::{TextView, View16, View8};
