//! # dfa-rs: Deterministic Finite Automata in Rust
//!
//! **`dfa-rs`** is a small, strongly-typed library for **deterministic finite automata (DFAs)**
//! and their closure properties: complement, intersection, union and difference.
//!
//! ## What is a DFA?
//!
//! A DFA over an alphabet `S` with states `Q` is a start state, a set of terminal states and a
//! total transition function `δ: Q × S → Q`. Running a word folds `δ` over its symbols; the word is
//! **accepted** when the run ends in a terminal state.
//!
//! ## Key Features
//!
//! - **Typed alphabets and state spaces**: both are Rust types implementing [`Finite`][crate::types::Finite].
//!   Use [`bool`], [`Fin<N>`][crate::types::Fin], pairs, or your own enums via [`finite_enum!`].
//! - **Total by construction**: a [`Dfa`][crate::dfa::Dfa] always has a transition for every state and symbol.
//!   Partial rule sets are rejected by the [`DfaBuilder`][crate::builder::DfaBuilder].
//! - **Closure operations**: complement, product (intersection), union via De Morgan, difference,
//!   also available as the operators `!`, `&`, `|`, `-` and `^`.
//! - **Language queries**: emptiness, universality, shortest witnesses, inclusion, equivalence and
//!   exact word counts (as [`BigUint`][num_bigint::BigUint]).
//! - **Batch recognition**: many words at once, optionally in parallel.
//!
//! ## Basic Usage
//!
//! ```rust
//! use dfa_rs::dfa::Dfa;
//! use dfa_rs::types::Fin;
//!
//! // Binary strings ending in 1.
//! let ends_in_one = Dfa::from_fn(false, |q: bool| q, |_q, bit: bool| bit);
//!
//! // Binary strings of even length.
//! let even_length = Dfa::from_fn(
//!     Fin::<2>::new(0),
//!     |q: Fin<2>| q.get() == 0,
//!     |q: Fin<2>, _bit: bool| Fin::new(1 - q.get()),
//! );
//!
//! assert!(ends_in_one.accepts(&[false, true]));
//! assert!(!ends_in_one.accepts(&[]));
//!
//! // Complement and product:
//! let not_one = !&ends_in_one;
//! assert!(not_one.accepts(&[true, false]));
//!
//! let both = &ends_in_one & &even_length;
//! assert!(both.accepts(&[false, true]));
//! assert!(!both.accepts(&[true]));
//!
//! // Union through De Morgan:
//! let either = &ends_in_one | &even_length;
//! assert!(either.accepts(&[]));
//! assert!(either.accepts(&[true]));
//! assert!(!either.accepts(&[true, true, false]));
//!
//! // Language queries:
//! assert_eq!(both.shortest_accepted(), Some(vec![false, true]));
//! assert!(both.is_subset_of(&ends_in_one));
//! ```
//!
//! ## Core Components
//!
//! - **[`dfa`]**: The [`Dfa`][crate::dfa::Dfa] type, its transition representation and `run`/`accepts`.
//! - **[`closure`]**: Complement, intersection, union and difference constructions.
//! - **[`language`]**: Emptiness, witnesses, inclusion, equivalence and counting.
//! - **[`builder`]**: Rule-based construction with validation.
//! - **[`run`]**: Incremental execution over streamed input.
//! - **[`batch`]**: Recognition of many words, sequential or parallel.

pub mod batch;
pub mod bitset;
pub mod builder;
pub mod closure;
pub mod dfa;
pub mod error;
pub mod language;
pub mod ops;
pub mod run;
pub mod set;
pub mod table;
pub mod types;
pub mod utils;
