#![no_std]
#![forbid(unsafe_code)]

//! Rewriting of binary-tree terms with wildcard patterns.
//!
//! A term (also called *molecule*) is either an atom or a pair of terms.
//! Atoms whose name starts with `@` are *wildcards*:
//! inside a pattern, a wildcard matches any subterm and captures it.
//! A rewrite rule (also called *vau*) is a pair of a pattern and a replacement.
//!
//! # Usage
//!
//! The following example swaps the two components of a pair.
//! (By the way, this example, just as all other code examples in this library,
//! can be executed by running `cargo test`.)
//!
//! ~~~
//! # use vau::Error;
//! use vau::rc::{Rule, Term};
//!
//! let term = Term::pair(Term::atom("a"), Term::atom("b"));
//! let rule = Rule::new(
//!     Term::pair(Term::atom("@x"), Term::atom("@y")),
//!     Term::pair(Term::atom("@y"), Term::atom("@x")),
//! );
//! assert!(rule.is_valid());
//!
//! let rewrite = term.apply_once(&rule)?;
//! assert_eq!(rewrite.term, Term::pair(Term::atom("b"), Term::atom("a")));
//! assert_eq!(rewrite.bindings.len(), 2);
//! # Ok::<_, Error>(())
//! ~~~
//!
//! To rewrite somewhere inside a term,
//! [`apply_anywhere`](rc::Term::apply_anywhere) searches
//! the term breadth-first for the first subterm matching the rule's pattern.
//! To rewrite until no rule applies any more, use a [`Program`](rc::Program).
//!
//! # Organisation
//!
//! The crate root contains data structures that
//! do not depend on how terms are shared, namely
//! [addresses](Address), [rules](Rule), [bindings](Binding),
//! the [`Tree`] trait to inspect terms, and
//! [`Molecule`], an unshared term that can be sent between threads.
//!
//! The [`rc`] and [`arc`] modules contain terms with shared subterms and
//! expose completely the same API,
//! the difference being that the structures in [`rc`]
//! cannot be used in multi-threaded scenarios.
//! Due to the performance overhead incurred by the data structures in [`arc`],
//! it is advisable to use these only in multi-threaded scenarios,
//! and to prefer [`rc`] whenever possible.

extern crate alloc;
#[macro_use]
extern crate log;

/// Multi-threading kernel.
#[cfg(not(doctest))]
#[path = "."]
pub mod arc {
    use alloc::sync::Arc as Rc;
    #[path = "kernel/mod.rs"]
    mod kernel;
    pub use kernel::*;
}
/// Single-threading kernel.
#[path = "."]
pub mod rc {
    use alloc::rc::Rc;
    #[path = "kernel/mod.rs"]
    mod kernel;
    pub use kernel::*;
}

pub mod address;
mod binding;
pub mod error;
mod molecule;
mod rule;
pub mod tree;

pub use address::{Address, Dir};
pub use binding::Binding;
pub use error::Error;
pub use molecule::Molecule;
pub use rule::Rule;
pub use tree::{is_wildcard, Tree, View};
