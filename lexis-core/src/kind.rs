//! The bound every token kind type must satisfy to flow through the scanner.

use std::fmt::Debug;
use std::hash::Hash;

/// A token kind usable by the scanner: cheap to copy, comparable, hashable, and debuggable.
///
/// Kind types never carry their own display names; a [`crate::RuleSet`] owns a side table
/// mapping each kind to a human-readable name, so the same scanner machinery can serve both a
/// caller-provided enum (the typed DSL) and runtime-interned ids (the dynamic DSL).
pub trait Kind: Copy + Eq + Hash + Debug {}

impl<T> Kind for T where T: Copy + Eq + Hash + Debug {}

/// Implemented by caller-provided enums used with [`crate::dsl::typed`].
///
/// Unlike [`Kind`], this is not blanket-implemented: only types the caller opts in for use with
/// the typed builder implement it.
pub trait TypedTokenKind: Kind {
    /// The kind emitted for the end-of-file sentinel token.
    const EOF: Self;

    /// Resolves a declarative rule name (as passed to `LexerBuilder::token`) to a kind value.
    fn parse(name: &str) -> Option<Self>;

    /// All names `parse` recognizes, used to build "did you mean" style error messages.
    fn all_names() -> &'static [&'static str];

    /// The declarative name this kind was registered under, if it corresponds to one of
    /// [`TypedTokenKind::all_names`]. Used to populate a [`crate::RuleSet`]'s name table.
    fn name(&self) -> &'static str;
}
