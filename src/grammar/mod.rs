//! The concrete grammar: every concrete resolver spec.md §4.4 names,
//! grouped by what they build. `lists`, `paths`, `strings` and `types` hold
//! the smaller, self-contained resolvers; `expressions`, `statements` and
//! `members` hold the three mutually-recursive families that make up the
//! bulk of the grammar (an expression can contain a lambda, whose body is
//! a statement list, whose statements contain expressions; a class member
//! can be a nested class, whose body is itself class members).

pub mod accessors;
pub mod expressions;
pub mod lists;
pub mod members;
pub mod paths;
pub mod statements;
pub mod strings;
pub mod types;

#[cfg(test)]
mod expressions_tests;
#[cfg(test)]
mod strings_tests;
