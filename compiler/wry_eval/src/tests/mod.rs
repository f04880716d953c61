//! Operator tests, kept apart from the dispatch tables they exercise.

mod operators_tests;
