//! Property-based tests for the pack calculator.

mod heuristic_tests;
mod solver_tests;
