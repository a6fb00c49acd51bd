//! Cross-crate tests for the splitter and the planner.

#[cfg(test)]
mod util;

mod exclusion;
mod planning;
