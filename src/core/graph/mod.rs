//! Graph builder stages: filter → extract → nodes / interaction edges / structural edges.

pub mod extract;
pub mod filter;
pub mod labels;
pub mod nodes;
pub mod structure;
pub mod windows;
