pub mod cards;
pub mod contestant;
pub mod dealer;
pub mod detectors;
pub mod error;
pub mod multiset;
pub mod resolver;
pub mod selector;
