pub mod algorithm;
pub mod hyperparameters;
pub mod mcts_result;
pub mod node;
pub mod selection;
pub mod tree;
pub mod tree_export;

pub use algorithm::MctsEngine;
pub use hyperparameters::{EngineConfig, FinalMovePolicy};
pub use mcts_result::{ChildSummary, SearchReport, SearchStats};
pub use node::{NodeId, SearchNode};
pub use tree::SearchTree;
