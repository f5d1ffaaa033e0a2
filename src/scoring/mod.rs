pub mod scoring;

pub use scoring::{result, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
