//! 二次方程对战 AI
//!
//! 包含:
//! - 走法评估（前进奖励、消灭奖励、反噬惩罚）
//! - 一层贪心选步

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine};
