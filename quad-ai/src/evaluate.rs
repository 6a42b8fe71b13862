//! 走法评估函数

use protocol::{unique_removals, Board, EquationEvent, EquationResolver, Move, Side};

use crate::search::AiConfig;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 在棋盘副本上模拟走法，返回会触发的方程（不执行移除）
    pub fn simulate(board: &Board, mv: Move, side: Side) -> Vec<EquationEvent> {
        let mut test_board = board.clone();
        test_board.move_piece(mv.from, mv.to);
        EquationResolver::resolve(&test_board, mv.to, side)
    }

    /// 给一步棋打分（`side` 视角，越大越好）
    ///
    /// 前进一行加 `advance_weight`；每消灭一枚敌子加 `capture_reward`，
    /// 每反噬一枚己方棋子减 `backfire_penalty`。同一格在多个方程里只算一次。
    pub fn score_move(config: &AiConfig, mv: Move, side: Side, events: &[EquationEvent]) -> i32 {
        let mut score = config.advance_weight * mv.advance(side);

        for (_, piece) in unique_removals(events) {
            if piece.owner == side {
                score -= config.backfire_penalty;
            } else {
                score += config.capture_reward;
            }
        }

        score
    }

    /// 模拟并打分
    pub fn evaluate(config: &AiConfig, board: &Board, mv: Move, side: Side) -> i32 {
        let events = Self::simulate(board, mv, side);
        Self::score_move(config, mv, side, &events)
    }
}
