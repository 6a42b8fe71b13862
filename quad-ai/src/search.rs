//! 贪心选步
//!
//! 只看一层：枚举所有走法，在棋盘副本上模拟落子与方程结算，取得分最高者。

use protocol::{
    Board, Move, MoveGenerator, Session, Side, ADVANCE_WEIGHT, BACKFIRE_PENALTY, CAPTURE_REWARD,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 每前进一行的加分
    pub advance_weight: i32,
    /// 每消灭一枚敌子的加分
    pub capture_reward: i32,
    /// 每反噬一枚己方棋子的扣分
    pub backfire_penalty: i32,
    /// 随机数种子，None 时使用系统熵
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            advance_weight: ADVANCE_WEIGHT,
            capture_reward: CAPTURE_REWARD,
            backfire_penalty: BACKFIRE_PENALTY,
            seed: None,
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    moves_evaluated: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            config,
            rng,
            moves_evaluated: 0,
        }
    }

    /// 使用固定种子创建
    pub fn with_seed(seed: u64) -> Self {
        Self::new(AiConfig {
            seed: Some(seed),
            ..AiConfig::default()
        })
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 `side` 选择一步棋，无棋可走时返回 None
    ///
    /// 先随机选一个兜底走法，再按枚举顺序逐个打分，只有严格更高分才替换，
    /// 同分时先枚举到的走法胜出。棋盘只读，模拟都在副本上进行。
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.moves_evaluated = 0;

        let moves = MoveGenerator::generate_all(board, side);
        let mut best_move = *moves.choose(&mut self.rng)?;
        let mut best_score: Option<i32> = None;

        for mv in &moves {
            let score = Evaluator::evaluate(&self.config, board, *mv, side);
            self.moves_evaluated += 1;

            if best_score.map_or(true, |best| score > best) {
                best_score = Some(score);
                best_move = *mv;
            }
        }

        debug!(
            "AI ({}) chose {} with score {:?} out of {} candidates",
            side,
            best_move,
            best_score,
            moves.len()
        );
        Some(best_move)
    }

    /// 为对局当前走子方选步；对局结束或有待结算回合时返回 None
    pub fn choose_for(&mut self, session: &Session) -> Option<Move> {
        if session.is_game_over() || session.is_pending() {
            return None;
        }
        self.choose_move(session.board(), session.current_side())
    }

    /// 上一次选步评估过的走法数
    pub fn moves_evaluated(&self) -> u64 {
        self.moves_evaluated
    }
}

impl Default for AiEngine {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
