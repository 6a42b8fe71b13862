//! 无界面的机机对战
//!
//! 按两阶段回合约定驱动对局：落子、记录方程、立即结算、交换走子方。

use protocol::{GameConfig, Session, Side};
use quad_ai::{AiConfig, AiEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 对战配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameConfig,
    pub red: AiConfig,
    pub blue: AiConfig,
    /// 对局数
    pub games: u32,
    /// 每局最多走多少步
    pub max_turns: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            red: AiConfig::default(),
            blue: AiConfig::default(),
            games: 1,
            max_turns: 400,
        }
    }
}

/// 对局结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// 一方棋子全部被消灭
    Eliminated,
    /// 该方无棋可走
    NoMoves(Side),
    /// 达到步数上限
    TurnLimit,
}

/// 单局统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub end: EndReason,
    pub turns: u32,
    pub equations: u32,
    pub backfires: u32,
    pub red_left: usize,
    pub blue_left: usize,
}

/// 某一局使用的 AI 配置（有种子时按局号偏移，保证每局不同）
pub fn engine_for_game(config: &AiConfig, game: u32) -> AiEngine {
    let mut config = config.clone();
    config.seed = config.seed.map(|seed| seed.wrapping_add(game as u64));
    AiEngine::new(config)
}

/// 下完一局
pub fn play_game(
    config: &GameConfig,
    red: &mut AiEngine,
    blue: &mut AiEngine,
    max_turns: u32,
) -> protocol::Result<GameSummary> {
    let mut session = Session::new(config.clone())?;
    let mut turns = 0;
    let mut equations = 0;
    let mut backfires = 0;
    let mut end = EndReason::TurnLimit;

    while turns < max_turns {
        if session.is_game_over() {
            end = EndReason::Eliminated;
            break;
        }

        let side = session.current_side();
        let engine = match side {
            Side::Red => &mut *red,
            Side::Blue => &mut *blue,
        };
        let Some(mv) = engine.choose_for(&session) else {
            info!("{} has no legal moves", side);
            end = EndReason::NoMoves(side);
            break;
        };

        let outcome = session.apply_move(mv)?;
        debug!("Turn {}: {} plays {}", turns + 1, side, mv);

        for event in &outcome.events {
            equations += 1;
            if event.is_backfire() {
                backfires += 1;
            }
            info!(
                "{}  Δ = {} ({}) -> {} loses {} piece(s)",
                event.equation,
                event.discriminant,
                if event.real_roots { "real" } else { "complex" },
                event.victim,
                event.removed.len()
            );
        }

        if outcome.pending {
            session.complete_turn(&outcome.events);
        }
        turns += 1;
    }

    if session.is_game_over() {
        end = EndReason::Eliminated;
    }

    Ok(GameSummary {
        winner: session.winner(),
        end,
        turns,
        equations,
        backfires,
        red_left: session.board().count(Side::Red),
        blue_left: session.board().count(Side::Blue),
    })
}

/// 按配置下完所有对局
pub fn run(config: &ArenaConfig) -> protocol::Result<Vec<GameSummary>> {
    (0..config.games)
        .map(|game| -> protocol::Result<GameSummary> {
            let mut red = engine_for_game(&config.red, game);
            let mut blue = engine_for_game(&config.blue, game);
            let summary = play_game(&config.game, &mut red, &mut blue, config.max_turns)?;
            info!(
                "Game {} finished: {:?}, winner {:?} after {} turns",
                game + 1,
                summary.end,
                summary.winner,
                summary.turns
            );
            Ok(summary)
        })
        .collect()
}
