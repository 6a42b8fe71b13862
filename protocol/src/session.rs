//! 对局控制
//!
//! 两阶段回合：`apply_move` 落子后若触发方程，回合进入待结算状态，
//! 由调用方在动画结束后调用 `complete_turn` 批量移除棋子并交换走子方。

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::equation::{EquationEvent, EquationResolver};
use crate::error::{GameError, Result};
use crate::moves::{Move, MoveGenerator};
use crate::piece::{Position, Side};

/// 回合阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// 等待走子
    AwaitingMove,
    /// 已落子，方程结果等待调用方确认
    EquationPending,
}

/// 落子结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub events: Vec<EquationEvent>,
    /// 为 true 时调用方必须随后调用 `complete_turn`
    pub pending: bool,
}

/// 一局游戏
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    board: Board,
    current_side: Side,
    phase: TurnPhase,
    selection: Option<Position>,
    last_move: Option<Move>,
    game_over: bool,
    winner: Option<Side>,
}

impl Session {
    /// 按配置创建新对局
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::from_config(&config)?;
        Ok(Self::from_board(board, config.starting_side))
    }

    /// 从任意棋盘创建对局（残局、测试）
    pub fn from_board(board: Board, current_side: Side) -> Self {
        Self {
            board,
            current_side,
            phase: TurnPhase::AwaitingMove,
            selection: None,
            last_move: None,
            game_over: false,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == TurnPhase::EquationPending
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// 当前走子方在 `pos` 处棋子的合法落点
    pub fn legal_destinations(&self, pos: Position) -> Vec<Position> {
        MoveGenerator::destinations(&self.board, pos, self.current_side)
    }

    /// 当前走子方是否还有棋可走
    pub fn has_legal_moves(&self) -> bool {
        MoveGenerator::has_any_move(&self.board, self.current_side)
    }

    /// 选中棋子
    ///
    /// 只能选中当前走子方的棋子；其他情况清除选择并返回 false。
    pub fn select(&mut self, pos: Position) -> bool {
        let selectable = !self.game_over
            && !self.is_pending()
            && self
                .board
                .get(pos)
                .is_some_and(|piece| piece.owner == self.current_side);

        self.selection = selectable.then_some(pos);
        selectable
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// 选中棋子的合法落点
    pub fn selected_destinations(&self) -> Vec<Position> {
        self.selection
            .map(|pos| self.legal_destinations(pos))
            .unwrap_or_default()
    }

    /// 把选中的棋子走到 `to`
    pub fn move_selected(&mut self, to: Position) -> std::result::Result<MoveOutcome, GameError> {
        let from = self.selection.ok_or(GameError::NothingSelected)?;
        self.apply_move(Move::new(from, to))
    }

    /// 校验走法，不修改状态
    pub fn validate_move(&self, mv: Move) -> std::result::Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameOver);
        }
        if self.is_pending() {
            return Err(GameError::TurnPending);
        }
        if !self.board.contains(mv.from) {
            return Err(GameError::InvalidPosition {
                row: mv.from.row,
                col: mv.from.col,
            });
        }
        if !self.board.contains(mv.to) {
            return Err(GameError::InvalidPosition {
                row: mv.to.row,
                col: mv.to.col,
            });
        }

        let piece = self.board.get(mv.from).ok_or(GameError::NoPiece {
            row: mv.from.row,
            col: mv.from.col,
        })?;
        if piece.owner != self.current_side {
            return Err(GameError::NotYourTurn);
        }

        if !self.legal_destinations(mv.from).contains(&mv.to) {
            return Err(GameError::InvalidMove {
                from_row: mv.from.row,
                from_col: mv.from.col,
                to_row: mv.to.row,
                to_col: mv.to.col,
            });
        }

        Ok(())
    }

    /// 执行走法并检测方程
    ///
    /// 非法走法返回错误且不修改任何状态。没有方程时立即交换走子方；
    /// 有方程时棋盘仍保留移除前的状态，等待 `complete_turn`。
    pub fn apply_move(&mut self, mv: Move) -> std::result::Result<MoveOutcome, GameError> {
        self.validate_move(mv)?;

        self.board.move_piece(mv.from, mv.to);
        self.last_move = Some(mv);
        self.selection = None;

        let events = EquationResolver::resolve(&self.board, mv.to, self.current_side);
        debug!(
            "{} moved {}, {} equation(s) formed",
            self.current_side,
            mv,
            events.len()
        );

        if events.is_empty() {
            self.switch_turn();
            Ok(MoveOutcome {
                events,
                pending: false,
            })
        } else {
            self.phase = TurnPhase::EquationPending;
            Ok(MoveOutcome {
                events,
                pending: true,
            })
        }
    }

    /// 结算待定的方程并交换走子方
    ///
    /// 没有待结算回合时什么也不做并返回 false，重复调用是安全的。
    /// 只有格子里仍是同一枚棋子时才移除。
    pub fn complete_turn(&mut self, events: &[EquationEvent]) -> bool {
        if !self.is_pending() {
            warn!("complete_turn called with no pending turn, ignored");
            return false;
        }

        let mut removed = 0;
        for event in events {
            for &(pos, piece) in &event.removed {
                if self.board.get(pos) == Some(piece) {
                    self.board.remove(pos);
                    removed += 1;
                }
            }
        }
        debug!("{} piece(s) removed by equations", removed);

        self.phase = TurnPhase::AwaitingMove;
        self.switch_turn();
        true
    }

    /// 切换走子方并检查胜负
    fn switch_turn(&mut self) {
        self.current_side = self.current_side.opponent();
        self.check_win_condition();
    }

    /// 一方没有棋子时另一方获胜
    fn check_win_condition(&mut self) {
        let red = self.board.count(Side::Red);
        let blue = self.board.count(Side::Blue);

        let winner = if red == 0 {
            Some(Side::Blue)
        } else if blue == 0 {
            Some(Side::Red)
        } else {
            None
        };

        if let Some(side) = winner {
            self.game_over = true;
            self.winner = Some(side);
            info!("Game over, {} wins ({} red / {} blue left)", side, red, blue);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_board(Board::initial(), GameConfig::default().starting_side)
    }
}
