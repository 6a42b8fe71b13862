//! 二次方程对战规则库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 各类棋子的走法生成
//! - 四条轴线上的方程检测与判别式结算
//! - 两阶段回合控制与胜负判定
//! - 对局配置与对端消息编解码

mod board;
mod config;
mod constants;
mod equation;
mod error;
mod message;
mod moves;
mod piece;
mod session;

pub use board::Board;
pub use config::{GameConfig, TermLayout};
pub use constants::*;
pub use equation::{
    format_equation, unique_removals, Axis, Coefficients, EquationEvent, EquationResolver,
};
pub use error::{GameError, ProtocolError, Result};
pub use message::PeerMessage;
pub use moves::{Move, MoveGenerator, MoveRule};
pub use piece::{Piece, Position, Side, TermKind};
pub use session::{MoveOutcome, Session, TurnPhase};
