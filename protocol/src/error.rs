//! 错误类型定义

use thiserror::Error;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 坐标越界
    #[error("Invalid position: ({row}, {col})")]
    InvalidPosition { row: u8, col: u8 },

    /// 目标格不是合法落点
    #[error("Invalid move: from ({from_row}, {from_col}) to ({to_row}, {to_col})")]
    InvalidMove {
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    },

    /// 没有棋子
    #[error("No piece at position ({row}, {col})")]
    NoPiece { row: u8, col: u8 },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 上一步的方程结算尚未完成
    #[error("Previous turn is still pending equation resolution")]
    TurnPending,

    /// 没有选中棋子
    #[error("No piece selected")]
    NothingSelected,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 协议错误类型
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 无效的对局配置
    #[error("Invalid game config: {reason}")]
    InvalidConfig { reason: String },

    /// 规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

/// 协议操作结果类型
pub type Result<T> = std::result::Result<T, ProtocolError>;
