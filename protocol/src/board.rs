//! 棋盘状态

use serde::Serialize;

use crate::config::GameConfig;
use crate::error::Result;
use crate::piece::{Piece, Position, Side, TermKind};

/// 棋盘
///
/// 只负责记录格子里有什么，不做任何规则校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// 索引为 row * cols + col
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            squares: vec![None; rows as usize * cols as usize],
        }
    }

    /// 按配置摆放初始棋子
    ///
    /// 红方占第 0/1/2 行（二次/一次/常数项），系数逆序；
    /// 蓝方占最后三行，顺序相反，系数按配置顺序。配置不合法时返回错误。
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::layout(config))
    }

    /// 摆放已校验过的配置
    fn layout(config: &GameConfig) -> Self {
        let mut board = Self::empty(config.rows, config.cols);
        let last = config.rows - 1;
        let layout = &config.layout;

        let rows = [
            (TermKind::Quadratic, &layout.quadratic, 0, last),
            (TermKind::Linear, &layout.linear, 1, last - 1),
            (TermKind::Constant, &layout.constant, 2, last - 2),
        ];

        for (kind, values, red_row, blue_row) in rows {
            for (col, &value) in values.iter().rev().enumerate() {
                board.place(
                    Position::new(red_row, col as u8),
                    Piece::new(Side::Red, kind, value),
                );
            }
            for (col, &value) in values.iter().enumerate() {
                board.place(
                    Position::new(blue_row, col as u8),
                    Piece::new(Side::Blue, kind, value),
                );
            }
        }

        board
    }

    /// 创建默认初始棋盘（9x8）
    pub fn initial() -> Self {
        Self::layout(&GameConfig::default())
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// 检查位置是否在棋盘内
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// 沿方向走一步，出界返回 None
    pub fn step(&self, pos: Position, (dr, dc): (i8, i8)) -> Option<Position> {
        pos.offset(dr, dc).filter(|next| self.contains(*next))
    }

    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// 获取指定位置的棋子，越界视为空
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if self.contains(pos) {
            self.squares[self.index(pos)]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子，越界忽略
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if self.contains(pos) {
            let index = self.index(pos);
            self.squares[index] = piece;
        }
    }

    /// 放置棋子
    pub fn place(&mut self, pos: Position, piece: Piece) {
        self.set(pos, Some(piece));
    }

    /// 移除棋子，返回被移除的棋子
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.get(pos);
        self.set(pos, None);
        piece
    }

    /// 移动棋子（不检查规则），返回目标格原有的棋子
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.get(from);
        let displaced = self.get(to);
        self.set(from, None);
        self.set(to, piece);
        displaced
    }

    /// 获取指定阵营的所有棋子位置（按行优先顺序）
    pub fn pieces(&self, side: Side) -> Vec<(Position, Piece)> {
        self.all_pieces()
            .into_iter()
            .filter(|(_, piece)| piece.owner == side)
            .collect()
    }

    /// 获取所有棋子
    pub fn all_pieces(&self) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                if let Some(piece) = self.get(pos) {
                    result.push((pos, piece));
                }
            }
        }
        result
    }

    /// 统计指定阵营剩余棋子数
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|piece| piece.owner == side)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}
