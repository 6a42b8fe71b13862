//! 棋子定义

use serde::{Deserialize, Serialize};

/// 棋子代表的多项式项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermKind {
    /// 二次项 ax²
    Quadratic,
    /// 一次项 bx
    Linear,
    /// 常数项 c
    Constant,
}

impl TermKind {
    /// 标签中系数后面的后缀
    pub fn suffix(&self) -> &'static str {
        match self {
            TermKind::Quadratic => "x²",
            TermKind::Linear => "x",
            TermKind::Constant => "",
        }
    }
}

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// 红方（在上方，向行号增大的方向前进）
    Red,
    /// 蓝方（在下方，向行号减小的方向前进）
    Blue,
}

impl Side {
    /// 获取对方阵营
    pub fn opponent(&self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// 前进方向的行增量
    pub fn forward(&self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    /// 阵营名称
    pub fn name(&self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 棋子
///
/// 创建后 `kind` 与 `coefficient` 不再改变，只会被移动或移除。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub kind: TermKind,
    pub coefficient: i32,
}

impl Piece {
    /// 创建新棋子
    pub fn new(owner: Side, kind: TermKind, coefficient: i32) -> Self {
        Self {
            owner,
            kind,
            coefficient,
        }
    }

    pub fn quadratic(owner: Side, coefficient: i32) -> Self {
        Self::new(owner, TermKind::Quadratic, coefficient)
    }

    pub fn linear(owner: Side, coefficient: i32) -> Self {
        Self::new(owner, TermKind::Linear, coefficient)
    }

    pub fn constant(owner: Side, coefficient: i32) -> Self {
        Self::new(owner, TermKind::Constant, coefficient)
    }

    /// 棋子上显示的文字，如 `-3x²`、`x`、`4`
    pub fn display_label(&self) -> String {
        let suffix = self.kind.suffix();
        if self.kind == TermKind::Constant {
            return self.coefficient.to_string();
        }
        match self.coefficient {
            1 => suffix.to_string(),
            -1 => format!("-{}", suffix),
            value => format!("{}{}", value, suffix),
        }
    }
}

/// 棋盘位置
///
/// 本身不携带棋盘尺寸，越界检查由 [`crate::Board`] 负责。
/// 序列化为 `{"r": row, "c": col}`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 行（从 0 开始）
    #[serde(rename = "r")]
    pub row: u8,
    /// 列（从 0 开始）
    #[serde(rename = "c")]
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 获取偏移后的位置，坐标为负或溢出时返回 None
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(Piece::quadratic(Side::Red, 1).display_label(), "x²");
        assert_eq!(Piece::quadratic(Side::Red, -1).display_label(), "-x²");
        assert_eq!(Piece::quadratic(Side::Blue, -3).display_label(), "-3x²");
        assert_eq!(Piece::linear(Side::Blue, 2).display_label(), "2x");
        assert_eq!(Piece::linear(Side::Blue, 0).display_label(), "0x");
        assert_eq!(Piece::constant(Side::Red, -4).display_label(), "-4");
        assert_eq!(Piece::constant(Side::Red, 1).display_label(), "1");
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(0, 3);
        assert_eq!(pos.offset(1, -1), Some(Position::new(1, 2)));
        assert_eq!(pos.offset(-1, 0), None);
        assert_eq!(Position::new(2, 0).offset(0, -1), None);
        assert_eq!(Position::new(255, 0).offset(1, 0), None);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Blue);
        assert_eq!(Side::Blue.opponent(), Side::Red);
        assert_eq!(Side::Red.forward(), 1);
        assert_eq!(Side::Blue.forward(), -1);
    }
}
