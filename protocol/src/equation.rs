//! 方程检测与结算
//!
//! 棋子落下后，沿经过落点的四条轴线取连续棋子链，
//! 把链上的系数按项求和组成 `ax² + bx + c = 0`：
//! - 链上必须同时有双方棋子，且 `a ≠ 0`
//! - 判别式 `b² - 4ac ≥ 0`（有实根）时移除链上对方棋子
//! - 否则反噬，移除链上走子方自己的棋子
//!
//! 四条轴都基于同一个未移除的棋盘计算，移除由调用方批量执行。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::Board;
use crate::piece::{Piece, Position, Side, TermKind};

/// 经过落点的轴线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// 横向
    Horizontal,
    /// 纵向
    Vertical,
    /// 左上到右下
    Diagonal,
    /// 右上到左下
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// 轴线的两个方向：(正向, 反向)
    pub fn directions(&self) -> ((i8, i8), (i8, i8)) {
        match self {
            Axis::Horizontal => ((0, 1), (0, -1)),
            Axis::Vertical => ((1, 0), (-1, 0)),
            Axis::Diagonal => ((1, 1), (-1, -1)),
            Axis::AntiDiagonal => ((1, -1), (-1, 1)),
        }
    }
}

/// 按项汇总后的系数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Coefficients {
    /// 对一条链求和
    pub fn sum<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Self {
        let mut sum = Self::default();
        for piece in pieces {
            let value = piece.coefficient as i64;
            match piece.kind {
                TermKind::Quadratic => sum.a += value,
                TermKind::Linear => sum.b += value,
                TermKind::Constant => sum.c += value,
            }
        }
        sum
    }

    /// 判别式 b² - 4ac
    ///
    /// 系数之和不超过 i64，平方项可能超出，按 i128 计算。
    pub fn discriminant(&self) -> i128 {
        let (a, b, c) = (self.a as i128, self.b as i128, self.c as i128);
        b * b - 4 * a * c
    }
}

/// 一次方程结算结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationEvent {
    pub axis: Axis,
    pub coefficients: Coefficients,
    /// 如 `x² + 0x - 4 = 0`
    pub equation: String,
    pub discriminant: i128,
    pub real_roots: bool,
    /// 被移除棋子的阵营
    pub victim: Side,
    /// 参与求和的棋子，按轴线空间顺序
    pub chain: Vec<(Position, Piece)>,
    /// 需要移除的棋子
    pub removed: Vec<(Position, Piece)>,
}

impl EquationEvent {
    /// 是否为反噬（移除走子方自己的棋子）
    pub fn is_backfire(&self) -> bool {
        !self.real_roots
    }
}

/// 多个事件的移除集合去重（同一格只算一次）
///
/// 同一步在多条轴上都反噬时，落点棋子会出现在每个事件里。
pub fn unique_removals(events: &[EquationEvent]) -> Vec<(Position, Piece)> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|event| event.removed.iter().copied())
        .filter(|(pos, _)| seen.insert(*pos))
        .collect()
}

/// 方程结算器
pub struct EquationResolver;

impl EquationResolver {
    /// 对落点 `at` 检查四条轴，`mover` 为本回合走子方
    pub fn resolve(board: &Board, at: Position, mover: Side) -> Vec<EquationEvent> {
        if board.get(at).is_none() {
            return Vec::new();
        }

        let events: Vec<EquationEvent> = Axis::ALL
            .iter()
            .filter_map(|&axis| {
                let chain = Self::chain(board, at, axis);
                Self::evaluate_chain(axis, chain, mover)
            })
            .collect();

        for event in &events {
            debug!(
                "Equation on {:?}: {} (discriminant={}, victim={}, removed={})",
                event.axis,
                event.equation,
                event.discriminant,
                event.victim,
                event.removed.len()
            );
        }

        events
    }

    /// 沿轴线取经过 `at` 的连续棋子链，遇到空格或边界即停
    pub fn chain(board: &Board, at: Position, axis: Axis) -> Vec<(Position, Piece)> {
        let (forward, backward) = axis.directions();

        let mut chain = Self::ray(board, at, backward);
        chain.reverse();
        if let Some(piece) = board.get(at) {
            chain.push((at, piece));
        }
        chain.extend(Self::ray(board, at, forward));

        chain
    }

    /// 从 `start` 出发（不含）向一个方向收集连续棋子
    fn ray(board: &Board, start: Position, dir: (i8, i8)) -> Vec<(Position, Piece)> {
        let mut result = Vec::new();
        let mut current = start;
        while let Some(next) = board.step(current, dir) {
            match board.get(next) {
                Some(piece) => result.push((next, piece)),
                None => break,
            }
            current = next;
        }
        result
    }

    fn evaluate_chain(
        axis: Axis,
        chain: Vec<(Position, Piece)>,
        mover: Side,
    ) -> Option<EquationEvent> {
        // 必须同时有双方棋子
        let has_red = chain.iter().any(|(_, p)| p.owner == Side::Red);
        let has_blue = chain.iter().any(|(_, p)| p.owner == Side::Blue);
        if !has_red || !has_blue {
            return None;
        }

        let coefficients = Coefficients::sum(chain.iter().map(|(_, p)| p));
        if coefficients.a == 0 {
            trace!("Chain on {:?} has no quadratic term, skipped", axis);
            return None;
        }

        let discriminant = coefficients.discriminant();
        let real_roots = discriminant >= 0;
        let victim = if real_roots { mover.opponent() } else { mover };

        let removed: Vec<_> = chain
            .iter()
            .filter(|(_, p)| p.owner == victim)
            .copied()
            .collect();
        if removed.is_empty() {
            return None;
        }

        Some(EquationEvent {
            axis,
            coefficients,
            equation: format_equation(coefficients.a, coefficients.b, coefficients.c),
            discriminant,
            real_roots,
            victim,
            chain,
            removed,
        })
    }
}

/// 格式化为 `ax² + bx + c = 0`
///
/// 系数 ±1 省略数字，零项保留为 `+ 0x` / `+ 0`。
pub fn format_equation(a: i64, b: i64, c: i64) -> String {
    let mut text = match a {
        1 => "x²".to_string(),
        -1 => "-x²".to_string(),
        _ => format!("{}x²", a),
    };

    match b {
        0 => text.push_str(" + 0x"),
        1 => text.push_str(" + x"),
        -1 => text.push_str(" - x"),
        b if b > 0 => text.push_str(&format!(" + {}x", b)),
        b => text.push_str(&format!(" - {}x", b.abs())),
    }

    match c {
        0 => text.push_str(" + 0"),
        c if c > 0 => text.push_str(&format!(" + {}", c)),
        c => text.push_str(&format!(" - {}", c.abs())),
    }

    text.push_str(" = 0");
    text
}
