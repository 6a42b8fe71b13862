//! 走法生成和验证

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{CONSTANT_MAX_STEPS, LINEAR_MAX_STEPS, QUADRATIC_MAX_STEPS};
use crate::piece::{Piece, Position, Side, TermKind};

/// 上、下、左、右
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 四个正交方向加四个斜向，顺序决定走法枚举顺序
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始位置
    pub from: Position,
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// 指定阵营走这一步前进了几行（后退为负）
    pub fn advance(&self, side: Side) -> i32 {
        (self.to.row as i32 - self.from.row as i32) * side.forward() as i32
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 每种棋子的移动规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRule {
    /// 可移动的方向（仅向前时忽略）
    pub directions: &'static [(i8, i8)],
    /// 每个方向最多走几格
    pub max_steps: u8,
    /// 只能朝本方前进方向走
    pub forward_only: bool,
}

impl MoveRule {
    /// 查表获取棋子类型的移动规则
    pub fn for_kind(kind: TermKind) -> MoveRule {
        match kind {
            TermKind::Quadratic => MoveRule {
                directions: &ALL_DIRECTIONS,
                max_steps: QUADRATIC_MAX_STEPS,
                forward_only: false,
            },
            TermKind::Linear => MoveRule {
                directions: &ORTHOGONAL,
                max_steps: LINEAR_MAX_STEPS,
                forward_only: false,
            },
            TermKind::Constant => MoveRule {
                directions: &[],
                max_steps: CONSTANT_MAX_STEPS,
                forward_only: true,
            },
        }
    }

    /// 指定阵营实际使用的方向
    pub fn directions_for(&self, side: Side) -> Vec<(i8, i8)> {
        if self.forward_only {
            vec![(side.forward(), 0)]
        } else {
            self.directions.to_vec()
        }
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成 `origin` 处棋子的所有落点
    ///
    /// 起点为空或棋子不属于 `side` 时返回空。
    pub fn destinations(board: &Board, origin: Position, side: Side) -> Vec<Position> {
        match board.get(origin) {
            Some(piece) if piece.owner == side => Self::piece_destinations(board, origin, piece),
            _ => Vec::new(),
        }
    }

    /// 生成指定阵营的所有走法（行优先遍历棋子）
    pub fn generate_all(board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);

        for (pos, piece) in board.pieces(side) {
            for to in Self::piece_destinations(board, pos, piece) {
                moves.push(Move::new(pos, to));
            }
        }

        moves
    }

    /// 指定阵营是否还有棋可走
    pub fn has_any_move(board: &Board, side: Side) -> bool {
        board
            .pieces(side)
            .into_iter()
            .any(|(pos, piece)| !Self::piece_destinations(board, pos, piece).is_empty())
    }

    /// 检查走法是否合法
    pub fn is_legal(board: &Board, mv: Move, side: Side) -> bool {
        Self::destinations(board, mv.from, side).contains(&mv.to)
    }

    /// 按规则表对每个方向做射线扫描
    fn piece_destinations(board: &Board, origin: Position, piece: Piece) -> Vec<Position> {
        let rule = MoveRule::for_kind(piece.kind);
        let mut result = Vec::new();

        for dir in rule.directions_for(piece.owner) {
            let mut current = origin;
            for _ in 0..rule.max_steps {
                // 出界或遇到任何棋子都挡住，不能吃子
                match board.step(current, dir) {
                    Some(next) if board.get(next).is_none() => {
                        result.push(next);
                        current = next;
                    }
                    _ => break,
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(u8, u8, Piece)]) -> Board {
        let mut board = Board::empty(9, 8);
        for &(row, col, piece) in pieces {
            board.place(Position::new(row, col), piece);
        }
        board
    }

    #[test]
    fn test_linear_center() {
        let board = board_with(&[(4, 4, Piece::linear(Side::Red, 1))]);
        let moves = MoveGenerator::destinations(&board, Position::new(4, 4), Side::Red);

        // 4 个方向各 2 格
        assert_eq!(moves.len(), 8);
        assert!(moves.contains(&Position::new(2, 4)));
        assert!(moves.contains(&Position::new(4, 6)));
        assert!(!moves.contains(&Position::new(3, 3)));
    }

    #[test]
    fn test_wrong_side_or_empty() {
        let board = board_with(&[(4, 4, Piece::linear(Side::Red, 1))]);
        assert!(MoveGenerator::destinations(&board, Position::new(4, 4), Side::Blue).is_empty());
        assert!(MoveGenerator::destinations(&board, Position::new(0, 0), Side::Red).is_empty());
        assert!(MoveGenerator::destinations(&board, Position::new(30, 0), Side::Red).is_empty());
    }

    #[test]
    fn test_quadratic_center() {
        let board = board_with(&[(4, 4, Piece::quadratic(Side::Blue, 2))]);
        let moves = MoveGenerator::destinations(&board, Position::new(4, 4), Side::Blue);

        // 8 个方向各 3 格
        assert_eq!(moves.len(), 24);
        assert!(moves.contains(&Position::new(1, 1)));
        assert!(moves.contains(&Position::new(7, 7)));
    }

    #[test]
    fn test_quadratic_corner() {
        let board = board_with(&[(0, 0, Piece::quadratic(Side::Red, 1))]);
        let moves = MoveGenerator::destinations(&board, Position::new(0, 0), Side::Red);

        // 只能向下、向右、右下
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn test_blocked_by_any_piece() {
        let board = board_with(&[
            (4, 4, Piece::linear(Side::Red, 1)),
            // 己方挡住上方
            (3, 4, Piece::constant(Side::Red, 2)),
            // 敌方挡在右边第二格
            (4, 6, Piece::constant(Side::Blue, 2)),
        ]);
        let moves = MoveGenerator::destinations(&board, Position::new(4, 4), Side::Red);

        // 上 0 + 下 2 + 左 2 + 右 1
        assert_eq!(moves.len(), 5);
        assert!(!moves.contains(&Position::new(3, 4)));
        assert!(!moves.contains(&Position::new(2, 4)));
        assert!(moves.contains(&Position::new(4, 5)));
        assert!(!moves.contains(&Position::new(4, 6)));
    }

    #[test]
    fn test_constant_forward_only() {
        let board = board_with(&[
            (4, 4, Piece::constant(Side::Red, 1)),
            (4, 2, Piece::constant(Side::Blue, 1)),
        ]);

        let red = MoveGenerator::destinations(&board, Position::new(4, 4), Side::Red);
        assert_eq!(red, vec![Position::new(5, 4)]);

        let blue = MoveGenerator::destinations(&board, Position::new(4, 2), Side::Blue);
        assert_eq!(blue, vec![Position::new(3, 2)]);
    }

    #[test]
    fn test_constant_blocked_at_edge() {
        let board = board_with(&[
            (8, 0, Piece::constant(Side::Red, 1)),
            (0, 0, Piece::constant(Side::Blue, 1)),
        ]);
        assert!(MoveGenerator::destinations(&board, Position::new(8, 0), Side::Red).is_empty());
        assert!(MoveGenerator::destinations(&board, Position::new(0, 0), Side::Blue).is_empty());
    }

    #[test]
    fn test_destinations_always_in_bounds() {
        let kinds = [TermKind::Quadratic, TermKind::Linear, TermKind::Constant];
        for side in [Side::Red, Side::Blue] {
            for kind in kinds {
                for row in 0..9 {
                    for col in 0..8 {
                        let mut board = Board::empty(9, 8);
                        let origin = Position::new(row, col);
                        board.place(origin, Piece::new(side, kind, 1));
                        for to in MoveGenerator::destinations(&board, origin, side) {
                            assert!(board.contains(to), "{:?} {:?} -> {}", side, kind, to);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_initial_move_count() {
        let board = Board::initial();

        // 开局只有常数项能前进 1 格，一次项和二次项都被挡住
        let blue = MoveGenerator::generate_all(&board, Side::Blue);
        assert_eq!(blue.len(), 8);
        assert!(blue.iter().all(|mv| mv.from.row == 6 && mv.to.row == 5));

        let red = MoveGenerator::generate_all(&board, Side::Red);
        assert_eq!(red.len(), 8);
        assert!(MoveGenerator::has_any_move(&board, Side::Red));
    }

    #[test]
    fn test_enumeration_order() {
        let board = board_with(&[
            (5, 5, Piece::constant(Side::Red, 1)),
            (2, 2, Piece::linear(Side::Red, 1)),
        ]);
        let moves = MoveGenerator::generate_all(&board, Side::Red);

        // 先行优先遍历棋子，再按 上、下、左、右 顺序
        assert_eq!(moves[0], Move::new(Position::new(2, 2), Position::new(1, 2)));
        assert_eq!(moves[1], Move::new(Position::new(2, 2), Position::new(0, 2)));
        assert_eq!(moves[2], Move::new(Position::new(2, 2), Position::new(3, 2)));
        assert_eq!(
            moves.last().copied(),
            Some(Move::new(Position::new(5, 5), Position::new(6, 5)))
        );
    }

    #[test]
    fn test_is_legal_and_advance() {
        let board = board_with(&[(4, 4, Piece::quadratic(Side::Blue, 1))]);
        let mv = Move::new(Position::new(4, 4), Position::new(1, 1));
        assert!(MoveGenerator::is_legal(&board, mv, Side::Blue));
        assert!(!MoveGenerator::is_legal(&board, mv, Side::Red));
        assert!(!MoveGenerator::is_legal(
            &board,
            Move::new(Position::new(4, 4), Position::new(0, 0)),
            Side::Blue
        ));

        assert_eq!(mv.advance(Side::Blue), 3);
        assert_eq!(mv.advance(Side::Red), -3);
    }
}
