//! 规则常量定义

/// 默认棋盘行数
pub const DEFAULT_ROWS: u8 = 9;

/// 默认棋盘列数
pub const DEFAULT_COLS: u8 = 8;

/// 棋盘最少行数（双方各占三行）
pub const MIN_ROWS: u8 = 6;

/// 每种项的默认初始系数（蓝方按此顺序，红方逆序）
pub const DEFAULT_TERMS: [i32; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];

/// 二次项最远步数
pub const QUADRATIC_MAX_STEPS: u8 = 3;

/// 一次项最远步数
pub const LINEAR_MAX_STEPS: u8 = 2;

/// 常数项最远步数
pub const CONSTANT_MAX_STEPS: u8 = 1;

/// 方程消灭一枚敌方棋子的 AI 奖励分
pub const CAPTURE_REWARD: i32 = 100;

/// 方程反噬一枚己方棋子的 AI 惩罚分
pub const BACKFIRE_PENALTY: i32 = 200;

/// 每前进一行的 AI 奖励分
pub const ADVANCE_WEIGHT: i32 = 1;
