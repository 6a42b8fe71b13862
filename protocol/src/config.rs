//! 对局配置
//!
//! 棋盘尺寸、先手方以及三种项的初始系数排列，可从 JSON 加载。

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TERMS, MIN_ROWS};
use crate::error::{ProtocolError, Result};
use crate::piece::Side;

/// 三种项的初始系数（蓝方视角，红方逆序摆放）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermLayout {
    pub quadratic: Vec<i32>,
    pub linear: Vec<i32>,
    pub constant: Vec<i32>,
}

impl Default for TermLayout {
    fn default() -> Self {
        Self {
            quadratic: DEFAULT_TERMS.to_vec(),
            linear: DEFAULT_TERMS.to_vec(),
            constant: DEFAULT_TERMS.to_vec(),
        }
    }
}

/// 对局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// 先手方
    pub starting_side: Side,
    pub layout: TermLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            starting_side: Side::Blue,
            layout: TermLayout::default(),
        }
    }
}

impl GameConfig {
    /// 从 JSON 字符串解析并校验
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 校验尺寸与排列是否一致
    pub fn validate(&self) -> Result<()> {
        if self.rows < MIN_ROWS {
            return Err(ProtocolError::InvalidConfig {
                reason: format!("rows must be at least {}, got {}", MIN_ROWS, self.rows),
            });
        }
        if self.cols == 0 {
            return Err(ProtocolError::InvalidConfig {
                reason: "cols must be positive".to_string(),
            });
        }

        let rows = [
            ("quadratic", &self.layout.quadratic),
            ("linear", &self.layout.linear),
            ("constant", &self.layout.constant),
        ];
        for (name, values) in rows {
            if values.len() != self.cols as usize {
                return Err(ProtocolError::InvalidConfig {
                    reason: format!(
                        "{} row has {} terms but board has {} columns",
                        name,
                        values.len(),
                        self.cols
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 8);
        assert_eq!(config.starting_side, Side::Blue);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "starting_side": "Red" }"#).unwrap();
        assert_eq!(config.starting_side, Side::Red);
        assert_eq!(config.rows, 9);
        assert_eq!(config.layout, TermLayout::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig {
            rows: 7,
            cols: 3,
            starting_side: Side::Red,
            layout: TermLayout {
                quadratic: vec![1, 2, 3],
                linear: vec![0, 0, 0],
                constant: vec![-1, -2, -3],
            },
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_layout_length_mismatch() {
        let mut config = GameConfig::default();
        config.layout.linear.pop();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidConfig { .. }));
        assert!(err.to_string().contains("linear"));
    }

    #[test]
    fn test_too_few_rows() {
        let config = GameConfig {
            rows: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ rows: nine }").unwrap_err();
        assert!(matches!(err, ProtocolError::Json(_)));
    }
}
