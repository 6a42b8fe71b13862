//! 对端消息
//!
//! 联机时双方交换的消息值，编码为 JSON：
//! `{"type":"MOVE","data":{"from":{"r":6,"c":0},"to":{"r":5,"c":0}}}`。
//! 传输通道由外部提供，这里只负责编解码。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::moves::Move;

/// 对端消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerMessage {
    /// 对方走棋
    Move(Move),
    /// 对方要求重开
    Restart,
}

impl PeerMessage {
    /// 编码为 JSON 字符串
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 从 JSON 字符串解码
    pub fn decode(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::piece::Position;

    #[test]
    fn test_move_wire_format() {
        let msg = PeerMessage::Move(Move::new(Position::new(6, 0), Position::new(5, 0)));
        let value: serde_json::Value = serde_json::from_str(&msg.encode().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "type": "MOVE",
                "data": { "from": { "r": 6, "c": 0 }, "to": { "r": 5, "c": 0 } }
            })
        );
    }

    #[test]
    fn test_decode_from_peer() {
        let text = r#"{"type":"MOVE","data":{"from":{"r":2,"c":3},"to":{"r":3,"c":3}}}"#;
        assert_eq!(
            PeerMessage::decode(text).unwrap(),
            PeerMessage::Move(Move::new(Position::new(2, 3), Position::new(3, 3)))
        );

        assert_eq!(
            PeerMessage::decode(r#"{"type":"RESTART"}"#).unwrap(),
            PeerMessage::Restart
        );
    }

    #[test]
    fn test_decode_garbage() {
        let err = PeerMessage::decode(r#"{"type":"CHAT","data":"hi"}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Json(_)));
    }
}
