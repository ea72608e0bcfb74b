//! 序列号类型
//!
//! 定义 6 bit 帧头序列号（0–63），随帧编号模 64 回绕。

use serde::{Deserialize, Serialize};

/// 序列号模数（帧头 6 bit 字段，2^6 = 64）
pub const SEQ_MODULUS: u64 = 64;

/// 帧序列号（0–63）。序列号不独立存储，总是由帧编号推导。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeqNo(pub u8);

impl SeqNo {
    /// 帧编号对应的序列号：`i mod 64`
    pub fn of(frame: u64) -> SeqNo {
        SeqNo((frame % SEQ_MODULUS) as u8)
    }

    /// 下一个序列号（模 64 回绕）：确认该帧时期望的 ACK 号
    pub fn next(self) -> SeqNo {
        SeqNo(((u64::from(self.0) + 1) % SEQ_MODULUS) as u8)
    }
}

impl std::fmt::Display for SeqNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
