use crate::frame::SeqNo;
use serde::{Deserialize, Serialize};

/// 一次发送观察到的接收端反馈
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    /// 正常累计 ACK（确认号 = 本帧序列号 + 1，模 64）
    Ack(SeqNo),
    /// 恢复期间接收端重复确认最后一个正确收到的序列号
    DupAck(SeqNo),
    /// SR：接收端点名丢失帧的序列号
    Nack(SeqNo),
}

/// 帧级轨迹事件，严格按算法产生顺序排列。
///
/// GBN 的快速重传表现为触发发送之后的一串连续 `Retransmit`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// 正常送达的一次发送及其反馈
    Transmit { frame: u64, seq: SeqNo, reply: Reply },
    /// 该帧在链路上丢失（无反馈）
    Loss { frame: u64, seq: SeqNo },
    /// 重传（GBN 快速重传 burst 的一项，或 SR 的单帧重传）
    Retransmit { frame: u64, seq: SeqNo, ack: SeqNo },
}
