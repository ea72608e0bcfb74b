//! Go-Back-N（帧级仿真）
//!
//! 累计 ACK：接收端无法指出丢失帧之后还有哪些帧缺失，
//! 三个重复 ACK 后从丢失帧到当前帧整段重传。

use super::DUP_ACK_THRESHOLD;
use crate::frame::SeqNo;
use crate::trace::{Reply, TraceEvent};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// 发送端恢复状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// 正常逐帧发送
    Normal,
    /// 已观察到丢帧，等待第三个重复 ACK
    Recovering {
        /// 本轮恢复窗口的起始帧（最近一次丢失的帧）
        first_lost: u64,
        /// 接收端反复确认的序列号
        expected_ack: SeqNo,
        /// 已观察到的重复 ACK 数
        dup_acks: u32,
    },
}

/// 按帧序重放 Go-Back-N 的事件轨迹。
///
/// 丢帧集合只读。帧范围结束时若仍在恢复状态，轨迹直接截止，
/// 不做任何收尾重传（与 SR 不同）；全部丢失的输入只会逐帧产出
/// `Loss` 事件，永远到不了重复 ACK 阈值，这是合法结果而非错误。
#[tracing::instrument(skip(lost), fields(lost_frames = lost.len()))]
pub fn run(total: u64, lost: &BTreeSet<u64>) -> Vec<TraceEvent> {
    let mut events = Vec::with_capacity(total as usize);
    let mut phase = Phase::Normal;

    for i in 0..total {
        let seq = SeqNo::of(i);
        if lost.contains(&i) {
            // 新的丢帧覆盖旧的恢复窗口，旧的 pending 帧被丢弃
            trace!(frame = i, seq = %seq, "帧丢失");
            events.push(TraceEvent::Loss { frame: i, seq });
            phase = Phase::Recovering {
                first_lost: i,
                expected_ack: seq.next(),
                dup_acks: 0,
            };
        } else if let Phase::Recovering {
            first_lost,
            expected_ack,
            dup_acks,
        } = phase
        {
            events.push(TraceEvent::Transmit {
                frame: i,
                seq,
                reply: Reply::DupAck(expected_ack),
            });
            let dup_acks = dup_acks + 1;
            if dup_acks == DUP_ACK_THRESHOLD {
                debug!(first_lost, up_to = i, "三个重复 ACK，触发快速重传");
                for j in first_lost..=i {
                    let sq = SeqNo::of(j);
                    events.push(TraceEvent::Retransmit {
                        frame: j,
                        seq: sq,
                        ack: sq.next(),
                    });
                }
                phase = Phase::Normal;
            } else {
                phase = Phase::Recovering {
                    first_lost,
                    expected_ack,
                    dup_acks,
                };
            }
        } else {
            events.push(TraceEvent::Transmit {
                frame: i,
                seq,
                reply: Reply::Ack(seq.next()),
            });
        }
    }

    events
}
