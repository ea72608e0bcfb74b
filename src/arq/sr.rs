//! Selective-Repeat（帧级仿真）
//!
//! 逐帧确认：接收端用 NACK 点名丢失帧，发送端只重传该帧，
//! 已正确收到的后续帧不重发。

use crate::frame::SeqNo;
use crate::trace::{Reply, TraceEvent};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// 发送端恢复状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Normal,
    /// 已观察到丢帧，等待下一帧捎带 NACK
    AwaitingRetransmit { lost_frame: u64 },
}

/// 按帧序重放 Selective-Repeat 的事件轨迹。
///
/// 若最后一帧丢失（没有后续帧可捎带 NACK），在帧范围结束后
/// 直接补发一条重传事件；GBN 没有对应的收尾动作。
#[tracing::instrument(skip(lost), fields(lost_frames = lost.len()))]
pub fn run(total: u64, lost: &BTreeSet<u64>) -> Vec<TraceEvent> {
    let mut events = Vec::with_capacity(total as usize);
    let mut phase = Phase::Normal;

    for i in 0..total {
        let seq = SeqNo::of(i);
        if lost.contains(&i) {
            // 新的丢帧覆盖旧的 pending 帧（与 GBN 一致的再入行为）
            trace!(frame = i, seq = %seq, "帧丢失");
            events.push(TraceEvent::Loss { frame: i, seq });
            phase = Phase::AwaitingRetransmit { lost_frame: i };
        } else if let Phase::AwaitingRetransmit { lost_frame } = phase {
            let lost_seq = SeqNo::of(lost_frame);
            events.push(TraceEvent::Transmit {
                frame: i,
                seq,
                reply: Reply::Nack(lost_seq),
            });
            debug!(frame = lost_frame, "收到 NACK，单帧重传");
            events.push(TraceEvent::Retransmit {
                frame: lost_frame,
                seq: lost_seq,
                ack: lost_seq.next(),
            });
            phase = Phase::Normal;
        } else {
            events.push(TraceEvent::Transmit {
                frame: i,
                seq,
                reply: Reply::Ack(seq.next()),
            });
        }
    }

    // 尾帧丢失：没有后续帧可携带 NACK，范围结束后直接重传
    if let Phase::AwaitingRetransmit { lost_frame } = phase {
        let lost_seq = SeqNo::of(lost_frame);
        debug!(frame = lost_frame, "尾帧丢失，范围结束后补发重传");
        events.push(TraceEvent::Retransmit {
            frame: lost_frame,
            seq: lost_seq,
            ack: lost_seq.next(),
        });
    }

    events
}
