//! 逐行文本渲染
//!
//! 行格式与事件一一对应，便于肉眼比对轨迹。

use crate::arq::Algorithm;
use crate::trace::{Reply, TraceEvent};
use std::collections::BTreeSet;
use std::io;

/// 总帧数行
pub fn render_total(total: u64) -> String {
    format!("The total number of frames to be transmitted is {total}.")
}

/// 丢失帧列表行（升序）
pub fn render_loss_frames(lost: &BTreeSet<u64>) -> String {
    let frames: Vec<String> = lost.iter().map(|f| format!("Frame {f}")).collect();
    format!("The loss frames are {}.", frames.join(", "))
}

/// 算法抬头行（窗口大小与序列号范围仅作报告）
pub fn render_banner(algo: Algorithm) -> String {
    format!(
        "{} (Window Size = {}; Sequence Number 0 to 63)",
        algo.label(),
        algo.window()
    )
}

/// 单条事件对应的输出行
pub fn render_event(ev: &TraceEvent) -> String {
    match ev {
        TraceEvent::Transmit { frame, seq, reply } => match reply {
            // 恢复期间的重复 ACK 与正常 ACK 行格式一致
            Reply::Ack(ack) | Reply::DupAck(ack) => {
                format!("Frame {frame}: Seq No. {seq}   ACK {ack}")
            }
            Reply::Nack(nack) => format!("Frame {frame}: Seq No. {seq}   NACK {nack}"),
        },
        TraceEvent::Loss { frame, seq } => format!("Frame {frame}: Seq No. {seq} (Loss)  -"),
        TraceEvent::Retransmit { frame, seq, ack } => {
            format!("Frame {frame}: Seq No. {seq} (Retransmit) ACK {ack}")
        }
    }
}

/// 把整条轨迹逐行写出
pub fn write_trace(out: &mut impl io::Write, events: &[TraceEvent]) -> io::Result<()> {
    for ev in events {
        writeln!(out, "{}", render_event(ev))?;
    }
    Ok(())
}
