use crate::arq::Algorithm;
use crate::frame::SeqNo;
use crate::report;
use crate::trace::{Reply, TraceEvent};
use std::collections::BTreeSet;

#[test]
fn event_lines_match_the_console_format() {
    assert_eq!(
        report::render_event(&TraceEvent::Loss { frame: 2, seq: SeqNo(2) }),
        "Frame 2: Seq No. 2 (Loss)  -"
    );
    assert_eq!(
        report::render_event(&TraceEvent::Transmit {
            frame: 3,
            seq: SeqNo(3),
            reply: Reply::Ack(SeqNo(4)),
        }),
        "Frame 3: Seq No. 3   ACK 4"
    );
    // Duplicate ACKs render exactly like plain ACKs.
    assert_eq!(
        report::render_event(&TraceEvent::Transmit {
            frame: 3,
            seq: SeqNo(3),
            reply: Reply::DupAck(SeqNo(3)),
        }),
        "Frame 3: Seq No. 3   ACK 3"
    );
    assert_eq!(
        report::render_event(&TraceEvent::Transmit {
            frame: 3,
            seq: SeqNo(3),
            reply: Reply::Nack(SeqNo(2)),
        }),
        "Frame 3: Seq No. 3   NACK 2"
    );
    assert_eq!(
        report::render_event(&TraceEvent::Retransmit { frame: 2, seq: SeqNo(2), ack: SeqNo(3) }),
        "Frame 2: Seq No. 2 (Retransmit) ACK 3"
    );
}

#[test]
fn preamble_lines() {
    assert_eq!(
        report::render_total(10),
        "The total number of frames to be transmitted is 10."
    );
    let lost: BTreeSet<u64> = [7, 2].into_iter().collect();
    assert_eq!(
        report::render_loss_frames(&lost),
        "The loss frames are Frame 2, Frame 7."
    );
    assert_eq!(
        report::render_banner(Algorithm::GoBackN),
        "Go-Back-N ARQ (Window Size = 63; Sequence Number 0 to 63)"
    );
    assert_eq!(
        report::render_banner(Algorithm::SelectiveRepeat),
        "Selective-Repeat ARQ (Window Size = 32; Sequence Number 0 to 63)"
    );
}

#[test]
fn write_trace_emits_one_line_per_event() {
    let events = vec![
        TraceEvent::Transmit { frame: 0, seq: SeqNo(0), reply: Reply::Ack(SeqNo(1)) },
        TraceEvent::Loss { frame: 1, seq: SeqNo(1) },
    ];
    let mut buf = Vec::new();
    report::write_trace(&mut buf, &events).expect("write to vec");
    let text = String::from_utf8(buf).expect("utf8");
    assert_eq!(text, "Frame 0: Seq No. 0   ACK 1\nFrame 1: Seq No. 1 (Loss)  -\n");
}
