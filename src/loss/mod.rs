//! 丢帧选择模块
//!
//! 仿真开始前，用带种子的伪随机源确定性地选出丢失帧集合。
//! 两个仿真器只读该集合，从不修改。

mod selector;

pub use selector::{LOSS_FRACTION, loss_count, pick_lost_frames};
