//! ARQ 算法模块
//!
//! 包含 Go-Back-N / Selective-Repeat 两种滑动窗口重传算法的帧级仿真。
//! 仿真是对帧范围的一次同步折叠：无真实网络、无定时器，
//! 窗口大小只作报告，不对在途帧数做约束。

pub mod gbn;
pub mod sr;

use crate::trace::TraceEvent;
use std::collections::BTreeSet;
use thiserror::Error;

/// 快速重传阈值：三个重复 ACK 触发重传（TCP 风格）
pub const DUP_ACK_THRESHOLD: u32 = 3;

/// GBN 窗口大小（2^k - 1，k = 6；仅报告用）
pub const GBN_WINDOW: u8 = 63;
/// SR 窗口大小（2^(k-1)；仅报告用）
pub const SR_WINDOW: u8 = 32;

/// 流控算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    GoBackN,
    SelectiveRepeat,
}

/// 非法的算法编号（只接受 1 或 2）
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid algorithm {0}: please enter 1 or 2 only")]
pub struct InvalidAlgorithm(pub u8);

impl TryFrom<u8> for Algorithm {
    type Error = InvalidAlgorithm;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Algorithm::GoBackN),
            2 => Ok(Algorithm::SelectiveRepeat),
            other => Err(InvalidAlgorithm(other)),
        }
    }
}

impl Algorithm {
    /// 报告用窗口大小（不参与仿真判定）
    pub fn window(self) -> u8 {
        match self {
            Algorithm::GoBackN => GBN_WINDOW,
            Algorithm::SelectiveRepeat => SR_WINDOW,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::GoBackN => "Go-Back-N ARQ",
            Algorithm::SelectiveRepeat => "Selective-Repeat ARQ",
        }
    }

    /// 运行所选算法，产出帧级事件轨迹。丢帧集合只读。
    pub fn run(self, total: u64, lost: &BTreeSet<u64>) -> Vec<TraceEvent> {
        match self {
            Algorithm::GoBackN => gbn::run(total, lost),
            Algorithm::SelectiveRepeat => sr::run(total, lost),
        }
    }
}
