//! 丢帧选择
//!
//! 按固定比例（总帧数的 5%）从 `[0, total)` 无放回地抽取丢失帧编号。

use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

/// 丢帧比例（总帧数的 5%，向上取整）
pub const LOSS_FRACTION: f64 = 0.05;

/// 丢失帧数：`ceil(total * 0.05)`
pub fn loss_count(total: u64) -> u64 {
    (total as f64 * LOSS_FRACTION).ceil() as u64
}

/// 从 `[0, total)` 抽取 `count` 个互不相同的丢失帧编号。
///
/// 拒绝采样直到集合达到 `count`；`count` 先截断到 `total`，
/// 因此 `count == total`（全部丢失）也能终止。`total == 0` 返回空集。
/// 同一种子、同一输入总是得到同一集合。
#[tracing::instrument(skip(rng))]
pub fn pick_lost_frames(total: u64, count: u64, rng: &mut impl Rng) -> BTreeSet<u64> {
    let mut lost = BTreeSet::new();
    if total == 0 {
        return lost;
    }
    let count = count.min(total);
    while (lost.len() as u64) < count {
        lost.insert(rng.gen_range(0..total));
    }
    debug!(total, picked = lost.len(), "丢失帧集合已确定");
    lost
}
