//! 帧数计算
//!
//! 输入按固定 1200 字节切帧，不足一帧的尾部也占一帧。

/// 每帧载荷大小（字节，固定）
pub const FRAME_BYTES: u64 = 1200;

/// 输入长度对应的总帧数：`ceil(payload_bytes / 1200)`；空输入为 0 帧。
pub fn total_frames(payload_bytes: u64) -> u64 {
    payload_bytes.div_ceil(FRAME_BYTES)
}
