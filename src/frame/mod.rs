//! 帧划分模块
//!
//! 把输入字节流按固定大小切分为帧，并定义模 64 回绕的序列号算术。

mod enumerate;
mod seq;

pub use enumerate::{FRAME_BYTES, total_frames};
pub use seq::{SEQ_MODULUS, SeqNo};
