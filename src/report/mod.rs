//! 文本报告
//!
//! 把结构化轨迹渲染成逐行的控制台输出；仿真器本身不做任何格式化。

mod text;

pub use text::{render_banner, render_event, render_loss_frames, render_total, write_trace};
