//! 帧级轨迹事件（结构化输出）
//!
//! 设计目标：
//! - **结构化**：仿真器只产出事件，不做任何文本格式化/打印
//! - **可序列化**：JSON 事件可落盘供离线分析
//! - **有序**：事件顺序即算法产生顺序

mod types;

pub use types::{Reply, TraceEvent};
