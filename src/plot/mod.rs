//! 连接图与顺序读括号的绘制
//!
//! 每个批次先完整收集事件，再逐行绘制：括号需要向后查找下一次读取。

pub mod glyph;
mod lanes;
mod layout;
mod render;
mod sequence;

pub use lanes::{Cell, Connections, Lanes};
pub use layout::PlotConfig;
pub use render::{format_line, write_batch};
pub use sequence::{Bracket, brackets};
