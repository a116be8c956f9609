//! strace 日志解析
//!
//! 把原始文本行分类为 banner / seek / hint / read，并按运行参数切分为批次。

mod event;
mod parser;
mod patterns;

pub use event::{BLOCKSIZE, Batch, Event, EventKind, RunParams};
pub use parser::{TraceLine, TraceParser};
