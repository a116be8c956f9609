//! 错误类型
//!
//! 所有错误都是致命的：调用方直接终止本次运行。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// 正则已匹配，但数字字段无法转换
    #[error("malformed {field} field in trace line: {raw:?}")]
    InvalidNumber { field: &'static str, raw: String },

    #[error("terminal too narrow to plot even one connection (width {width}, margin {margin})")]
    TooNarrow { width: usize, margin: usize },

    #[error("terminal too narrow to plot required number of connections ({in_flight} in flight)")]
    LanesExhausted { in_flight: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
