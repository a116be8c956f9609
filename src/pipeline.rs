//! 单遍处理：逐行解析，批次完成后立即绘制

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::Result;
use crate::plot::{PlotConfig, write_batch};
use crate::trace::TraceParser;

/// 读取整个输入并输出所有批次的图
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, cfg: &PlotConfig) -> Result<()> {
    cfg.validate()?;

    let mut parser = TraceParser::new();
    let mut batches = 0usize;
    for line in input.split(b'\n') {
        let line = line?;
        // strace 的字符串参数可能不是合法 UTF-8
        let line = String::from_utf8_lossy(&line);
        if let Some(batch) = parser.feed(&line)? {
            write_batch(out, &batch, cfg)?;
            batches += 1;
        }
    }
    if let Some(batch) = parser.finish() {
        write_batch(out, &batch, cfg)?;
        batches += 1;
    }
    out.flush()?;

    info!(batches, "done");
    Ok(())
}
