//! 输出格式
//!
//! hint 行的文字在左、read 行的文字在右，连接图始终落在同一列区间。

use std::io::Write;

use tracing::{debug, warn};

use super::lanes::Connections;
use super::layout::PlotConfig;
use super::sequence::{Bracket, brackets};
use crate::error::Result;
use crate::trace::{Batch, Event, EventKind};

/// hint 行文字部分的宽度，也是 read 行的缩进
const TEXT_PAD: usize = 29;

pub fn format_line(event: &Event, row: &str, bracket: Bracket) -> String {
    let fields = format!(
        "{:<6} {:>2} {:>3}..{:<3} {}",
        event.syscall(),
        event.block_count(),
        event.first_block(),
        event.last_block(),
        event.elapsed
    );
    let pad = " ".repeat(TEXT_PAD);
    match event.kind {
        EventKind::Hint => format!("{fields} {row}{pad}{}", bracket.glyph()),
        EventKind::Read { .. } => format!("{pad}{row} {fields} {}", bracket.glyph()),
    }
}

/// 绘制一个批次，逐行写出；出错时已写出的行保留
pub fn write_batch<W: Write>(out: &mut W, batch: &Batch, cfg: &PlotConfig) -> Result<()> {
    if let Some(params) = batch.params {
        writeln!(
            out,
            "effective_io_concurrency = {}, range size = {}",
            params.effective_io_concurrency, params.range_size
        )?;
        writeln!(out)?;
    }

    let mut connections = Connections::new(cfg)?;
    let brackets = brackets(&batch.events);
    for (event, bracket) in batch.events.iter().zip(brackets) {
        let row = connections.plot(event)?;
        writeln!(out, "{}", format_line(event, &row, bracket))?;
    }

    if connections.pending() > 0 {
        warn!(
            unmatched = connections.pending(),
            "batch ended with fadvise calls never followed by a read"
        );
    }
    debug!(events = batch.events.len(), "batch plotted");
    Ok(())
}
