//! Lane 分配
//!
//! `Lanes` 是不可变快照：`open` / `close` 返回新状态和本行要打印的图形，
//! 不在同一个缓冲区上先复制再修改。

use std::collections::HashMap;
use std::ops::RangeInclusive;

use tracing::{debug, trace};

use super::glyph;
use super::layout::PlotConfig;
use crate::error::{Error, Result};
use crate::trace::{Event, EventKind};

/// 一列的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// 有一条连接的竖线经过
    Occupied,
}

/// Lane 数组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lanes {
    cells: Vec<Cell>,
    margin: usize,
}

impl Lanes {
    pub fn new(cfg: &PlotConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            cells: vec![Cell::Empty; cfg.lane_count()],
            margin: cfg.margin,
        })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, column: usize) -> Cell {
        self.cells[column]
    }

    /// 正在使用的 lane 数
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Occupied).count()
    }

    pub fn is_clear(&self) -> bool {
        self.occupied() == 0
    }

    /// 可分配的列：两侧 margin 之内
    fn usable(&self) -> RangeInclusive<usize> {
        self.margin + 1..=self.cells.len().saturating_sub(self.margin + 1)
    }

    /// 为新的 hint 选一列。
    ///
    /// 优先紧贴当前最左侧连接的左边，减少交叉；放不下时从右往左找空列。
    pub fn find_free_position(&self) -> Result<usize> {
        let left_most = self.usable().find(|&i| self.cells[i] == Cell::Occupied);
        if let Some(column) = left_most.filter(|&c| c - 1 > self.margin) {
            return Ok(column - 1);
        }
        self.usable()
            .rev()
            .find(|&i| self.cells[i] == Cell::Empty)
            .ok_or(Error::LanesExhausted {
                in_flight: self.occupied(),
            })
    }

    /// 当前状态的原样显示
    pub fn row(&self) -> String {
        self.glyphs().into_iter().collect()
    }

    fn glyphs(&self) -> Vec<char> {
        self.cells
            .iter()
            .map(|c| match c {
                Cell::Empty => glyph::EMPTY,
                Cell::Occupied => glyph::VERTICAL,
            })
            .collect()
    }

    /// hint：占用 `column`，画出 `●───╮`
    pub fn open(&self, column: usize) -> (Lanes, String) {
        let mut next = self.clone();
        next.cells[column] = Cell::Occupied;

        let mut row = next.glyphs();
        for (i, g) in row.iter_mut().enumerate().take(column) {
            *g = horizontal_over(next.cells[i]);
        }
        row[0] = glyph::START;
        row[column] = glyph::TURN_DOWN;
        (next, row.into_iter().collect())
    }

    /// read：释放 `column`，画出 `╰───►`
    pub fn close(&self, column: usize) -> (Lanes, String) {
        let mut next = self.clone();
        next.cells[column] = Cell::Empty;

        let mut row = next.glyphs();
        for (i, g) in row.iter_mut().enumerate().skip(column) {
            *g = horizontal_over(next.cells[i]);
        }
        row[column] = glyph::TURN_UP;
        if let Some(last) = row.last_mut() {
            *last = glyph::END;
        }
        (next, row.into_iter().collect())
    }
}

fn horizontal_over(cell: Cell) -> char {
    match cell {
        Cell::Empty => glyph::HORIZONTAL,
        Cell::Occupied => glyph::CROSS,
    }
}

/// 一个批次内的连接状态：Lane 数组 + 等待匹配的 hint（offset -> 列）
#[derive(Debug, Clone)]
pub struct Connections {
    lanes: Lanes,
    pending: HashMap<u64, usize>,
}

impl Connections {
    pub fn new(cfg: &PlotConfig) -> Result<Self> {
        Ok(Self {
            lanes: Lanes::new(cfg)?,
            pending: HashMap::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn lanes(&self) -> &Lanes {
        &self.lanes
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, offset: u64) -> bool {
        self.pending.contains_key(&offset)
    }

    /// 推进状态并返回该事件的连接图
    pub fn plot(&mut self, event: &Event) -> Result<String> {
        match event.kind {
            EventKind::Hint => {
                let column = self.lanes.find_free_position()?;
                let (lanes, row) = self.lanes.open(column);
                self.lanes = lanes;
                // 同一 offset 的后一个 hint 覆盖前一个，旧的列一直占用到批次结束
                if let Some(prev) = self.pending.insert(event.offset, column) {
                    debug!(offset = event.offset, prev, column, "fadvise offset reused");
                }
                trace!(offset = event.offset, column, "open connection");
                Ok(row)
            }
            EventKind::Read { .. } => match self.pending.remove(&event.offset) {
                Some(column) => {
                    let (lanes, row) = self.lanes.close(column);
                    self.lanes = lanes;
                    trace!(offset = event.offset, column, "close connection");
                    Ok(row)
                }
                None => Ok(self.lanes.row()),
            },
        }
    }
}
