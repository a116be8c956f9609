//! 行分类与批次累积
//!
//! `TraceParser` 是显式的解析状态：每输入一行，返回一个可能已完成的批次。

use regex::Captures;
use tracing::debug;

use super::event::{Batch, Event, RunParams};
use super::patterns::{HINT_RE, PARAMETERS_RE, READ_RE, SEEK_RE};
use crate::error::{Error, Result};

/// 一行日志的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLine {
    Banner(RunParams),
    Seek {
        fd: i32,
    },
    Hint {
        fd: i32,
        offset: u64,
        size: u64,
        elapsed: String,
    },
    Read {
        syscall: String,
        fd: i32,
        offset: u64,
        size: u64,
        elapsed: String,
    },
    Other,
}

impl TraceLine {
    /// 按固定优先级匹配：banner > seek > hint > read
    pub fn classify(line: &str) -> Result<Self> {
        if let Some(caps) = PARAMETERS_RE.captures(line) {
            return Ok(Self::Banner(RunParams {
                effective_io_concurrency: number(&caps, 1, "effective_io_concurrency")?,
                range_size: number(&caps, 2, "range size")?,
            }));
        }
        if let Some(caps) = SEEK_RE.captures(line) {
            return Ok(Self::Seek {
                fd: number(&caps, 1, "fd")?,
            });
        }
        if let Some(caps) = HINT_RE.captures(line) {
            return Ok(Self::Hint {
                fd: number(&caps, 1, "fd")?,
                offset: number(&caps, 2, "offset")?,
                size: number(&caps, 3, "size")?,
                elapsed: caps[4].to_string(),
            });
        }
        if let Some(caps) = READ_RE.captures(line) {
            return Ok(Self::Read {
                syscall: caps[1].to_string(),
                fd: number(&caps, 2, "fd")?,
                offset: number(&caps, 3, "offset")?,
                size: number(&caps, 4, "size")?,
                elapsed: caps[5].to_string(),
            });
        }
        Ok(Self::Other)
    }
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, idx: usize, field: &'static str) -> Result<T> {
    let raw = &caps[idx];
    raw.parse().map_err(|_| Error::InvalidNumber {
        field,
        raw: raw.to_string(),
    })
}

/// 解析状态
#[derive(Debug, Default)]
pub struct TraceParser {
    /// 最近一次 lseek 的 fd，hint 只接受这个 fd
    seek_fd: Option<i32>,
    /// 本批次最近一次 lseek 或被接受的 hint/read 的 fd，read 只接受这个 fd
    accepted_fd: Option<i32>,
    batch: Batch,
}

impl TraceParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前累积中的批次
    #[cfg(test)]
    pub(crate) fn pending(&self) -> &Batch {
        &self.batch
    }

    /// 处理一行；遇到 banner 时返回上一个非空批次
    pub fn feed(&mut self, line: &str) -> Result<Option<Batch>> {
        match TraceLine::classify(line.trim())? {
            TraceLine::Banner(params) => {
                self.seek_fd = None;
                self.accepted_fd = None;
                let done = std::mem::replace(&mut self.batch, Batch::new(Some(params)));
                if done.is_empty() {
                    return Ok(None);
                }
                debug!(events = done.events.len(), "batch complete");
                return Ok(Some(done));
            }
            TraceLine::Seek { fd } => {
                self.seek_fd = Some(fd);
                // 没有 fadvise 的批次（eic = 0）里，read 以 lseek 的 fd 为准
                self.accepted_fd = Some(fd);
            }
            TraceLine::Hint {
                fd,
                offset,
                size,
                elapsed,
            } => {
                if self.seek_fd != Some(fd) {
                    debug!(fd, seek_fd = ?self.seek_fd, "skip fadvise on other fd");
                    return Ok(None);
                }
                self.accepted_fd = Some(fd);
                self.batch.events.push(Event::hint(offset, size, elapsed));
            }
            TraceLine::Read {
                syscall,
                fd,
                offset,
                size,
                elapsed,
            } => {
                if self.accepted_fd != Some(fd) {
                    debug!(fd, accepted_fd = ?self.accepted_fd, "skip {syscall} on other fd");
                    return Ok(None);
                }
                self.batch
                    .events
                    .push(Event::read(syscall, offset, size, elapsed));
            }
            TraceLine::Other => {}
        }
        Ok(None)
    }

    /// 输入结束：返回最后一个非空批次
    pub fn finish(self) -> Option<Batch> {
        if self.batch.is_empty() {
            None
        } else {
            debug!(events = self.batch.events.len(), "final batch complete");
            Some(self.batch)
        }
    }
}
