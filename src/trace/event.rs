//! 规范化事件与批次

/// 被跟踪系统的页大小（字节）
pub const BLOCKSIZE: u64 = 8192;

/// 事件类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// 预读提示（fadvise）
    Hint,
    /// 实际读取；`syscall` 仅用于显示（pread / preadv）
    Read { syscall: String },
}

/// 一次系统调用观测
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub offset: u64,
    pub size: u64,
    /// strace 给出的耗时，原样显示
    pub elapsed: String,
}

impl Event {
    pub fn hint(offset: u64, size: u64, elapsed: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Hint,
            offset,
            size,
            elapsed: elapsed.into(),
        }
    }

    pub fn read(
        syscall: impl Into<String>,
        offset: u64,
        size: u64,
        elapsed: impl Into<String>,
    ) -> Self {
        Self {
            kind: EventKind::Read {
                syscall: syscall.into(),
            },
            offset,
            size,
            elapsed: elapsed.into(),
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self.kind, EventKind::Read { .. })
    }

    /// 显示用的系统调用名
    pub fn syscall(&self) -> &str {
        match &self.kind {
            EventKind::Hint => "fadvise",
            EventKind::Read { syscall } => syscall,
        }
    }

    /// 字节范围的结束位置（不含）
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.size)
    }

    pub fn first_block(&self) -> i64 {
        (self.offset / BLOCKSIZE) as i64
    }

    /// 最后一个块；`size == 0` 且起点对齐时会比 `first_block` 小 1
    pub fn last_block(&self) -> i64 {
        (self.end() / BLOCKSIZE) as i64 - 1
    }

    pub fn block_count(&self) -> i64 {
        self.last_block() - self.first_block() + 1
    }
}

/// 一组运行参数（来自 banner 行）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    pub effective_io_concurrency: u64,
    pub range_size: u64,
}

/// 同一运行参数下的事件序列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// banner 之前出现的事件没有参数
    pub params: Option<RunParams>,
    pub events: Vec<Event>,
}

impl Batch {
    pub fn new(params: Option<RunParams>) -> Self {
        Self {
            params,
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
