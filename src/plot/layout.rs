//! 版面尺寸

use crate::error::{Error, Result};

/// 终端宽度等版面参数；默认值让图在邮件里不折行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// 总列数
    pub columns: usize,
    /// 连接图之外的文字所占列数
    pub text: usize,
    /// 连接图两侧保留的列数，不会分配给连接
    pub margin: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            columns: 78,
            text: 64,
            margin: 2,
        }
    }
}

impl PlotConfig {
    /// 连接图的宽度（不含两侧 margin）
    pub fn width(&self) -> usize {
        self.columns.saturating_sub(self.text)
    }

    /// Lane 数组长度
    pub fn lane_count(&self) -> usize {
        self.width() + self.margin * 2
    }

    /// 至少要能画下一条连接
    pub fn validate(&self) -> Result<()> {
        if self.width() < self.margin * 2 + 1 {
            return Err(Error::TooNarrow {
                width: self.width(),
                margin: self.margin,
            });
        }
        Ok(())
    }
}
