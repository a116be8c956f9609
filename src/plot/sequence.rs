//! 顺序读括号

use super::glyph;
use crate::trace::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// run 的第一个读取
    First,
    /// run 中间
    More,
    /// run 的最后一个读取
    Last,
    /// 前后都不相邻的读取
    Isolated,
    /// run 内部穿插的 hint
    Stretch,
    Blank,
}

impl Bracket {
    pub fn glyph(self) -> String {
        let (a, b) = match self {
            Self::First => (glyph::SEQUENCE_READ, glyph::SEQUENCE_FIRST),
            Self::More => (glyph::SEQUENCE_READ, glyph::SEQUENCE_MORE),
            Self::Last => (glyph::SEQUENCE_READ, glyph::SEQUENCE_LAST),
            Self::Isolated => (glyph::SEQUENCE_READ, glyph::SEQUENCE_ISOLATED),
            Self::Stretch => (' ', glyph::SEQUENCE_STRETCH),
            Self::Blank => (' ', ' '),
        };
        [a, b].iter().collect()
    }
}

/// 每个事件一个括号。下一个 read（跳过 hint）恰好从本次结束处开始时，
/// 视为 run 的延续。
pub fn brackets(events: &[Event]) -> Vec<Bracket> {
    let mut continued = false;
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            if !event.is_read() {
                return if continued {
                    Bracket::Stretch
                } else {
                    Bracket::Blank
                };
            }
            let continues = events[i + 1..]
                .iter()
                .find(|next| next.is_read())
                .is_some_and(|next| next.offset == event.end());
            let bracket = match (continues, continued) {
                (true, true) => Bracket::More,
                (true, false) => Bracket::First,
                (false, true) => Bracket::Last,
                (false, false) => Bracket::Isolated,
            };
            continued = continues;
            bracket
        })
        .collect()
}
