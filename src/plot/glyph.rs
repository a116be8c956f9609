//! 制表字符

// fadvise -> pread 连接线
pub const EMPTY: char = ' ';
pub const HORIZONTAL: char = '─';
pub const START: char = '●';
pub const TURN_DOWN: char = '╮';
pub const VERTICAL: char = '│';
pub const CROSS: char = '┼';
pub const TURN_UP: char = '╰';
pub const END: char = '►';

// 顺序读括号
pub const SEQUENCE_READ: char = '─';
pub const SEQUENCE_FIRST: char = '╮';
pub const SEQUENCE_STRETCH: char = '│';
pub const SEQUENCE_MORE: char = '┤';
pub const SEQUENCE_LAST: char = '╯';
pub const SEQUENCE_ISOLATED: char = '╴';
