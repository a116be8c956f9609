//! 行匹配正则，首次使用时编译。
//!
//! 目标格式：Linux strace，`-T` 输出耗时，`-s100` 保证字符串足够长。
//! FreeBSD truss / macOS dtruss 的格式暂不支持。

use std::sync::LazyLock;

use regex::Regex;

/// `=== effective_io_concurrency 8, range size 64 ===`
pub static PARAMETERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=== effective_io_concurrency ([0-9]+), range size ([0-9]+) ===")
        .expect("Invalid parameters regex pattern")
});

/// `lseek(3, 0, SEEK_END)`，只取 fd
pub static SEEK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"lseek[0-9]*\(([0-9]+),").expect("Invalid lseek regex pattern")
});

/// `fadvise64(3, 8192, 8192, POSIX_FADV_WILLNEED) = 0 <0.000011>`
pub static HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fadvise[0-9]*\(([0-9]+), ?([0-9]+), ?([0-9]+),.*<([0-9.]+)>")
        .expect("Invalid fadvise regex pattern")
});

/// `pread64(3, "..."..., 8192, 16384) = 8192 <0.000020>`
/// 偏移是最后一个参数，大小取返回值
pub static READ_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(preadv?)[0-9]*\(([0-9]+),.*, ?([0-9]+)\) *= *([0-9]+).*<([0-9.]+)>")
        .expect("Invalid pread regex pattern")
});
