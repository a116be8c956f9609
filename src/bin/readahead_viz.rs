//! fadvise / pread 预读关系图
//!
//! 从标准输入读取 strace 输出（`strace -T -s100`），向标准输出打印图。

use std::io;
use std::process::ExitCode;

use clap::Parser;
use readahead_viz::pipeline;
use readahead_viz::plot::PlotConfig;

#[derive(Debug, Parser)]
#[command(
    name = "readahead_viz",
    version,
    about = "Plot fadvise -> pread connections from strace output on stdin"
)]
struct Args {}

fn main() -> ExitCode {
    // 日志走 stderr，stdout 只有图
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let _args = Args::parse();

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    match pipeline::run(stdin, &mut stdout, &PlotConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "aborting");
            eprintln!("readahead_viz: {err}");
            ExitCode::FAILURE
        }
    }
}
