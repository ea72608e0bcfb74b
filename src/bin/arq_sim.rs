//! ARQ 仿真 CLI
//!
//! 读入文件、按 1200 字节分帧、按 5% 比例选丢帧，
//! 然后用所选算法产出帧级轨迹并逐行打印。

use arqsim_rs::arq::Algorithm;
use arqsim_rs::{frame, load, loss, report};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "arq-sim", about = "帧级 ARQ 仿真：Go-Back-N / Selective-Repeat")]
struct Args {
    /// 流控算法（1: Go-Back-N ARQ，2: Selective-Repeat ARQ）
    #[arg(long)]
    algo: u8,

    /// 输入文件路径（按 1200 字节分帧）
    #[arg(long)]
    input: PathBuf,

    /// 丢帧选择的随机种子；不填则使用系统熵
    #[arg(long)]
    seed: Option<u64>,

    /// 输出结构化轨迹 JSON 文件；不填则不生成
    #[arg(long)]
    trace_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let algo = match Algorithm::try_from(args.algo) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    // 整体读入载荷；句柄在仿真开始前已释放
    let payload = match load::read_payload(&args.input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let total = frame::total_frames(payload.len() as u64);

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let lost = loss::pick_lost_frames(total, loss::loss_count(total), &mut rng);

    let events = algo.run(total, &lost);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out).expect("write stdout");
    writeln!(out, "{}", report::render_total(total)).expect("write stdout");
    writeln!(out, "{}", report::render_loss_frames(&lost)).expect("write stdout");
    writeln!(out).expect("write stdout");
    writeln!(out, "{}", report::render_banner(algo)).expect("write stdout");
    report::write_trace(&mut out, &events).expect("write stdout");

    if let Some(path) = args.trace_json {
        let json = serde_json::to_string_pretty(&events).expect("serialize trace events");
        fs::write(&path, json).expect("write trace json");
        eprintln!("wrote trace events to {}", path.display());
    }

    ExitCode::SUCCESS
}
