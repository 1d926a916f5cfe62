//! TripGraph 行程规划工具
//!
//! 读取道路地图，为每行请求（逗号分隔的地点名称）输出行车指引

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tripgraph::cli::{PrintMode, Printer};
use tripgraph::import::MapImporter;
use tripgraph::trip::{TripOptions, TripPlanner};

#[derive(Parser, Debug)]
#[command(name = "tripgraph")]
#[command(about = "TripGraph 行程规划工具")]
#[command(version)]
struct Args {
    /// 地图文件
    #[arg(short, long, default_value = "Map")]
    map: PathBuf,

    /// 输出文件（默认标准输出）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 请求文件（默认标准输入）
    request: Option<PathBuf>,

    /// 以 JSON 输出行程
    #[arg(long)]
    json: bool,

    /// 不使用直线距离启发值
    #[arg(long)]
    no_heuristic: bool,

    /// 里程保留的小数位数
    #[arg(long, default_value = "1")]
    precision: usize,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 日志级别（覆盖 --verbose）
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.log_level.as_deref())?;

    let mut importer = MapImporter::new();
    let map = importer
        .import_file(&args.map)
        .with_context(|| format!("无法读取地图 {}", args.map.display()))?;
    debug!(
        locations = importer.stats().locations_imported,
        roads = importer.stats().roads_imported,
        elapsed_ms = importer.stats().duration_ms,
        "地图已加载"
    );

    let options = TripOptions {
        use_heuristic: !args.no_heuristic,
    };
    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Text
    };
    let printer = Printer::new(mode).with_precision(args.precision);
    let planner = TripPlanner::with_options(&map, options);

    let input: Box<dyn BufRead> = match &args.request {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("无法打开请求文件 {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("无法创建输出文件 {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut failures = 0usize;
    let mut first = true;
    for line in input.lines() {
        let line = line.context("读取请求失败")?;
        let names: Vec<&str> = line
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            continue;
        }

        match planner.plan(&names) {
            Ok(itinerary) => {
                if !first && mode == PrintMode::Text {
                    writeln!(output)?;
                }
                first = false;
                output.write_all(printer.print_itinerary(&itinerary)?.as_bytes())?;
            }
            Err(e) => {
                error!(request = %line, "行程规划失败: {}", e);
                eprintln!("错误: {}", e);
                failures += 1;
            }
        }
    }
    output.flush().context("写出结果失败")?;

    if failures > 0 {
        bail!("{} 个请求失败", failures);
    }
    Ok(())
}

/// 初始化日志，RUST_LOG 优先
fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<()> {
    let level = match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("tripgraph={}", level),
        (true, None) => "tripgraph=debug".to_string(),
        (false, None) => "tripgraph=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .context("初始化日志失败")?;
    Ok(())
}
