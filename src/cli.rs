//! CLI 분기: `serve` (기본), `measure`, `version`, `help`.
//! Command-line dispatch for the `bff-server` binary.

use anyhow::{anyhow, bail, Context, Result};

use crate::domains::perf::models::Strategy;
use crate::domains::perf::services::DEFAULT_REQUEST_COUNT;

/// 해석된 명령
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// HTTP 서버 실행
    Serve,
    /// 순차/병렬 배치 시간 측정
    Measure(MeasureArgs),
    Version,
    Help,
}

/// `measure` 실행 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    Sequential,
    Parallel,
    Both,
}

impl MeasureMode {
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            MeasureMode::Sequential => &[Strategy::Sequential],
            MeasureMode::Parallel => &[Strategy::Parallel],
            MeasureMode::Both => &[Strategy::Sequential, Strategy::Parallel],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureArgs {
    pub count: u64,
    pub mode: MeasureMode,
    /// 없으면 설정의 BFF_API_URL 사용
    pub url: Option<String>,
}

impl Default for MeasureArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_REQUEST_COUNT,
            mode: MeasureMode::Both,
            url: None,
        }
    }
}

/// 인자 해석 (프로그램 이름 제외)
/// Parse arguments, excluding the program name
pub fn parse(args: &[String]) -> Result<Command> {
    let Some(cmd) = args.first().map(|arg| arg.trim()) else {
        return Ok(Command::Serve);
    };

    match cmd {
        "" | "serve" => Ok(Command::Serve),
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-V" | "--version" | "version" => Ok(Command::Version),
        "measure" => parse_measure(&args[1..]).map(Command::Measure),
        other => Err(anyhow!(
            "unknown command: {other}; run `bff-server --help` for usage"
        )),
    }
}

fn parse_measure(args: &[String]) -> Result<MeasureArgs> {
    let mut parsed = MeasureArgs::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .ok_or_else(|| anyhow!("{flag} requires a value"))
        };

        match flag.as_str() {
            "--count" | "-n" => {
                let raw = value()?;
                parsed.count = raw
                    .parse()
                    .with_context(|| format!("--count must be a positive integer, got {raw:?}"))?;
                if parsed.count == 0 {
                    bail!("--count must be at least 1");
                }
            }
            "--mode" => {
                parsed.mode = match value()? {
                    "sequential" | "seq" => MeasureMode::Sequential,
                    "parallel" | "par" => MeasureMode::Parallel,
                    "both" => MeasureMode::Both,
                    other => bail!("unsupported mode: {other}"),
                };
            }
            "--url" => parsed.url = Some(value()?.to_string()),
            other => bail!(
                "unknown option: {other}; usage: bff-server measure [--count N] [--mode sequential|parallel|both] [--url URL]"
            ),
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!("bff-server {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("USAGE:");
    println!("  bff-server [serve]            run the HTTP server (default)");
    println!("  bff-server measure [OPTIONS]  time sequential vs parallel /api/data fetches");
    println!("  bff-server version            print the version");
    println!("  bff-server help               print this message");
    println!();
    println!("MEASURE OPTIONS:");
    println!("  --count N     number of requests per batch (default {DEFAULT_REQUEST_COUNT})");
    println!("  --mode MODE   sequential | parallel | both (default both)");
    println!("  --url URL     server base URL (default BFF_API_URL)");
    println!();
    println!("ENVIRONMENT:");
    println!("  PORT, ACCESS_TOKEN_SECRET, REFRESH_TOKEN_SECRET, CORS_ORIGIN,");
    println!("  DATA_DELAY_MS, BFF_API_URL, RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_serves() {
        assert_eq!(parse(&[]).unwrap(), Command::Serve);
        assert_eq!(parse(&args(&["serve"])).unwrap(), Command::Serve);
    }

    #[test]
    fn test_measure_defaults() {
        let Command::Measure(measure) = parse(&args(&["measure"])).unwrap() else {
            panic!("expected measure");
        };
        assert_eq!(measure, MeasureArgs::default());
        assert_eq!(measure.count, 30);
    }

    #[test]
    fn test_measure_options() {
        let cmd = parse(&args(&[
            "measure", "--count", "5", "--mode", "parallel", "--url", "http://127.0.0.1:9000",
        ]))
        .unwrap();

        assert_eq!(
            cmd,
            Command::Measure(MeasureArgs {
                count: 5,
                mode: MeasureMode::Parallel,
                url: Some("http://127.0.0.1:9000".into()),
            })
        );
    }

    #[test]
    fn test_measure_rejects_bad_input() {
        assert!(parse(&args(&["measure", "--count", "0"])).is_err());
        assert!(parse(&args(&["measure", "--count"])).is_err());
        assert!(parse(&args(&["measure", "--mode", "random"])).is_err());
        assert!(parse(&args(&["measure", "--verbose"])).is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse(&args(&["deploy"])).is_err());
    }
}
