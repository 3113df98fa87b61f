// パス: src/bin/calc.rs
// 役割: Binary entrypoint that launches the calculator REPL
// 意図: Parse CLI flags, install logging, and run the loop on stdin/stdout
// 関連ファイル: src/repl/mod.rs, src/lib.rs, src/repl/cmd.rs
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use calc::repl::{run_repl, ReplOptions};

/// 2 つの数値を足す・引く・掛ける対話型電卓。
#[derive(Debug, Parser)]
#[command(name = "calc-repl", version, about)]
struct Cli {
    /// ログを詳しくする（-v: info, -vv: debug, -vvv: trace）。RUST_LOG が優先される。
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// 起動時のメニュー表示を省く。
    #[arg(long)]
    no_menu: bool,
}

impl Cli {
    fn options(&self) -> ReplOptions {
        ReplOptions {
            show_menu: !self.no_menu,
        }
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 標準エラーへ出す購読者を設定する。標準出力は電卓の対話専用。
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_repl(&cli.options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "calculator session aborted");
            eprintln!("calc-repl: {}", err);
            ExitCode::FAILURE
        }
    }
}
