// パス: src/repl/mod.rs
// 役割: REPL module facade and re-exports
// 意図: Expose interactive entry points without leaking internals
// 関連ファイル: src/repl/cmd.rs, src/repl/input.rs, src/bin/calc.rs
//! 電卓の対話環境を構成するモジュール群をまとめたファサード。
//!
//! - `cmd`: メインループ、選択肢の解釈、状態遷移
//! - `input`: 行入力の抽象と標準入力実装
//! - `printer`: 利用者向けの表示ロジック

pub mod cmd;
mod input;
mod printer;

pub use cmd::{parse_command, run_repl, run_repl_with, Command, ReplOptions, State};
pub use input::{LineSource, ReadResult, StdinSource};
pub use printer::{INVALID_CHOICE_MSG, INVALID_INPUT_MSG};
