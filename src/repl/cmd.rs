// パス: src/repl/cmd.rs
// 役割: 電卓の対話ループ、選択肢の解釈、状態遷移
// 意図: 入力源と出力先を注入して、端末なしでもループ全体を駆動できるようにする
// 関連ファイル: src/repl/input.rs, src/repl/printer.rs, src/arith.rs, src/number.rs
//! 電卓 REPL におけるコマンド処理と状態遷移を担当するモジュール。
//! 利用者の選択を `Command` に解釈し、オペランドを読み取って演算結果を表示する。

use std::io::{self, Write};

use tracing::{debug, info};

use crate::arith::OpKind;
use crate::errors::{OperandError, ReplResult};
use crate::number::parse_operand;

use super::input::{LineSource, ReadResult, StdinSource};
use super::printer::{
    render_menu, write_invalid_choice, write_invalid_input, write_result, CHOICE_PROMPT,
    FIRST_OPERAND_PROMPT, SECOND_OPERAND_PROMPT,
};

/// 対話セッションの実行時設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplOptions {
    /// 起動時にメニューを表示するか。
    pub show_menu: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self { show_menu: true }
    }
}

/// 標準入出力で電卓セッションを開始し、`q` か入力終端まで処理し続ける。
///
/// # Examples
/// ```no_run
/// # fn main() -> Result<(), calc::errors::ReplError> {
/// calc::repl::run_repl(&calc::repl::ReplOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn run_repl(options: &ReplOptions) -> ReplResult<()> {
    let mut source = StdinSource::new();
    let mut stdout = io::stdout();
    run_repl_with(&mut source, &mut stdout, options)
}

/// 任意の入力源と出力先で電卓ループを駆動する。
///
/// 不正な選択や数値でないオペランドはメッセージを出して続行する。
/// 返るエラーは入出力そのものの失敗だけ。
///
/// `out` に書かれるのはメニュー・結果行・案内メッセージのみ。プロンプトの表示は
/// `source` 側の責務で、`StdinSource` は標準出力へ直接書く。`out` に標準出力以外を
/// 渡す場合、プロンプトも同じ先へ出したいなら `LineSource` 側で合わせること。
pub fn run_repl_with<S, W>(source: &mut S, out: &mut W, options: &ReplOptions) -> ReplResult<()>
where
    S: LineSource,
    W: Write,
{
    info!("calculator session started");
    if options.show_menu {
        render_menu(out)?;
    }

    let mut state = State::Prompting;
    while state != State::Terminated {
        let next = step(state, source, out)?;
        debug!(from = ?state, to = ?next, "state transition");
        state = next;
    }

    out.flush()?;
    info!("calculator session ended");
    Ok(())
}

/// ループの状態。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// メニュー選択を待っている。
    Prompting,
    /// 選択済みの演算に対するオペランド 2 つを待っている。
    AwaitingOperands(OpKind),
    Terminated,
}

/// 1 回分の入力を処理し、次の状態を返す。
fn step<S, W>(state: State, source: &mut S, out: &mut W) -> ReplResult<State>
where
    S: LineSource,
    W: Write,
{
    match state {
        State::Prompting => {
            let ReadResult::Line(line) = source.read_line(CHOICE_PROMPT)? else {
                return Ok(State::Terminated);
            };
            let cmd = parse_command(&line);
            debug!(?cmd, "parsed command");
            match cmd {
                Command::Quit => Ok(State::Terminated),
                Command::Operation(op) => Ok(State::AwaitingOperands(op)),
                Command::Invalid(_) => {
                    write_invalid_choice(out)?;
                    Ok(State::Prompting)
                }
            }
        }
        State::AwaitingOperands(op) => {
            // 2 行とも読んでから解釈する。1 つ目が不正でも 2 つ目の行は消費される。
            let ReadResult::Line(first) = source.read_line(FIRST_OPERAND_PROMPT)? else {
                return Ok(State::Terminated);
            };
            let ReadResult::Line(second) = source.read_line(SECOND_OPERAND_PROMPT)? else {
                return Ok(State::Terminated);
            };
            match parse_operands(&first, &second) {
                Ok((a, b)) => {
                    let result = op.apply(a, b);
                    debug!(?op, a, b, result, "computed");
                    write_result(out, op, a, b, result)?;
                }
                Err(err) => {
                    debug!(%err, "operand rejected");
                    write_invalid_input(out)?;
                }
            }
            Ok(State::Prompting)
        }
        State::Terminated => Ok(State::Terminated),
    }
}

fn parse_operands(first: &str, second: &str) -> Result<(f64, f64), OperandError> {
    Ok((parse_operand(first)?, parse_operand(second)?))
}

/// メニュー入力を解釈した結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q` でセッションを終了する。
    Quit,
    /// `1` / `2` / `3` で演算を選ぶ。
    Operation(OpKind),
    /// 上記以外の入力（そのまま保持する）。
    Invalid(String),
}

/// 入力行を `Command` に解析する。
///
/// 前後の空白は取り除かない。`" q"` や `"1 "` は `Invalid` になる。
pub fn parse_command(input: &str) -> Command {
    if input == "q" {
        return Command::Quit;
    }
    match OpKind::from_key(input) {
        Some(op) => Command::Operation(op),
        None => Command::Invalid(input.to_string()),
    }
}
