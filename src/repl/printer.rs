// パス: src/repl/printer.rs
// 役割: メニュー・結果行・案内メッセージの描画ヘルパ
// 意図: 利用者に見える文言と書式を一箇所にまとめる
// 関連ファイル: src/repl/cmd.rs, src/arith.rs, src/number.rs
//! 電卓で用いる表示文言と出力処理を集約したモジュール。

use std::io::{self, Write};

use crate::arith::{OpKind, OPERATIONS};
use crate::number::format_number;

pub(crate) const TITLE: &str = "Simple Calculator";
pub(crate) const CHOICE_PROMPT: &str = "\nEnter choice (1/2/3) or 'q' to quit: ";
pub(crate) const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub(crate) const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

/// オペランドが数値でなかったときの案内。
pub const INVALID_INPUT_MSG: &str = "Invalid input! Please enter valid numbers.";
/// メニューにない選択肢が入力されたときの案内。
pub const INVALID_CHOICE_MSG: &str = "Invalid choice! Please enter 1, 2, or 3.";

/// タイトルと演算一覧を書き出す。
pub(crate) fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    for op in OPERATIONS {
        writeln!(out, "{}. {}", op.key(), op.label())?;
    }
    Ok(())
}

/// `"<num1> <op> <num2> = <result>"` 形式の結果行を組み立てる。
pub(crate) fn result_line(op: OpKind, a: f64, b: f64, result: f64) -> String {
    format!(
        "{} {} {} = {}",
        format_number(a),
        op.symbol(),
        format_number(b),
        format_number(result)
    )
}

pub(crate) fn write_result<W: Write>(
    out: &mut W,
    op: OpKind,
    a: f64,
    b: f64,
    result: f64,
) -> io::Result<()> {
    writeln!(out, "{}", result_line(op, a, b, result))
}

pub(crate) fn write_invalid_input<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", INVALID_INPUT_MSG)
}

pub(crate) fn write_invalid_choice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", INVALID_CHOICE_MSG)
}
