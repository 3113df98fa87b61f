// パス: src/errors.rs
// 役割: 電卓全体で使うエラー型を定義する
// 意図: 回復可能な入力エラーとループを止める I/O エラーを型で分ける
// 関連ファイル: src/number.rs, src/repl/cmd.rs, src/bin/calc.rs
//! エラー型の定義（共通フォーマット: \[CODE\] メッセージ）。

use std::io;

use thiserror::Error;

/// オペランド文字列を数値へ変換できなかったことを表す。
///
/// ループ内で捕捉され、利用者向けの定型メッセージに置き換えられる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[CALC001] not a number: {text:?}")]
pub struct OperandError {
    pub text: String,
}

impl OperandError {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 対話ループを継続できない失敗。
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("[CALC900] I/O error: {0}")]
    Io(#[from] io::Error),
}

/// 対話ループの結果型。
pub type ReplResult<T> = Result<T, ReplError>;
