// パス: src/number.rs
// 役割: オペランド文字列の数値変換と計算結果の文字列化を担う
// 意図: 入力の解釈と表示形式を一箇所にまとめ、ループ側を分岐だけに保つ
// 関連ファイル: src/errors.rs, src/repl/cmd.rs, src/repl/printer.rs
//! 数値の入出力ユーティリティ

use crate::errors::OperandError;

/// オペランド文字列を `f64` へ変換する。
///
/// 前後の空白は無視する。`inf` / `infinity` / `nan`（大文字小文字を問わない）と
/// 指数表記も受け付ける。
///
/// # Examples
/// ```
/// use calc::number::parse_operand;
/// assert_eq!(parse_operand(" 3 ").unwrap(), 3.0);
/// assert!(parse_operand("abc").is_err());
/// ```
pub fn parse_operand(text: &str) -> Result<f64, OperandError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| OperandError::new(text))
}

/// 数値を表示用の文字列へ変換する。
///
/// # 仕様
/// - 整数値でも小数点以下を残す（`3.0`）。
/// - それ以外は往復可能な最短桁（`0.1`）。
/// - 絶対値が `1e16` 以上、または `1e-4` 未満（0 を除く）は指数表記で、
///   指数には符号と 2 桁以上を付ける（`1e+16`, `1.5e-05`）。
/// - 無限大は `inf` / `-inf`、NaN は `nan`。
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // Debug 表記は指数表記へ切り替わる閾値が上記と一致する。
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}
