// パス: src/lib.rs
// 役割: Crate root wiring modules and exports
// 意図: Expose minimal API surface for the calculator components
// 関連ファイル: src/arith.rs, src/repl/mod.rs, src/errors.rs
//! 対話型電卓 (Rust) ルートモジュール
//!
//! 目的:
//! - 2 つの数値に対する加算・減算・乗算を対話的に行う。
//! - 入出力はループへ注入し、端末なしでも全体をテストできるようにする。
//!
//! 方針:
//! - コメント/ドキュメントは日本語、識別子と利用者向け出力は英語。
//! - ログは `tracing` で出し、購読者の設定はバイナリ側に任せる。

pub mod arith;
pub mod errors;
pub mod number;
pub mod repl;

pub use crate::arith::{add, multiply, subtract, OpKind, OPERATIONS};
pub use crate::errors::*;
