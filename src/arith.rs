// パス: src/arith.rs
// 役割: 四則演算のうち加算・減算・乗算の純粋関数と演算表を定義する
// 意図: メニュー表示とコマンド解析が同じ演算一覧を共有し、食い違いを防ぐ
// 関連ファイル: src/repl/cmd.rs, src/repl/printer.rs
//! 算術演算モジュール
//!
//! - 3 つの演算はいずれも `f64` をそのまま計算する純粋関数。
//! - オーバーフローは IEEE-754 に従い無限大になり、エラーにはならない。
//! - `OPERATIONS` が唯一の演算一覧で、メニューもキー解析もここを参照する。

/// `a + b` を返す。
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b` を返す。
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b` を返す。
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// 電卓が提供する演算の種別。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
}

/// メニュー順に並べた演算一覧。
pub const OPERATIONS: &[OpKind] = &[OpKind::Add, OpKind::Subtract, OpKind::Multiply];

impl OpKind {
    /// メニュー選択キー（`"1"` など）から演算を引く。
    pub fn from_key(key: &str) -> Option<OpKind> {
        OPERATIONS.iter().copied().find(|op| op.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            OpKind::Add => "1",
            OpKind::Subtract => "2",
            OpKind::Multiply => "3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OpKind::Add => "Add",
            OpKind::Subtract => "Subtract",
            OpKind::Multiply => "Multiply",
        }
    }

    /// 結果行に出す演算子記号。
    pub fn symbol(self) -> char {
        match self {
            OpKind::Add => '+',
            OpKind::Subtract => '-',
            OpKind::Multiply => '*',
        }
    }

    /// 対応する純粋関数へディスパッチする。
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            OpKind::Add => add(a, b),
            OpKind::Subtract => subtract(a, b),
            OpKind::Multiply => multiply(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{add, multiply, subtract, OpKind, OPERATIONS};

    #[test]
    /// 各演算がネイティブの浮動小数点演算と一致するか確認する。
    fn ops_match_native_arithmetic() {
        let pairs = [
            (3.0, 4.0),
            (10.0, 4.0),
            (-2.5, 0.5),
            (0.1, 0.2),
            (1e300, 1e10),
            (-0.0, 0.0),
        ];
        for (a, b) in pairs {
            assert_eq!(add(a, b), a + b);
            assert_eq!(subtract(a, b), a - b);
            assert_eq!(multiply(a, b), a * b);
        }
    }

    #[test]
    /// 加算・乗算は可換、減算は非可換であることを確認する。
    fn commutativity() {
        let (a, b) = (7.25, -3.5);
        assert_eq!(add(a, b), add(b, a));
        assert_eq!(multiply(a, b), multiply(b, a));
        assert_ne!(subtract(a, b), subtract(b, a));
    }

    #[test]
    /// オーバーフローは無限大になりエラーにならない。
    fn overflow_produces_infinity() {
        assert_eq!(multiply(f64::MAX, 2.0), f64::INFINITY);
        assert_eq!(add(f64::MAX, f64::MAX), f64::INFINITY);
        assert_eq!(subtract(-f64::MAX, f64::MAX), f64::NEG_INFINITY);
    }

    #[test]
    /// キー・ラベル・記号の対応表が一貫しているか検証する。
    fn op_table_is_consistent() {
        let keys: Vec<&str> = OPERATIONS.iter().map(|op| op.key()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
        for op in OPERATIONS {
            assert_eq!(OpKind::from_key(op.key()), Some(*op));
        }
        assert_eq!(OpKind::Add.symbol(), '+');
        assert_eq!(OpKind::Subtract.symbol(), '-');
        assert_eq!(OpKind::Multiply.symbol(), '*');
        assert_eq!(OpKind::Multiply.label(), "Multiply");
        assert_eq!(OpKind::from_key("4"), None);
        assert_eq!(OpKind::from_key(" 1"), None);
    }

    #[test]
    fn apply_dispatches_to_pure_functions() {
        assert_eq!(OpKind::Add.apply(3.0, 4.0), 7.0);
        assert_eq!(OpKind::Subtract.apply(10.0, 4.0), 6.0);
        assert_eq!(OpKind::Multiply.apply(2.0, 5.0), 10.0);
    }
}
