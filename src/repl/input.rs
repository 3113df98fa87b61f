// パス: src/repl/input.rs
// 役割: 対話ループへ 1 行ずつ入力を供給する抽象と標準入力実装
// 意図: ループを端末から切り離し、テストで入力列を差し替えられるようにする
// 関連ファイル: src/repl/cmd.rs, tests/test_support.rs
use std::io::{self, BufRead, Write};

/// 行入力が返す結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    /// 行終端を取り除いた 1 行。
    Line(String),
    Eof,
}

/// プロンプトを提示して 1 行を受け取る入力源。
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult>;
}

/// 標準入力から読み、プロンプトを標準出力へ書く実装。
pub struct StdinSource {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<ReadResult> {
        let mut reader = self.stdin.lock();
        read_line_from(&mut reader, &mut self.stdout, prompt)
    }
}

/// プロンプトを書き出して flush し、`reader` から 1 行読む。
///
/// 行終端（`\n` / `\r\n`）のみ取り除き、それ以外の空白は残す。
pub(crate) fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<ReadResult> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(ReadResult::Eof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(ReadResult::Line(line))
}

#[cfg(test)]
mod tests {
    use super::{read_line_from, ReadResult};
    use std::io::Cursor;

    #[test]
    /// プロンプトが出力され、行終端だけが除去されるか確認する。
    fn strips_only_line_terminator() {
        let mut input = Cursor::new(" q \r\n2\nlast");
        let mut out = Vec::new();
        assert_eq!(
            read_line_from(&mut input, &mut out, "> ").unwrap(),
            ReadResult::Line(" q ".into())
        );
        assert_eq!(
            read_line_from(&mut input, &mut out, "> ").unwrap(),
            ReadResult::Line("2".into())
        );
        // 終端なしの最終行もそのまま 1 行として扱う。
        assert_eq!(
            read_line_from(&mut input, &mut out, "> ").unwrap(),
            ReadResult::Line("last".into())
        );
        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn empty_reader_is_eof() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert_eq!(
            read_line_from(&mut input, &mut out, "prompt: ").unwrap(),
            ReadResult::Eof
        );
        assert_eq!(String::from_utf8(out).unwrap(), "prompt: ");
    }

    #[test]
    /// 空行は EOF ではなく空文字列の行になる。
    fn blank_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        let mut out = Vec::new();
        assert_eq!(
            read_line_from(&mut input, &mut out, "").unwrap(),
            ReadResult::Line(String::new())
        );
    }
}
