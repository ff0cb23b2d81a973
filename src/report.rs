//! # Report - 違反レポートモジュール
//!
//! 確定した違反を走査順に保持し、人間向けの失敗サマリを描画する。

use std::path::PathBuf;

/// 禁止リテラルの確定した出現 1 件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 検出元ファイル
    pub file: PathBuf,
    /// 検出された禁止リテラル
    pub literal: String,
    /// 1 始まりの行番号
    pub line: usize,
}

/// スキャン 1 回分の結果。違反ゼロが唯一の合格状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// ファイル走査順、ファイル内では行順の違反リスト
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// 違反が 1 件もないか
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// 失敗サマリを描画する。件数行に続けて 1 違反 1 行で出力する
    pub fn render(&self) -> String {
        let mut out = format!(
            "Found {} forbidden endpoint reference(s):",
            self.violations.len()
        );
        for v in &self.violations {
            out.push_str(&format!("\n  {}:{} - {}", v.file.display(), v.line, v.literal));
        }
        out
    }
}
