//! # Policy - 監査ポリシーモジュール
//!
//! スキャン対象ルート・禁止リテラル・除外ルール・対象拡張子を
//! 1回のスキャンの間、不変の値として保持する。
//! 既定のポリシーテーブルを内蔵し、JSON ファイルからの上書きにも対応する。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 本番コードに現れてはならない外部エンドポイント
const FORBIDDEN_ENDPOINTS: &[&str] = &[
    "https://api.github.com",
    "https://fonts.googleapis.com",
    "https://fonts.gstatic.com",
    "https://cdnjs.cloudflare.com",
];

/// 既定のスキャン対象ルート
const DEFAULT_ROOTS: &[&str] = &["src", "apps", "libs"];

/// 既定のスキャン対象拡張子（先頭のドット込み、大文字小文字を区別）
const DEFAULT_EXTENSIONS: &[&str] = &[".rs", ".ts", ".tsx", ".js", ".jsx", ".html", ".css"];

/// パス除外ルール。パス文字列全体に対する構造的な述語として表現する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcludePattern {
    /// パス文字列が部分文字列を含む
    Contains(String),
    /// パス文字列が接頭辞で始まる
    Prefix(String),
    /// パス文字列が接尾辞で終わる
    Suffix(String),
}

impl ExcludePattern {
    /// パスがこの除外ルールに一致するか判定する
    pub fn matches(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        match self {
            Self::Contains(needle) => text.contains(needle.as_str()),
            Self::Prefix(prefix) => text.starts_with(prefix.as_str()),
            Self::Suffix(suffix) => text.ends_with(suffix.as_str()),
        }
    }
}

/// 監査ポリシー。スキャン 1 回ごとに生成され、以後変更されない
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditPolicy {
    /// スキャン対象のルートディレクトリ（記載順に走査する）
    pub roots: Vec<PathBuf>,
    /// 検出対象の禁止リテラル（記載順に照合する）
    pub forbidden_literals: Vec<String>,
    /// 除外ルール
    pub exclude_patterns: Vec<ExcludePattern>,
    /// スキャン対象の拡張子
    pub allowed_extensions: Vec<String>,
}

impl Default for AuditPolicy {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            forbidden_literals: FORBIDDEN_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            exclude_patterns: vec![
                ExcludePattern::Contains("node_modules".to_string()),
                ExcludePattern::Suffix("/target".to_string()),
                ExcludePattern::Suffix("/dist".to_string()),
                ExcludePattern::Suffix(".test.ts".to_string()),
                ExcludePattern::Suffix("_tests.rs".to_string()),
            ],
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AuditPolicy {
    /// JSON ポリシーファイルを読み込む。省略されたフィールドは既定値になる
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse policy file: {}", path.display()))
    }

    /// パスがいずれかの除外ルールに一致するか
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches(path))
    }

    /// パスの拡張子がスキャン対象か
    pub fn allows_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.strip_prefix('.') == Some(ext))
            })
            .unwrap_or(false)
    }
}
