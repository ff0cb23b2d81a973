//! # Matcher - 行単位リテラル検出モジュール
//!
//! ファイル内容を改行で分割し、各行に禁止リテラルが
//! 部分文字列として含まれるかを判定する。
//! 照合は大文字小文字を区別する完全一致の包含判定のみで、正規表現は使わない。

/// 1 件の検出結果（行番号は 1 始まり）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralHit {
    pub literal: String,
    pub line: usize,
}

/// 内容から禁止リテラルの出現行を列挙する。
/// 同一行に同じリテラルが複数回現れても、記録は行ごとに 1 件とする。
pub fn find_literals(content: &str, literals: &[String]) -> Vec<LiteralHit> {
    let mut hits = Vec::new();
    for (i, line) in content.lines().enumerate() {
        for literal in literals {
            if line.contains(literal.as_str()) {
                hits.push(LiteralHit {
                    literal: literal.clone(),
                    line: i + 1,
                });
            }
        }
    }
    hits
}
