//! # Update Check - 更新プレビューモジュール
//!
//! 更新チェックは外部ネットワークへの問い合わせを行わない。
//! `?preview-update=X.Y.Z` クエリパラメータによる
//! プレビュー表示（UI テスト用）のみをサポートする。

use std::collections::HashMap;
use url::Url;

/// プレビュー表示を起動するクエリパラメータ名
pub const PREVIEW_PARAM: &str = "preview-update";

/// リリースページ URL のテンプレート。クリーンなバージョン番号を連結する
const RELEASE_URL_BASE: &str = "https://github.com/for4xex/palisade/releases/tag/v";

/// マイルストーンリリースの目玉機能
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub title: String,
    pub description: String,
}

/// 更新通知レコード。ローカルでのみ合成され、ネットワーク応答からは決して作られない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub current_version: String,
    pub latest_version: String,
    pub update_available: bool,
    pub release_url: String,
    pub feature_highlight: Option<FeatureHighlight>,
}

/// バージョン → 目玉機能の対応表（呼び出し側から注入する設定）
#[derive(Debug, Clone, Default)]
pub struct HighlightCatalog {
    entries: HashMap<String, FeatureHighlight>,
}

impl HighlightCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// クレートに同梱されるマイルストーン告知のカタログ
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "0.5.0",
            FeatureHighlight {
                title: "Pinned file checks are here!".to_string(),
                description: "Pin known-sensitive files with 'palisade check <file>'.".to_string(),
            },
        );
        catalog
    }

    /// バージョンに対する目玉機能を登録する
    pub fn insert(&mut self, version: &str, highlight: FeatureHighlight) {
        self.entries.insert(version.to_string(), highlight);
    }

    /// バージョン文字列の完全一致で目玉機能を引く
    pub fn get(&self, version: &str) -> Option<&FeatureHighlight> {
        self.entries.get(version)
    }
}

/// ビルド時に埋め込まれた現在バージョン
pub fn current_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// ページ URL の `preview-update` パラメータから更新通知レコードを合成する。
/// パラメータが無い、または空の場合は何も生成しない。
pub fn preview_update(
    page_url: &str,
    current_version: &str,
    catalog: &HighlightCatalog,
) -> Option<UpdateInfo> {
    let url = Url::parse(page_url).ok()?;
    let preview = url
        .query_pairs()
        .find(|(key, _)| key == PREVIEW_PARAM)
        .map(|(_, value)| value.into_owned())?;

    if preview.is_empty() {
        return None;
    }

    // 先頭の 'v' は 1 つだけ取り除き、"v0.5.0" と "0.5.0" を同一視する
    let clean = preview.strip_prefix('v').unwrap_or(&preview).to_string();

    Some(UpdateInfo {
        current_version: current_version.to_string(),
        latest_version: preview,
        update_available: true,
        release_url: format!("{}{}", RELEASE_URL_BASE, clean),
        feature_highlight: catalog.get(&clean).cloned(),
    })
}
