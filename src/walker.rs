//! # Walker - ファイル探索モジュール
//!
//! ポリシーに従ってルートディレクトリを深さ優先で走査し、
//! スキャン候補ファイルを列挙する。
//! 除外ルールに一致したエントリは配下に降りる前に枝刈りする。

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::policy::AuditPolicy;

/// ポリシーの全ルートからスキャン候補ファイルを集める
pub fn collect_candidates(policy: &AuditPolicy) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in &policy.roots {
        collect_root(root, policy, &mut files);
    }
    files
}

fn collect_root(root: &Path, policy: &AuditPolicy, files: &mut Vec<PathBuf>) {
    if !root.is_dir() {
        // 部分チェックアウトでは任意のルートが欠けうるため、欠落は空の寄与として扱う
        tracing::debug!("Scan root not found, skipping: {}", root.display());
        return;
    }

    // 除外判定はルート配下のエントリに対してのみ行う（ルート自体は明示指定のため常に走査する）
    let walker = WalkDir::new(root).into_iter();
    for entry in walker.filter_entry(|e| e.depth() == 0 || !is_pruned(e.path(), policy)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("Unreadable entry skipped: {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() && policy.allows_extension(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
}

/// 隠しエントリまたは除外ルールに一致したエントリは枝刈りする。
/// ディレクトリシンボリックリンクは辿らないため、循環リンクでループしない。
fn is_pruned(path: &Path, policy: &AuditPolicy) -> bool {
    is_hidden(path) || policy.is_excluded(path)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
