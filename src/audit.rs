//! # Audit - 外部エンドポイント監査モジュール
//!
//! Walker が列挙したファイルを Matcher にかけ、違反を集約する。
//! 読めないファイルはスキャン全体を止めずにスキップする。

use anyhow::{bail, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::matcher;
use crate::policy::AuditPolicy;
use crate::report::{AuditReport, Violation};
use crate::walker;

/// ポリシーに従ってソースツリー全体をスキャンする
pub fn scan(policy: &AuditPolicy) -> AuditReport {
    let mut report = AuditReport::default();

    for file in walker::collect_candidates(policy) {
        match fs::read_to_string(&file) {
            Ok(content) => {
                report
                    .violations
                    .extend(content_violations(&file, &content, policy));
            }
            Err(err) => {
                // バイナリや権限エラー。1 ファイルの失敗で他の違反を覆い隠さない
                tracing::warn!("Skipping unreadable file {}: {}", file.display(), err);
            }
        }
    }

    report
}

/// 単一ファイルのピン留めチェック。Walker を介さず Matcher のみを適用する
pub fn check_file(path: &Path, policy: &AuditPolicy) -> Vec<Violation> {
    match fs::read_to_string(path) {
        Ok(content) => content_violations(path, &content, policy),
        Err(err) => {
            tracing::warn!("Skipping unreadable file {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

/// 読み込み済みの内容に対するピン留めチェック（純粋関数版）
pub fn check_content(path: &Path, content: &str, policy: &AuditPolicy) -> Vec<Violation> {
    content_violations(path, content, policy)
}

fn content_violations(path: &Path, content: &str, policy: &AuditPolicy) -> Vec<Violation> {
    matcher::find_literals(content, &policy.forbidden_literals)
        .into_iter()
        .map(|hit| Violation {
            file: path.to_path_buf(),
            literal: hit.literal,
            line: hit.line,
        })
        .collect()
}

/// CLI 向けのスキャン実行。違反があればエラーで終了する
pub fn run_audit(policy: &AuditPolicy) -> Result<()> {
    println!("{}", "=== PALISADE PRIVACY AUDIT START ===".bold().cyan());

    for root in &policy.roots {
        println!("  scanning {}", root.display());
    }

    let report = scan(policy);

    if !report.is_clean() {
        println!("{}", "[!] Forbidden endpoint references detected".red().bold());
        println!("{}", report.render());
        bail!(
            "External endpoint audit failed with {} violation(s)",
            report.violations.len()
        );
    }

    println!("{}", "[+] No forbidden endpoint references found.".green());
    println!("{}", "=== AUDIT FINISHED ===".bold().cyan());
    Ok(())
}

/// 単一ファイルのピン留めチェックを CLI 向けに実行する
pub fn run_check(path: &Path, policy: &AuditPolicy) -> Result<()> {
    let violations = check_file(path, policy);

    if !violations.is_empty() {
        let report = AuditReport { violations };
        println!("{}", report.render());
        bail!("Pinned file check failed: {}", path.display());
    }

    println!("{} {} is clean", "✓".green().bold(), path.display());
    Ok(())
}
