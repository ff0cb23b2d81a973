//! # Audit Tests
//!
//! `audit.rs` のツリーレベルテスト。
//! - 行番号つき違反検出
//! - 除外ルール・拡張子フィルタ
//! - 再実行時の冪等性とピン留めチェック

#[cfg(test)]
mod tests {
    use crate::audit;
    use crate::policy::{AuditPolicy, ExcludePattern};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn test_policy(root: &Path) -> AuditPolicy {
        AuditPolicy {
            roots: vec![root.to_path_buf()],
            forbidden_literals: vec![
                "https://api.github.com".to_string(),
                "https://fonts.googleapis.com".to_string(),
            ],
            exclude_patterns: vec![ExcludePattern::Contains("node_modules".to_string())],
            allowed_extensions: vec![".ts".to_string(), ".rs".to_string(), ".html".to_string()],
        }
    }

    fn write(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_violation_reports_exact_line() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "a.ts",
            "const a = 1;\nconst b = 2;\nconst x = \"https://api.github.com/releases\";\n",
        );

        let report = audit::scan(&test_policy(root));

        assert_eq!(report.violations.len(), 1);
        let v = &report.violations[0];
        assert_eq!(v.file, root.join("a.ts"));
        assert_eq!(v.literal, "https://api.github.com");
        assert_eq!(v.line, 3);
    }

    #[test]
    fn test_violations_within_a_file_are_in_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "index.html",
            "<link href=\"https://fonts.googleapis.com/css\">\n<!-- ok -->\n<script src=\"https://api.github.com\"></script>\n",
        );

        let report = audit::scan(&test_policy(root));

        let lines: Vec<usize> = report.violations.iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![1, 3]);
        assert_eq!(report.violations[0].literal, "https://fonts.googleapis.com");
        assert_eq!(report.violations[1].literal, "https://api.github.com");
    }

    #[test]
    fn test_excluded_file_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "node_modules/dep/index.ts",
            "fetch(\"https://api.github.com\");\n",
        );

        let report = audit::scan(&test_policy(root));

        assert!(report.is_clean(), "excluded paths must not be scanned");
    }

    #[test]
    fn test_disallowed_extension_is_not_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "notes.md", "see https://api.github.com\n");

        let report = audit::scan(&test_policy(root));

        assert!(report.is_clean(), "only allowlisted extensions are scanned");
    }

    #[test]
    fn test_clean_tree_produces_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "src/lib.rs", "pub fn no_network() {}\n");
        write(root, "ui/app.ts", "const local = \"/api/share\";\n");

        let report = audit::scan(&test_policy(root));

        assert!(report.is_clean());
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "a.ts", "x\nhttps://api.github.com\n");
        write(root, "b.ts", "https://fonts.googleapis.com\n");

        let policy = test_policy(root);
        let first = audit::scan(&policy);
        let second = audit::scan(&policy);

        // 変更のないツリーでは要素も順序も一致する
        assert_eq!(first, second);
        assert_eq!(first.violations.len(), 2);
    }

    #[test]
    fn test_unreadable_file_does_not_mask_violations() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "a.ts", "https://api.github.com\n");
        // UTF-8 として読めないファイルはスキップされる
        fs::write(root.join("broken.ts"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let report = audit::scan(&test_policy(root));

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].file, root.join("a.ts"));
    }

    #[test]
    fn test_check_file_pins_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let pinned = write(root, "hooks/update_check.ts", "// no endpoints\n");
        write(root, "other.ts", "https://api.github.com\n");

        let policy = test_policy(root);
        let violations = audit::check_file(&pinned, &policy);

        assert!(violations.is_empty(), "pinned file itself is clean");

        let dirty = audit::check_file(&root.join("other.ts"), &policy);
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].file, root.join("other.ts"));
    }

    #[test]
    fn test_check_file_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let policy = test_policy(dir.path());

        assert!(audit::check_file(&dir.path().join("gone.ts"), &policy).is_empty());
    }

    #[test]
    fn test_check_content_is_pure() {
        let dir = tempfile::tempdir().unwrap();
        let policy = test_policy(dir.path());
        let label = Path::new("ui/hooks/update_check.ts");

        assert!(audit::check_content(label, "const local = true;", &policy).is_empty());

        let violations =
            audit::check_content(label, "const url = \"https://api.github.com\";", &policy);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].file, PathBuf::from(label));
        assert_eq!(violations[0].line, 1);
    }
}
