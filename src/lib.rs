//! # Palisade - Privacy Toolkit
//!
//! プロジェクトのソースツリーが外部ネットワークのエンドポイントを
//! 参照していないことを検査するツールキット。
//!
//! - `policy`: 監査ポリシー（対象ルート・禁止リテラル・除外ルール）
//! - `walker`: スキャン候補ファイルの再帰探索
//! - `matcher`: 行単位の禁止リテラル検出
//! - `report`: 違反の集約とサマリ描画
//! - `audit`: スキャン全体のオーケストレーション
//! - `update_check`: フェッチを行わない更新プレビュー

pub mod audit;
pub mod matcher;
pub mod policy;
pub mod report;
pub mod update_check;
pub mod walker;

#[cfg(test)]
mod audit_tests;
