use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use palisade::audit;
use palisade::policy::AuditPolicy;

/// Palisade - 🧱 外部エンドポイント監査ツールキット
#[derive(Parser)]
#[command(name = "palisade")]
#[command(version, about = "🧱 Palisade Privacy Toolkit - 外部エンドポイント監査", long_about = None)]
struct Cli {
    /// 監査ポリシーファイル (JSON)。未指定時は内蔵ポリシーを使用する
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// ソースツリーを走査して禁止エンドポイントを検出する
    Scan,

    /// 指定した 1 ファイルをピン留めチェックする
    Check {
        /// チェック対象のファイル
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let policy = match &cli.policy {
        Some(path) => AuditPolicy::load(path)?,
        None => AuditPolicy::default(),
    };

    match cli.command {
        // サブコマンド未指定時はスキャンを実行する
        None | Some(Commands::Scan) => {
            audit::run_audit(&policy)?;
        }
        Some(Commands::Check { file }) => {
            audit::run_check(&file, &policy)?;
        }
    }

    Ok(())
}
