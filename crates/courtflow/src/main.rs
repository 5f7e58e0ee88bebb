mod commands;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use courtflow_core::{Catalog, MockupLibrary};

#[derive(Parser)]
#[command(name = "court")]
#[command(about = "アカデミーのユーザーフローカタログを閲覧する", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Flowの一覧を表示
    List {
        /// ロールで絞り込む（例: coach, "Head Coach", CSM）
        #[arg(short, long)]
        role: Option<String>,
    },
    /// Flowの詳細を表示
    Show {
        /// Flowのスラッグ
        slug: String,
        /// 最初に開くステップ番号（1始まり、範囲外はクランプ）
        #[arg(short, long)]
        step: Option<usize>,
        /// 表示モードの上書き (complete / step)
        #[arg(short, long)]
        mode: Option<String>,
        /// TUIを起動せずテキストで出力
        #[arg(long)]
        no_tui: bool,
    },
    /// ロールレジストリを表示
    Roles,
    /// 埋め込みFlow定義を検証
    Validate,
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Versionコマンドはカタログ不要
    if matches!(cli.command, Some(Commands::Version)) {
        println!("courtflow {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // TUIは代替スクリーンを使うため、ログはファイルに出力
    let interactive = match &cli.command {
        None => true,
        Some(Commands::Show { no_tui, .. }) => !no_tui,
        _ => false,
    };
    if interactive {
        use std::fs::OpenOptions;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/courtflow-tui.log")
            .ok();

        if let Some(file) = log_file {
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_ansi(false)
                .init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    // 埋め込み定義はバイナリと一緒に出荷されるので、ここでの失敗は
    // ビルドデータの欠陥。唯一の致命的エラーパス。
    let catalog = Catalog::load_embedded().context("埋め込みFlow定義のロードに失敗しました")?;
    let library =
        MockupLibrary::embedded().context("モックアップテンプレートの登録に失敗しました")?;

    match cli.command {
        None => tui::run_dashboard(&catalog, &library)?,
        Some(Commands::List { role }) => commands::list::handle(&catalog, role.as_deref()),
        Some(Commands::Show {
            slug,
            step,
            mode,
            no_tui,
        }) => commands::show::handle(&catalog, &library, &slug, step, mode.as_deref(), no_tui)?,
        Some(Commands::Roles) => commands::roles::handle(),
        Some(Commands::Validate) => commands::validate::handle(&catalog),
        Some(Commands::Version) => {
            unreachable!("Version is handled before catalog loading");
        }
    }

    Ok(())
}
