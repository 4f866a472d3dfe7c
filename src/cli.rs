use clap::{Parser, Subcommand};
use crate::render::OutputFormat;

#[derive(Parser)]
#[command(name = "admission-calc")]
#[command(about = "Admission probability calculator client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サーバーURL（環境変数 ADMISSION_CALC_URL / 設定ファイルより優先）
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スコアから合格確率を計算
    Calculate {
        /// スコア (0-700)
        #[arg(short, long, allow_hyphen_values = true)]
        score: String,

        /// グループ
        #[arg(short, long)]
        group: Option<String>,

        /// セクター（省略時は設定値、既定 "All"）
        #[arg(long)]
        sector: Option<String>,

        /// 上位N件（省略時は設定値）
        #[arg(short = 'n', long)]
        top_n: Option<String>,

        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 対話式で入力して計算
    Form {
        /// 出力形式 (table/json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// 設定を表示/編集
    Config {
        /// サーバーURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// topN の既定値を設定
        #[arg(long)]
        set_top_n: Option<i64>,

        /// セクターの既定値を設定
        #[arg(long)]
        set_sector: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
