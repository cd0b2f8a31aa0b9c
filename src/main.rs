// mmlu-quiz-builder - MMLUの問題から科目別クイズデータを生成するツール

mod config;
mod dataset;
mod quiz;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simple_logger::SimpleLogger;

use crate::config::{BuilderConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_SIZE};
use crate::dataset::HuggingFaceClient;
use crate::dataset::client::DEFAULT_ENDPOINT;
use crate::quiz::{QuizBank, build_quiz_bank, save_quiz_bank};

// コマンドライン引数の定義

#[derive(Parser, Debug)]
#[clap(
    name = "mmlu-quiz-builder",
    about = "MMLUデータセットから科目別のクイズ問題集JSONを生成するツール",
    version = "0.1.0"
)]
struct Args {
    /// 出力先JSONファイル
    #[clap(long, env = "QUIZ_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: String,

    /// 科目あたりの最大問題数
    #[clap(long, env = "QUIZ_SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// 対象科目（カンマ区切り、省略時は既定の20科目）
    #[clap(long, env = "QUIZ_SUBJECTS", value_delimiter = ',')]
    subjects: Vec<String>,

    /// データセット名
    #[clap(long, env = "QUIZ_DATASET", default_value = "cais/mmlu")]
    dataset: String,

    /// データセットのスプリット
    #[clap(long, env = "QUIZ_SPLIT", default_value = "test")]
    split: String,

    /// datasets-server のエンドポイント
    #[clap(long, env = "HF_DATASETS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Hugging Faceのアクセストークン
    #[clap(long, env = "HF_TOKEN")]
    hf_token: Option<String>,

    /// 抽出用の乱数シード（省略時は毎回異なる）
    #[clap(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// 合計問題数を表示しない
    #[clap(long)]
    no_total: bool,
}

impl Args {
    fn builder_config(&self) -> BuilderConfig {
        let mut config = BuilderConfig {
            sample_size: self.sample_size,
            output_path: self.output.clone(),
            print_total: !self.no_total,
            ..BuilderConfig::default()
        };

        if !self.subjects.is_empty() {
            config.subjects = self.subjects.iter().map(|s| s.trim().to_string()).collect();
        }

        config
    }
}

// 統計情報の表示
fn print_statistics(bank: &QuizBank, print_total: bool) {
    println!("\nDataset statistics:");
    for (name, count) in bank.statistics() {
        println!("{}: {} questions", name, count);
    }

    if print_total {
        println!("\nTotal questions: {}", bank.total_questions());
    }
}

// メイン関数
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // .envファイルを読み込み
    dotenv().ok();

    // ロガー初期化
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    // コマンドライン引数を解析
    let args = Args::parse();
    let config = args.builder_config();
    config.validate()?;

    let client = HuggingFaceClient::new(
        &args.endpoint,
        &args.dataset,
        &args.split,
        args.hf_token.clone(),
    )?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("🧠 クイズデータ生成開始");
    info!("対象科目数: {}", config.subjects.len());
    info!("科目あたりの最大問題数: {}", config.sample_size);

    // 全科目が揃ってから書き出す
    let bank = build_quiz_bank(&config, &client, &mut rng).await?;
    save_quiz_bank(&bank, &config.output_path).await?;
    info!("💾 保存完了: {}", config.output_path);

    print_statistics(&bank, config.print_total);

    Ok(())
}
