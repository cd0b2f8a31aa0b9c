// データセットモジュール - 問題データの取得元をまとめたモジュール

pub mod client;
pub mod schemas;

use std::future::Future;

use anyhow::Result;

pub use client::HuggingFaceClient;
pub use schemas::RawQuestion;

/// 科目ごとの問題データ取得元
///
/// 返す問題は元データの並び順を保つこと（IDの連番がこの順序に依存する）。
pub trait QuestionSource {
    fn fetch(&self, subject: &str) -> impl Future<Output = Result<Vec<RawQuestion>>> + Send;
}
