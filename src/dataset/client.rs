// Hugging Face datasets-server クライアント

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info, warn};
use reqwest::header;

use super::QuestionSource;
use super::schemas::{RawQuestion, RowEntry, RowsResponse};

// datasets-serverが1回で返せる最大行数
const PAGE_LENGTH: usize = 100;

pub const DEFAULT_ENDPOINT: &str = "https://datasets-server.huggingface.co";

pub struct HuggingFaceClient {
    client: reqwest::Client,
    endpoint: String,
    dataset: String,
    split: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(endpoint: &str, dataset: &str, split: &str, token: Option<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("HTTPクライアントの作成に失敗")?;

        Ok(HuggingFaceClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            dataset: dataset.to_string(),
            split: split.to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn rows_url(&self) -> String {
        format!("{}/rows", self.endpoint)
    }

    async fn fetch_page(&self, subject: &str, offset: usize) -> Result<RowsResponse> {
        let offset = offset.to_string();
        let length = PAGE_LENGTH.to_string();

        let mut request = self.client.get(self.rows_url()).query(&[
            ("dataset", self.dataset.as_str()),
            ("config", subject),
            ("split", self.split.as_str()),
            ("offset", offset.as_str()),
            ("length", length.as_str()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("データセット取得リクエスト失敗: {} - {}", subject, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            bail!(
                "データセット取得エラー: {} ステータス {}, レスポンス: {}",
                subject,
                status,
                error_text
            );
        }

        response
            .json::<RowsResponse>()
            .await
            .with_context(|| format!("データセット応答の解析に失敗: {}", subject))
    }
}

impl QuestionSource for HuggingFaceClient {
    async fn fetch(&self, subject: &str) -> Result<Vec<RawQuestion>> {
        info!(
            "⬇️ データセット取得中: {} ({}/{})",
            self.dataset, subject, self.split
        );

        let mut collector = RowCollector::default();
        while let Some(offset) = collector.next_offset() {
            let page = self.fetch_page(subject, offset).await?;
            debug!(
                "{}: offset {} から {} 行取得 (全 {} 行)",
                subject,
                offset,
                page.rows.len(),
                page.num_rows_total
            );
            if page.partial {
                warn!("⚠️ {} の応答は部分的なデータです", subject);
            }
            collector.push(page);
        }

        Ok(collector.finish())
    }
}

// ページ単位で受け取った行をまとめる
#[derive(Default)]
struct RowCollector {
    rows: Vec<RowEntry>,
    total: Option<usize>,
    exhausted: bool,
}

impl RowCollector {
    // 次に要求すべきoffset。全行取得済みか空ページを受け取ったら None
    fn next_offset(&self) -> Option<usize> {
        if self.exhausted {
            return None;
        }
        match self.total {
            Some(total) if self.rows.len() >= total => None,
            _ => Some(self.rows.len()),
        }
    }

    fn push(&mut self, page: RowsResponse) {
        if page.rows.is_empty() {
            self.exhausted = true;
        }
        self.total = Some(page.num_rows_total);
        self.rows.extend(page.rows);
    }

    // row_idx 順に並べた問題を返す
    fn finish(mut self) -> Vec<RawQuestion> {
        self.rows.sort_by_key(|entry| entry.row_idx);
        self.rows.into_iter().map(|entry| entry.row).collect()
    }
}
