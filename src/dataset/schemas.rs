// データセット関連のスキーマ定義

use serde::{Deserialize, Serialize};

// 元データの1問（MMLUの1行）
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    pub choices: Vec<String>,
    // 範囲外の値もフォーマット時にエラーとして扱うため符号付きで受け取る
    pub answer: i64,
}

// datasets-server /rows API応答
#[derive(Clone, Debug, Deserialize)]
pub struct RowsResponse {
    pub rows: Vec<RowEntry>,
    pub num_rows_total: usize,
    #[serde(default)]
    pub partial: bool,
}

// 行データ
#[derive(Clone, Debug, Deserialize)]
pub struct RowEntry {
    pub row_idx: usize,
    pub row: RawQuestion,
}
