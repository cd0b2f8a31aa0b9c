// 出力するクイズデータのスキーマ定義

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 選択肢
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AnswerOption {
    /// 選択肢ID ("A"〜"D")
    pub id: String,
    /// 選択肢テキスト
    pub text: String,
}

/// 整形済みの問題
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedQuestion {
    /// 問題ID (`{科目}_{元データでの連番}`)
    pub id: String,
    /// 問題文
    pub text: String,
    /// 選択肢（常に4つ）
    pub options: Vec<AnswerOption>,
    /// 正解の選択肢ID
    pub correct_answer: String,
}

/// 科目ごとのエントリ
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SubjectEntry {
    /// 表示名
    pub name: String,
    /// 抽出された問題
    pub questions: Vec<FormattedQuestion>,
}

/// クイズデータ全体
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct QuizBank {
    /// 科目ID → エントリ（処理順を保持）
    pub topics: IndexMap<String, SubjectEntry>,
}

impl QuizBank {
    /// 科目ごとの (表示名, 問題数) を処理順で返す
    pub fn statistics(&self) -> Vec<(&str, usize)> {
        self.topics
            .values()
            .map(|entry| (entry.name.as_str(), entry.questions.len()))
            .collect()
    }

    pub fn total_questions(&self) -> usize {
        self.topics.values().map(|entry| entry.questions.len()).sum()
    }
}
