// 問題データの整形

use anyhow::{Result, bail};

use super::schemas::{AnswerOption, FormattedQuestion};
use crate::dataset::RawQuestion;

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

// 問題IDに使う科目名の正規化
fn normalize_subject(subject: &str) -> String {
    subject.to_lowercase().replace(' ', "_")
}

/// 科目IDから表示名を作る (`high_school_mathematics` → `High School Mathematics`)
pub fn display_name(subject: &str) -> String {
    let spaced = subject.replace('_', " ");
    let mut name = String::with_capacity(spaced.len());
    let mut prev_is_alpha = false;

    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                name.extend(c.to_lowercase());
            } else {
                name.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            name.push(c);
            prev_is_alpha = false;
        }
    }

    name
}

/// 正解インデックス (0〜3) を選択肢ID ("A"〜"D") に変換
pub fn answer_letter(answer: i64) -> Option<&'static str> {
    usize::try_from(answer)
        .ok()
        .and_then(|index| OPTION_LABELS.get(index).copied())
}

/// 1科目分の問題を整形する。入力の並び順を保ち、IDは元データでの連番
pub fn format_questions(subject: &str, questions: &[RawQuestion]) -> Result<Vec<FormattedQuestion>> {
    let prefix = normalize_subject(subject);

    questions
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if item.choices.len() != OPTION_LABELS.len() {
                bail!(
                    "データ形式エラー: {} の {} 番目の問題の選択肢数が {} です (4 が必要)",
                    subject,
                    i,
                    item.choices.len()
                );
            }
            let Some(correct) = answer_letter(item.answer) else {
                bail!(
                    "データ形式エラー: {} の {} 番目の問題の正解インデックス {} が範囲外です",
                    subject,
                    i,
                    item.answer
                );
            };

            let options = OPTION_LABELS
                .iter()
                .zip(&item.choices)
                .map(|(label, text)| AnswerOption {
                    id: label.to_string(),
                    text: text.clone(),
                })
                .collect();

            Ok(FormattedQuestion {
                id: format!("{}_{}", prefix, i),
                text: item.question.clone(),
                options,
                correct_answer: correct.to_string(),
            })
        })
        .collect()
}
