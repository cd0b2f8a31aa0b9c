// クイズデータ生成の設定

use std::collections::HashSet;

use anyhow::{Result, bail};

pub const DEFAULT_OUTPUT_PATH: &str = "quiz_questions.json";
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

// 対象科目（この順で処理・表示する）
pub const DEFAULT_SUBJECTS: [&str; 20] = [
    "astronomy",
    "college_computer_science",
    "high_school_mathematics",
    "world_religions",
    "high_school_psychology",
    "logical_fallacies",
    "philosophy",
    "high_school_world_history",
    "machine_learning",
    "moral_scenarios",
    "business_ethics",
    "college_biology",
    "computer_security",
    "high_school_geography",
    "high_school_chemistry",
    "marketing",
    "nutrition",
    "prehistory",
    "professional_psychology",
    "virology",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    /// 対象科目ID（重複不可）
    pub subjects: Vec<String>,
    /// 科目あたりの最大問題数
    pub sample_size: usize,
    /// 出力先JSONファイル
    pub output_path: String,
    /// 合計問題数を表示するか
    pub print_total: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            print_total: true,
        }
    }
}

impl BuilderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.subjects.is_empty() {
            bail!("対象科目が指定されていません");
        }
        if self.sample_size == 0 {
            bail!("科目あたりの問題数は1以上を指定してください");
        }
        if self.output_path.trim().is_empty() {
            bail!("出力先が指定されていません");
        }

        let mut seen = HashSet::new();
        for subject in &self.subjects {
            if subject.trim().is_empty() {
                bail!("空の科目IDが含まれています");
            }
            if !seen.insert(subject.as_str()) {
                bail!("科目ID {} が重複しています", subject);
            }
        }

        Ok(())
    }
}
