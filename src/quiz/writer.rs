// クイズデータのJSON保存

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use super::schemas::QuizBank;

/// 2スペースインデント、非ASCII文字はエスケープせずに書き出す。既存ファイルは上書き
pub async fn save_quiz_bank(bank: &QuizBank, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_data = serde_json::to_string_pretty(bank)?;

    fs::write(path, json_data)
        .await
        .with_context(|| format!("{} への書き込みに失敗", path.display()))?;

    Ok(())
}
