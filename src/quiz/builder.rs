// 科目ごとに取得・整形・抽出してクイズデータを組み立てる

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use super::format::{display_name, format_questions};
use super::sampler::sample_questions;
use super::schemas::{QuizBank, SubjectEntry};
use crate::config::BuilderConfig;
use crate::dataset::QuestionSource;

/// 全科目を順番に処理する。どれか1科目でも失敗したら全体を中断する
pub async fn build_quiz_bank<S, R>(
    config: &BuilderConfig,
    source: &S,
    rng: &mut R,
) -> Result<QuizBank>
where
    S: QuestionSource,
    R: Rng + ?Sized,
{
    let mut bank = QuizBank::default();

    for subject in &config.subjects {
        info!("📚 {} を処理中...", subject);

        let raw = source
            .fetch(subject)
            .await
            .with_context(|| format!("{} の問題取得に失敗", subject))?;

        let formatted = format_questions(subject, &raw)?;
        let available = formatted.len();
        let questions = sample_questions(formatted, config.sample_size, rng);
        info!(
            "✅ {}: {}/{} 問を抽出",
            subject,
            questions.len(),
            available
        );

        bank.topics.insert(
            subject.clone(),
            SubjectEntry {
                name: display_name(subject),
                questions,
            },
        );
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::dataset::fixture::{FixtureSource, raw_questions};
    use crate::quiz::writer::save_quiz_bank;

    fn config(subjects: &[&str], sample_size: usize) -> BuilderConfig {
        BuilderConfig {
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            sample_size,
            ..BuilderConfig::default()
        }
    }

    #[tokio::test]
    async fn builds_entries_in_subject_order() {
        let source = FixtureSource::default()
            .with_subject("world_religions", raw_questions(15))
            .with_subject("astronomy", raw_questions(18))
            .with_subject("virology", raw_questions(0));
        let config = config(&["world_religions", "astronomy", "virology"], 10);

        let bank = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(5))
            .await
            .unwrap();

        let keys: Vec<&str> = bank.topics.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["world_religions", "astronomy", "virology"]);
        assert_eq!(
            bank.statistics(),
            vec![("World Religions", 10), ("Astronomy", 10), ("Virology", 0)]
        );
        assert_eq!(bank.total_questions(), 20);
    }

    #[tokio::test]
    async fn sampled_ids_come_from_the_subject_pool() {
        let source = FixtureSource::default().with_subject("astronomy", raw_questions(15));
        let config = config(&["astronomy"], 10);

        let bank = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(9))
            .await
            .unwrap();

        let questions = &bank.topics["astronomy"].questions;
        let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        let pool: HashSet<String> = (0..15).map(|i| format!("astronomy_{}", i)).collect();
        assert!(ids.iter().all(|id| pool.contains(*id)));
    }

    #[tokio::test]
    async fn small_subject_is_kept_whole() {
        let source = FixtureSource::default().with_subject("nutrition", raw_questions(18));
        let config = config(&["nutrition"], 25);

        let bank = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(2))
            .await
            .unwrap();

        assert_eq!(bank.topics["nutrition"].questions.len(), 18);
    }

    #[tokio::test]
    async fn missing_subject_aborts_the_run() {
        let source = FixtureSource::default().with_subject("astronomy", raw_questions(5));
        let config = config(&["astronomy", "prehistory"], 3);

        let err = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(0))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("prehistory"));
    }

    #[tokio::test]
    async fn failed_build_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_questions.json");
        let source = FixtureSource::default().with_subject("astronomy", raw_questions(5));
        let config = BuilderConfig {
            output_path: path.to_string_lossy().into_owned(),
            ..config(&["astronomy", "prehistory"], 3)
        };

        let result = async {
            let bank = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(0)).await?;
            save_quiz_bank(&bank, &config.output_path).await
        }
        .await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn malformed_record_aborts_the_run() {
        let mut raw = raw_questions(3);
        raw[1].answer = 7;
        let source = FixtureSource::default().with_subject("marketing", raw);
        let config = config(&["marketing"], 3);

        let result = build_quiz_bank(&config, &source, &mut StdRng::seed_from_u64(0)).await;
        assert!(result.is_err());
    }
}
