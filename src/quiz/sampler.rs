// 問題の無作為抽出

use rand::Rng;
use rand::seq::SliceRandom;

use super::schemas::FormattedQuestion;

/// 最大 `count` 問を重複なしで無作為に選ぶ。並び順も無作為になる
pub fn sample_questions<R: Rng + ?Sized>(
    mut questions: Vec<FormattedQuestion>,
    count: usize,
    rng: &mut R,
) -> Vec<FormattedQuestion> {
    questions.shuffle(rng);
    questions.truncate(count);
    questions
}
