// クイズモジュール - 問題の整形・抽出・保存をまとめたモジュール

pub mod builder;
pub mod format;
pub mod sampler;
pub mod schemas;
pub mod writer;

pub use builder::build_quiz_bank;
pub use schemas::QuizBank;
pub use writer::save_quiz_bank;
