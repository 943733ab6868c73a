use serde::{Deserialize, Serialize};

/// Source language assumed when the caller does not name one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en";

// 翻译请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslationRequest {
    pub strings: Vec<String>,
    pub target_language: String,
    pub source_language: String,
}

impl TranslationRequest {
    pub fn new(strings: Vec<String>, target_language: impl Into<String>) -> Self {
        Self {
            strings,
            target_language: target_language.into(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
        }
    }

    pub fn from_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

// 单条翻译结果 (原文, 译文)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    pub source: String,
    pub translated: String,
}

// 一次请求的完整结果，顺序与请求一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationBatch {
    pub service: String,
    pub source_language: String,
    pub target_language: String,
    pub translations: Vec<Translation>,
}

impl TranslationBatch {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|t| t.translated.as_str())
    }
}
