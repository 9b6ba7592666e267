//! Bilingual stories with comprehension questions.
//!
//! Two readers sit on top of the same content:
//! - [`StoryQuiz`] for the hard level: read first, then answer the questions
//!   one by one with timed feedback, ending in a results screen.
//! - [`StoryPager`] for the A1 level: every page carries an inline quiz that
//!   has to be completed before the page can be turned.

pub mod library;
pub mod pager;
pub mod quiz;

pub use library::{stories, Level};
pub use pager::{PageAnswer, PageChange, PageDirection, PagerIgnore, StoryPager};
pub use quiz::{Answer, QuestionState, QuizAttempt, QuizIgnore, QuizPhase, StoryQuiz};

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from story import and validation.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("A reader needs at least one story")]
    NoStories,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Story '{story}' question {question} has no options")]
    NoOptions { story: String, question: usize },

    #[error("Story '{story}' question {question}: correct option {correct} out of {options}")]
    CorrectOptionOutOfRange {
        story: String,
        question: usize,
        correct: usize,
        options: usize,
    },
}

/// Text in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub de: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(de: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            ar: ar.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::De => &self.de,
            Locale::Ar => &self.ar,
        }
    }
}

/// A multiple-choice comprehension question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: LocalizedText,
    pub options: Vec<LocalizedText>,
    pub correct_option: usize,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// A story and its questions. Read-only content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: LocalizedText,
    pub paragraphs: Vec<LocalizedText>,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Asset identifier of an illustration, resolved by the host.
    #[serde(default)]
    pub illustration: Option<String>,
}

impl Story {
    /// Check that every question can be answered correctly.
    pub fn validate(&self) -> Result<(), StoryError> {
        for (i, q) in self.questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(StoryError::NoOptions {
                    story: self.id.clone(),
                    question: i,
                });
            }
            if q.correct_option >= q.options.len() {
                return Err(StoryError::CorrectOptionOutOfRange {
                    story: self.id.clone(),
                    question: i,
                    correct: q.correct_option,
                    options: q.options.len(),
                });
            }
        }
        Ok(())
    }

    pub fn has_quiz(&self) -> bool {
        !self.questions.is_empty()
    }
}

/// Parse and validate a JSON array of stories.
pub fn load_stories_json(json: &str) -> Result<Vec<Story>, StoryError> {
    let stories: Vec<Story> = serde_json::from_str(json)?;
    for story in &stories {
        story.validate()?;
    }
    Ok(stories)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_STORY: &str = r#"[{
        "id": "test",
        "title": {"de": "Titel", "ar": "عنوان"},
        "paragraphs": [{"de": "Text", "ar": "نص"}],
        "questions": [{
            "prompt": {"de": "Frage?", "ar": "سؤال؟"},
            "options": [{"de": "Ja", "ar": "نعم"}, {"de": "Nein", "ar": "لا"}],
            "correct_option": 1
        }]
    }]"#;

    #[test]
    fn test_localized_text() {
        let text = LocalizedText::new("Hallo", "مرحبا");
        assert_eq!(text.get(Locale::De), "Hallo");
        assert_eq!(text.get(Locale::Ar), "مرحبا");
    }

    #[test]
    fn test_load_stories_json() {
        let stories = load_stories_json(ONE_STORY).unwrap();
        assert_eq!(stories.len(), 1);
        assert!(stories[0].questions[0].is_correct(1));
        assert!(stories[0].illustration.is_none());
    }

    #[test]
    fn test_load_rejects_bad_correct_option() {
        let json = ONE_STORY.replace("\"correct_option\": 1", "\"correct_option\": 5");
        assert!(matches!(
            load_stories_json(&json),
            Err(StoryError::CorrectOptionOutOfRange { correct: 5, options: 2, .. })
        ));
    }

    #[test]
    fn test_builtin_stories_are_valid() {
        for level in [Level::A1, Level::Hard] {
            for story in stories(level) {
                story.validate().unwrap();
                assert!(story.has_quiz(), "{} should have questions", story.id);
            }
        }
    }
}
