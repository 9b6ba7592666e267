//! Read-then-test reader for the hard level.
//!
//! A story is read first while a progress bar fills. The quiz is then taken one
//! question at a time: each answer is shown as right or wrong for the feedback
//! delay before the next question appears. After the last question the reader
//! shows the score.

use super::{Question, Story, StoryError};
use crate::timeline::{Clocked, TaskHandle, Timeline};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default time an answered question stays on screen.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_secs(2);

/// Period of the reading-progress simulation.
pub const READING_TICK: Duration = Duration::from_millis(100);

/// Percentage points added per reading tick.
pub const READING_STEP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizPhase {
    Reading,
    Quizzing,
    Results,
}

/// State of the question currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionState {
    Unanswered,
    Answered { selected: usize, correct: bool },
}

/// Why an answer was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizIgnore {
    NotQuizzing,
    NotCurrentQuestion,
    AlreadyAnswered,
    OptionOutOfRange,
}

/// Result of [`StoryQuiz::answer_question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Wrong,
    Ignored(QuizIgnore),
}

/// One pass through a story's questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    current: usize,
    score: u32,
    answers: Vec<Option<usize>>,
}

impl QuizAttempt {
    fn new(questions: usize) -> Self {
        Self {
            current: 0,
            score: 0,
            answers: vec![None; questions],
        }
    }

    pub fn current_question(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Selected option per question, `None` while unanswered.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizTask {
    Feedback,
    ReadingTick,
}

/// The hard-level story reader.
#[derive(Debug)]
pub struct StoryQuiz {
    stories: Vec<Story>,
    story_index: usize,
    phase: QuizPhase,
    attempt: Option<QuizAttempt>,
    question_state: QuestionState,
    reading_progress: u8,
    feedback_delay: Duration,
    timeline: Timeline<QuizTask>,
    feedback: Option<TaskHandle>,
    reading: Option<TaskHandle>,
}

impl StoryQuiz {
    pub fn new(stories: Vec<Story>) -> Result<Self, StoryError> {
        if stories.is_empty() {
            return Err(StoryError::NoStories);
        }
        for story in &stories {
            story.validate()?;
        }
        Ok(Self {
            stories,
            story_index: 0,
            phase: QuizPhase::Reading,
            attempt: None,
            question_state: QuestionState::Unanswered,
            reading_progress: 0,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            timeline: Timeline::new(),
            feedback: None,
            reading: None,
        })
    }

    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn story(&self) -> &Story {
        &self.stories[self.story_index]
    }

    pub fn story_index(&self) -> usize {
        self.story_index
    }

    pub fn story_count(&self) -> usize {
        self.stories.len()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn attempt(&self) -> Option<&QuizAttempt> {
        self.attempt.as_ref()
    }

    pub fn question_state(&self) -> QuestionState {
        self.question_state
    }

    /// The question on screen while quizzing.
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != QuizPhase::Quizzing {
            return None;
        }
        let attempt = self.attempt.as_ref()?;
        self.story().questions.get(attempt.current)
    }

    /// Reading progress in percent.
    pub fn reading_progress(&self) -> u8 {
        self.reading_progress
    }

    pub fn is_reading(&self) -> bool {
        self.reading.is_some()
    }

    pub fn score(&self) -> u32 {
        self.attempt.as_ref().map_or(0, |a| a.score)
    }

    pub fn total(&self) -> u32 {
        self.story().questions.len() as u32
    }

    pub fn is_perfect(&self) -> bool {
        self.total() > 0 && self.score() == self.total()
    }

    /// Translation key of the results message, once results are shown.
    pub fn result_key(&self) -> Option<&'static str> {
        match self.phase {
            QuizPhase::Results if self.is_perfect() => Some("perfect"),
            QuizPhase::Results => Some("goodJob"),
            _ => None,
        }
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Start filling the reading progress bar. No-op when already full or running.
    pub fn start_reading(&mut self) {
        if self.reading.is_some() || self.reading_progress >= 100 {
            return;
        }
        self.reading = Some(self.timeline.schedule_every(READING_TICK, QuizTask::ReadingTick));
        debug!(story = %self.story().id, "reading started");
    }

    /// Leave the reading view and begin a fresh attempt.
    pub fn start_quiz(&mut self) -> bool {
        if self.phase != QuizPhase::Reading {
            debug!(phase = ?self.phase, "start_quiz ignored");
            return false;
        }
        self.begin_attempt();
        true
    }

    /// Answer the current question. Each question is answerable once per attempt.
    pub fn answer_question(&mut self, question_index: usize, option_index: usize) -> Answer {
        let outcome = self.check_answer(question_index, option_index);
        let correct = match outcome {
            Ok(correct) => correct,
            Err(reason) => {
                debug!(question_index, option_index, ?reason, "answer ignored");
                return Answer::Ignored(reason);
            }
        };

        if let Some(attempt) = self.attempt.as_mut() {
            attempt.answers[question_index] = Some(option_index);
            if correct {
                attempt.score += 1;
            }
        }
        self.question_state = QuestionState::Answered {
            selected: option_index,
            correct,
        };
        self.feedback = Some(self.timeline.schedule_once(self.feedback_delay, QuizTask::Feedback));
        debug!(question_index, option_index, correct, "question answered");

        if correct {
            Answer::Correct
        } else {
            Answer::Wrong
        }
    }

    /// Start the current story's quiz over.
    pub fn reset_quiz(&mut self) -> bool {
        if self.phase == QuizPhase::Reading {
            return false;
        }
        self.begin_attempt();
        true
    }

    pub fn has_next_story(&self) -> bool {
        self.story_index + 1 < self.stories.len()
    }

    /// Move to the following story. No-op on the last one.
    pub fn next_story(&mut self) -> bool {
        if !self.has_next_story() {
            debug!(story = %self.story().id, "already on the last story");
            return false;
        }
        self.switch_story(self.story_index + 1);
        true
    }

    pub fn select_story(&mut self, index: usize) -> bool {
        if index >= self.stories.len() {
            debug!(index, "story index out of range");
            return false;
        }
        self.switch_story(index);
        true
    }

    fn check_answer(&self, question_index: usize, option_index: usize) -> Result<bool, QuizIgnore> {
        if self.phase != QuizPhase::Quizzing {
            return Err(QuizIgnore::NotQuizzing);
        }
        let attempt = self.attempt.as_ref().ok_or(QuizIgnore::NotQuizzing)?;
        if question_index != attempt.current {
            return Err(QuizIgnore::NotCurrentQuestion);
        }
        if self.question_state != QuestionState::Unanswered {
            return Err(QuizIgnore::AlreadyAnswered);
        }
        let question = self
            .story()
            .questions
            .get(question_index)
            .ok_or(QuizIgnore::NotCurrentQuestion)?;
        if option_index >= question.options.len() {
            return Err(QuizIgnore::OptionOutOfRange);
        }
        Ok(question.is_correct(option_index))
    }

    fn begin_attempt(&mut self) {
        if let Some(handle) = self.feedback.take() {
            self.timeline.cancel(handle);
        }
        let questions = self.story().questions.len();
        self.attempt = Some(QuizAttempt::new(questions));
        self.question_state = QuestionState::Unanswered;
        self.phase = if questions == 0 {
            QuizPhase::Results
        } else {
            QuizPhase::Quizzing
        };
        debug!(story = %self.story().id, questions, "quiz attempt started");
    }

    fn switch_story(&mut self, index: usize) {
        self.timeline.cancel_all();
        self.feedback = None;
        self.reading = None;
        self.story_index = index;
        self.phase = QuizPhase::Reading;
        self.attempt = None;
        self.question_state = QuestionState::Unanswered;
        self.reading_progress = 0;
        debug!(story = %self.story().id, "story selected");
    }

    fn handle(&mut self, task: QuizTask) {
        match task {
            QuizTask::Feedback => self.finish_feedback(),
            QuizTask::ReadingTick => {
                self.reading_progress = self.reading_progress.saturating_add(READING_STEP).min(100);
                if self.reading_progress >= 100 {
                    if let Some(handle) = self.reading.take() {
                        self.timeline.cancel(handle);
                    }
                }
            }
        }
    }

    fn finish_feedback(&mut self) {
        self.feedback = None;
        let total = self.story().questions.len();
        let Some(attempt) = self.attempt.as_mut() else {
            return;
        };
        if attempt.current + 1 < total {
            attempt.current += 1;
            self.question_state = QuestionState::Unanswered;
        } else {
            self.phase = QuizPhase::Results;
            info!(
                story = %self.stories[self.story_index].id,
                score = attempt.score,
                total,
                "quiz finished"
            );
        }
    }
}

impl Clocked for StoryQuiz {
    fn advance(&mut self, by: Duration) {
        let until = self.timeline.now() + by;
        while let Some(task) = self.timeline.pop_due(until) {
            self.handle(task);
        }
        self.timeline.settle(until);
    }
}
