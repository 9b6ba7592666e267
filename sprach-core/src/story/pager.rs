//! Page-by-page reader for the A1 level.
//!
//! Each page is one story followed by a small quiz. Questions on a page are
//! independent and may be answered in any order, once each. The page can only
//! be turned after every question on it has been answered; turning slides the
//! page out and commits the change when the slide finishes.

use super::{Story, StoryError};
use crate::timeline::{Clocked, Timeline};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default duration of the page slide.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDirection {
    Forward,
    Backward,
}

/// Why a pager action was a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerIgnore {
    /// A page slide is in flight.
    Animating,
    OutOfRange,
    SamePage,
    /// A question on the current page is still open.
    Unanswered,
    AlreadyAnswered,
    NoSuchQuestion,
    OptionOutOfRange,
}

/// Result of [`StoryPager::change_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Started(PageDirection),
    Ignored(PagerIgnore),
}

/// Result of [`StoryPager::answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAnswer {
    Correct,
    Wrong,
    Ignored(PagerIgnore),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    target: usize,
    direction: PageDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerTask {
    CommitPage,
}

#[derive(Debug)]
pub struct StoryPager {
    stories: Vec<Story>,
    page: usize,
    /// Selected option per question of the current page.
    selected: Vec<Option<usize>>,
    transition: Option<Transition>,
    transition_duration: Duration,
    timeline: Timeline<PagerTask>,
}

impl StoryPager {
    pub fn new(stories: Vec<Story>) -> Result<Self, StoryError> {
        if stories.is_empty() {
            return Err(StoryError::NoStories);
        }
        for story in &stories {
            story.validate()?;
        }
        let selected = vec![None; stories[0].questions.len()];
        Ok(Self {
            stories,
            page: 0,
            selected,
            transition: None,
            transition_duration: DEFAULT_TRANSITION,
            timeline: Timeline::new(),
        })
    }

    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.stories.len()
    }

    pub fn story(&self) -> &Story {
        &self.stories[self.page]
    }

    /// The option picked for a question on the current page.
    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selected.get(question).copied().flatten()
    }

    /// Whether a question on the current page was answered correctly.
    /// `None` while it is unanswered.
    pub fn is_correct(&self, question: usize) -> Option<bool> {
        let option = self.selected(question)?;
        self.story()
            .questions
            .get(question)
            .map(|q| q.is_correct(option))
    }

    pub fn all_answered(&self) -> bool {
        self.selected.iter().all(Option::is_some)
    }

    /// Correct answers on the current page.
    pub fn score(&self) -> usize {
        (0..self.selected.len())
            .filter(|&q| self.is_correct(q) == Some(true))
            .count()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Direction of the slide in flight.
    pub fn transition(&self) -> Option<PageDirection> {
        self.transition.map(|t| t.direction)
    }

    pub fn pending_tasks(&self) -> usize {
        self.timeline.pending()
    }

    /// Answer a question on the current page.
    pub fn answer(&mut self, question: usize, option: usize) -> PageAnswer {
        if self.transition.is_some() {
            return self.ignore_answer(question, PagerIgnore::Animating);
        }
        let Some(q) = self.stories[self.page].questions.get(question) else {
            return self.ignore_answer(question, PagerIgnore::NoSuchQuestion);
        };
        if option >= q.options.len() {
            return self.ignore_answer(question, PagerIgnore::OptionOutOfRange);
        }
        if self.selected[question].is_some() {
            return self.ignore_answer(question, PagerIgnore::AlreadyAnswered);
        }

        let correct = q.is_correct(option);
        self.selected[question] = Some(option);
        debug!(page = self.page, question, option, correct, "page question answered");
        if correct {
            PageAnswer::Correct
        } else {
            PageAnswer::Wrong
        }
    }

    /// Check whether the pager could turn to `index` right now.
    pub fn can_change_to(&self, index: usize) -> Result<PageDirection, PagerIgnore> {
        if self.transition.is_some() {
            return Err(PagerIgnore::Animating);
        }
        if index >= self.stories.len() {
            return Err(PagerIgnore::OutOfRange);
        }
        if index == self.page {
            return Err(PagerIgnore::SamePage);
        }
        if !self.all_answered() {
            return Err(PagerIgnore::Unanswered);
        }
        Ok(if index > self.page {
            PageDirection::Forward
        } else {
            PageDirection::Backward
        })
    }

    /// Start sliding to another page. The page index changes when the slide ends.
    pub fn change_page(&mut self, index: usize) -> PageChange {
        let direction = match self.can_change_to(index) {
            Ok(direction) => direction,
            Err(reason) => {
                debug!(from = self.page, to = index, ?reason, "page change ignored");
                return PageChange::Ignored(reason);
            }
        };
        self.timeline
            .schedule_once(self.transition_duration, PagerTask::CommitPage);
        self.transition = Some(Transition {
            target: index,
            direction,
        });
        debug!(from = self.page, to = index, ?direction, "page transition started");
        PageChange::Started(direction)
    }

    pub fn next_page(&mut self) -> PageChange {
        self.change_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> PageChange {
        match self.page.checked_sub(1) {
            Some(index) => self.change_page(index),
            None => PageChange::Ignored(PagerIgnore::OutOfRange),
        }
    }

    fn ignore_answer(&self, question: usize, reason: PagerIgnore) -> PageAnswer {
        debug!(page = self.page, question, ?reason, "page answer ignored");
        PageAnswer::Ignored(reason)
    }

    fn commit(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        self.page = transition.target;
        self.selected = vec![None; self.stories[self.page].questions.len()];
        debug!(page = self.page, "page changed");
    }
}

impl Clocked for StoryPager {
    fn advance(&mut self, by: Duration) {
        let until = self.timeline.now() + by;
        while let Some(task) = self.timeline.pop_due(until) {
            match task {
                PagerTask::CommitPage => self.commit(),
            }
        }
        self.timeline.settle(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::quiz_story;

    fn pager() -> StoryPager {
        StoryPager::new(vec![
            quiz_story("a", &[0, 1, 2]),
            quiz_story("b", &[1]),
            quiz_story("c", &[2, 2]),
        ])
        .unwrap()
    }

    fn answer_all(pager: &mut StoryPager) {
        let correct: Vec<usize> = pager
            .story()
            .questions
            .iter()
            .map(|q| q.correct_option)
            .collect();
        for (q, option) in correct.into_iter().enumerate() {
            pager.answer(q, option);
        }
    }

    #[test]
    fn test_unanswered_blocks_page_change() {
        let mut pager = pager();
        pager.answer(0, 0);
        assert_eq!(
            pager.change_page(1),
            PageChange::Ignored(PagerIgnore::Unanswered)
        );
        pager.advance(DEFAULT_TRANSITION * 2);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn test_answers_are_final() {
        let mut pager = pager();
        assert_eq!(pager.answer(1, 0), PageAnswer::Wrong);
        assert_eq!(
            pager.answer(1, 1),
            PageAnswer::Ignored(PagerIgnore::AlreadyAnswered)
        );
        assert_eq!(pager.is_correct(1), Some(false));
        assert_eq!(pager.is_correct(0), None);
        assert_eq!(
            pager.answer(5, 0),
            PageAnswer::Ignored(PagerIgnore::NoSuchQuestion)
        );
        assert_eq!(
            pager.answer(0, 3),
            PageAnswer::Ignored(PagerIgnore::OptionOutOfRange)
        );
    }

    #[test]
    fn test_page_commits_after_transition() {
        let mut pager = pager();
        answer_all(&mut pager);
        assert_eq!(pager.score(), 3);
        assert_eq!(
            pager.next_page(),
            PageChange::Started(PageDirection::Forward)
        );
        assert!(pager.is_animating());
        assert_eq!(pager.transition(), Some(PageDirection::Forward));

        pager.advance(Duration::from_millis(349));
        assert_eq!(pager.page(), 0);
        pager.advance(Duration::from_millis(1));
        assert_eq!(pager.page(), 1);
        assert!(!pager.is_animating());
        assert_eq!(pager.selected(0), None);
        assert!(!pager.all_answered());
    }

    #[test]
    fn test_blocked_while_animating() {
        let mut pager = pager();
        answer_all(&mut pager);
        pager.change_page(2);
        assert_eq!(
            pager.change_page(1),
            PageChange::Ignored(PagerIgnore::Animating)
        );
        assert_eq!(
            pager.answer(0, 0),
            PageAnswer::Ignored(PagerIgnore::Animating)
        );
        pager.advance(DEFAULT_TRANSITION);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_backward_direction_and_bounds() {
        let mut pager = pager();
        assert_eq!(
            pager.previous_page(),
            PageChange::Ignored(PagerIgnore::OutOfRange)
        );
        answer_all(&mut pager);
        assert_eq!(
            pager.change_page(3),
            PageChange::Ignored(PagerIgnore::OutOfRange)
        );
        assert_eq!(
            pager.change_page(0),
            PageChange::Ignored(PagerIgnore::SamePage)
        );
        pager.change_page(2);
        pager.advance(DEFAULT_TRANSITION);

        answer_all(&mut pager);
        assert_eq!(
            pager.previous_page(),
            PageChange::Started(PageDirection::Backward)
        );
        pager.advance(DEFAULT_TRANSITION);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_unanswered_blocks_going_back() {
        let mut pager = pager();
        answer_all(&mut pager);
        pager.next_page();
        pager.advance(DEFAULT_TRANSITION);
        assert_eq!(pager.page(), 1);

        assert_eq!(
            pager.previous_page(),
            PageChange::Ignored(PagerIgnore::Unanswered)
        );
        answer_all(&mut pager);
        assert_eq!(
            pager.previous_page(),
            PageChange::Started(PageDirection::Backward)
        );
    }
}
