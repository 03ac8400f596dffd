//! Per-task progress percentage.
//!
//! Progress is status-driven with fixed milestones; the 33/66 values are
//! part of the board's contract, not placeholders. The item-completion
//! ratio below is the original fallback for statuses outside the standard
//! set. With `TaskStatus` being a closed enum that path is unreachable
//! from `task_progress`, but the formula is kept as a first-class function
//! for compatibility with data produced under the old policy.

use crate::status::TaskStatus;
use crate::task::Task;

/// Progress percentage for a task, derived from its status.
pub fn task_progress(task: &Task) -> u8 {
    match task.status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 33,
        TaskStatus::InReview => 66,
        TaskStatus::Completed => 100,
        TaskStatus::Blocked | TaskStatus::OnHold => 33,
    }
}

/// Completion ratio over subtasks and checklist items combined:
/// `round(100 * completed / total)`, and 0 when the task has neither.
pub fn completion_ratio(task: &Task) -> u8 {
    let total = task.subtasks.len() + task.checklist.len();
    if total == 0 {
        return 0;
    }
    let completed = task.subtasks.iter().filter(|st| st.completed).count()
        + task.checklist.iter().filter(|item| item.checked).count();
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;

    fn task_with_status(status: TaskStatus) -> Task {
        let mut t = Task::new(TaskDraft {
            content: "t".to_string(),
            ..TaskDraft::default()
        });
        t.status = status;
        t
    }

    #[test]
    fn test_status_milestones() {
        assert_eq!(task_progress(&task_with_status(TaskStatus::Todo)), 0);
        assert_eq!(task_progress(&task_with_status(TaskStatus::InProgress)), 33);
        assert_eq!(task_progress(&task_with_status(TaskStatus::InReview)), 66);
        assert_eq!(task_progress(&task_with_status(TaskStatus::Blocked)), 33);
        assert_eq!(task_progress(&task_with_status(TaskStatus::OnHold)), 33);
        assert_eq!(task_progress(&task_with_status(TaskStatus::Completed)), 100);
    }

    #[test]
    fn test_in_review_ignores_item_state() {
        let mut t = task_with_status(TaskStatus::InReview);
        t.add_subtask("open".to_string());
        assert_eq!(task_progress(&t), 66);
    }

    #[test]
    fn test_completion_ratio_counts_both_collections() {
        let mut t = task_with_status(TaskStatus::Todo);
        let a = t.add_subtask("a".to_string()).id.clone();
        let b = t.add_subtask("b".to_string()).id.clone();
        t.add_subtask("c".to_string());
        t.add_checklist_item("d".to_string());
        t.toggle_subtask(&a);
        t.toggle_subtask(&b);

        // 2 completed out of 4 items.
        assert_eq!(completion_ratio(&t), 50);
    }

    #[test]
    fn test_completion_ratio_rounds() {
        let mut t = task_with_status(TaskStatus::Todo);
        let a = t.add_subtask("a".to_string()).id.clone();
        t.add_subtask("b".to_string());
        t.add_subtask("c".to_string());
        t.toggle_subtask(&a);

        // 1/3 -> 33.33 rounds down.
        assert_eq!(completion_ratio(&t), 33);

        let b = t.subtasks[1].id.clone();
        t.toggle_subtask(&b);
        // 2/3 -> 66.67 rounds up.
        assert_eq!(completion_ratio(&t), 67);
    }

    #[test]
    fn test_completion_ratio_empty_is_zero() {
        let t = task_with_status(TaskStatus::Todo);
        assert_eq!(completion_ratio(&t), 0);
    }
}
