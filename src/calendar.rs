use crate::domain::{Task, TaskId};
use chrono::{Local, NaiveDate};

/// A task projected into calendar-displayable form. Tasks are single-day,
/// all-day entries: `start == end == due_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: TaskId,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub completed: bool,
}

/// Project the task collection into calendar events, one per task in
/// collection order. A task without a due date lands on `fallback` (the
/// displayed "today"). The iterator is recomputed per call and never cached;
/// the source collection can change between calls.
pub fn project(tasks: &[Task], fallback: NaiveDate) -> impl Iterator<Item = CalendarEvent> + '_ {
    tasks.iter().map(move |task| {
        let date = task.due_date.unwrap_or(fallback);
        CalendarEvent {
            id: task.id,
            title: task.title.clone(),
            start: date,
            end: date,
            all_day: true,
            completed: task.completed,
        }
    })
}

/// Project with today's local date as the fallback
pub fn project_today(tasks: &[Task]) -> impl Iterator<Item = CalendarEvent> + '_ {
    project(tasks, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dated_task_projects_to_its_due_date() {
        let due = date(2024, 3, 1);
        let tasks = vec![Task::new(1, "Buy milk".to_string(), Some(due), None)];

        let events: Vec<CalendarEvent> = project(&tasks, date(2024, 6, 15)).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, due);
        assert_eq!(events[0].end, due);
        assert!(events[0].all_day);
        assert!(!events[0].completed);
    }

    #[test]
    fn test_undated_task_falls_back() {
        let today = date(2024, 6, 15);
        let tasks = vec![Task::new(1, "Call bank".to_string(), None, None)];

        let events: Vec<CalendarEvent> = project(&tasks, today).collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, today);
        assert_eq!(events[0].end, today);
    }

    #[test]
    fn test_one_event_per_task_in_order() {
        let tasks = vec![
            Task::new(1, "First".to_string(), Some(date(2024, 3, 2)), None),
            Task::new(2, "Second".to_string(), None, Some(Priority::High)),
            Task::new(3, "Third".to_string(), Some(date(2024, 3, 1)), None),
        ];

        let ids: Vec<TaskId> = project(&tasks, date(2024, 3, 5)).map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_completed_flag_is_copied() {
        let mut task = Task::new(1, "Done deal".to_string(), Some(date(2024, 3, 1)), None);
        task.completed = true;

        let tasks = vec![task];
        let events: Vec<CalendarEvent> = project(&tasks, date(2024, 3, 1)).collect();
        assert!(events[0].completed);
    }

    #[test]
    fn test_projection_is_restartable() {
        let tasks = vec![Task::new(1, "Buy milk".to_string(), None, None)];
        let fallback = date(2024, 3, 1);

        let first: Vec<CalendarEvent> = project(&tasks, fallback).collect();
        let second: Vec<CalendarEvent> = project(&tasks, fallback).collect();
        assert_eq!(first, second);
    }
}
