use model::{member::Member, schedule::Schedule, trainer::Trainer};
use serde::Serialize;

use crate::lookup;

/// The schedules screen's working set: plain in-memory CRUD, never
/// persisted, gone on restart.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    entries: Vec<Schedule>,
    next_id: i64,
}

impl ScheduleBoard {
    pub fn new() -> Self {
        ScheduleBoard {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_entries(entries: Vec<Schedule>) -> Self {
        let next_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        ScheduleBoard { entries, next_id }
    }

    pub fn list(&self) -> &[Schedule] {
        &self.entries
    }

    /// Adds the entry under a fresh id and returns it.
    pub fn add(&mut self, mut schedule: Schedule) -> i64 {
        schedule.id = self.next_id;
        self.next_id += 1;
        let id = schedule.id;
        self.entries.push(schedule);
        id
    }

    pub fn update(&mut self, schedule: Schedule) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id == schedule.id)
        {
            Some(entry) => {
                *entry = schedule;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Entries with member and trainer ids resolved to display names.
    pub fn views(&self, members: &[Member], trainers: &[Trainer]) -> Vec<ScheduleView> {
        self.entries
            .iter()
            .map(|entry| ScheduleView {
                id: entry.id,
                title: entry.title.clone(),
                member: lookup::member_name(members, entry.member_id),
                trainer: lookup::trainer_name(trainers, entry.trainer_id),
                start_date: entry.start_date.clone(),
                end_date: entry.end_date.clone(),
                start_time: entry.start_time.clone(),
                end_time: entry.end_time.clone(),
                dow: entry.dow.clone(),
            })
            .collect()
    }
}

impl Default for ScheduleBoard {
    fn default() -> Self {
        ScheduleBoard::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleView {
    pub id: i64,
    pub title: String,
    pub member: String,
    pub trainer: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub dow: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock;

    fn entry(member_id: i64, trainer_id: i64, title: &str) -> Schedule {
        Schedule {
            id: 0,
            member_id,
            trainer_id,
            title: title.to_string(),
            start_date: "2025-04-26".to_string(),
            end_date: "2025-04-26".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            dow: "Monday".to_string(),
        }
    }

    #[test]
    fn test_add_assigns_ids() {
        let mut board = ScheduleBoard::new();
        let first = board.add(entry(5, 1, "Personal Training"));
        let second = board.add(entry(6, 2, "Yoga Class"));
        assert_eq!((first, second), (1, 2));
        assert_eq!(board.list().len(), 2);
    }

    #[test]
    fn test_update_and_remove() {
        let mut board = ScheduleBoard::new();
        let id = board.add(entry(5, 1, "Personal Training"));

        let mut edited = board.list()[0].clone();
        edited.title = "Strength Training".to_string();
        assert!(board.update(edited.clone()));
        assert_eq!(board.list()[0].title, "Strength Training");

        edited.id = 999;
        assert!(!board.update(edited));

        assert!(board.remove(id));
        assert!(!board.remove(id));
        assert!(board.list().is_empty());
    }

    #[test]
    fn test_views_resolve_names() {
        let mut board = ScheduleBoard::new();
        board.add(entry(5, 1, "Personal Training"));
        board.add(entry(999, 0, "Open Gym"));

        let views = board.views(&mock::members(), &mock::trainers());
        assert_eq!(views[0].member, "Mike Williams");
        assert_eq!(views[0].trainer, "John Smith");
        assert_eq!(views[1].member, lookup::UNKNOWN);
        assert_eq!(views[1].trainer, lookup::NONE);
    }

    #[test]
    fn test_with_entries_continues_ids() {
        let mut seeded = entry(5, 1, "Personal Training");
        seeded.id = 7;
        let mut board = ScheduleBoard::with_entries(vec![seeded]);
        assert_eq!(board.add(entry(6, 2, "Yoga Class")), 8);
    }
}
