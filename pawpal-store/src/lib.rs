//! Flat-file persistence for owners and daily schedules.
//!
//! Layout under the store root (default `~/.pawpal`):
//! - `owners/<name>.json`
//! - `schedules/<name>/<YYYY-MM-DD>.json`
//!
//! The engine knows nothing about this layer; the contract is round-trip
//! fidelity of every task field, recurrence metadata and stored next-due
//! dates included.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pawpal_core::{DailySchedule, Owner};

#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;
        Ok(Self { root })
    }

    /// Open the default store at `$HOME/.pawpal`.
    pub fn open_default() -> Result<Self> {
        let home = std::env::var("HOME").context("HOME is not set")?;
        Self::open(PathBuf::from(home).join(".pawpal"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn owner_path(&self, name: &str) -> PathBuf {
        self.root.join("owners").join(format!("{name}.json"))
    }

    fn schedule_path(&self, owner: &str, date: NaiveDate) -> PathBuf {
        self.root
            .join("schedules")
            .join(owner)
            .join(format!("{date}.json"))
    }

    pub fn save_owner(&self, owner: &Owner) -> Result<()> {
        let path = self.owner_path(&owner.name);
        write_json(&path, owner)
    }

    pub fn load_owner(&self, name: &str) -> Result<Option<Owner>> {
        read_json(&self.owner_path(name))
    }

    pub fn owner_exists(&self, name: &str) -> bool {
        self.owner_path(name).exists()
    }

    /// Remove an owner record and all of their saved schedules.
    pub fn delete_owner(&self, name: &str) -> Result<()> {
        let path = self.owner_path(name);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
        let schedules = self.root.join("schedules").join(name);
        if schedules.exists() {
            fs::remove_dir_all(&schedules)
                .with_context(|| format!("remove {}", schedules.display()))?;
        }
        Ok(())
    }

    /// Persist a schedule keyed by (owner, date), both taken from the value.
    pub fn save_schedule(&self, schedule: &DailySchedule) -> Result<()> {
        let path = self.schedule_path(&schedule.owner, schedule.date);
        write_json(&path, schedule)
    }

    pub fn load_schedule(&self, owner: &str, date: NaiveDate) -> Result<Option<DailySchedule>> {
        read_json(&self.schedule_path(owner, date))
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pawpal_core::{Pet, Planner, Recurrence, Task};

    fn sample_owner() -> Owner {
        let mut owner = Owner::new("johndoe").with_availability(vec!["9:00-17:00".to_string()]);
        let mut cat = Pet::new("pet_002", "Whiskers", "Cat").with_age(5);
        cat.add_task(
            Task::new("task_004", "pet_002", "Morning Medication")
                .with_duration(5)
                .with_priority(5)
                .with_category("medication")
                .medical()
                .with_recurrence(Recurrence::Daily),
        );
        cat.add_task(
            Task::new("task_007", "pet_002", "Brush Coat")
                .with_duration(10)
                .with_priority(2)
                .with_recurrence(Recurrence::Weekly(vec![Weekday::Mon, Weekday::Thu])),
        );
        owner.add_pet(cat);
        owner
    }

    #[test]
    fn owner_round_trip_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let mut owner = sample_owner();
        owner.task_mut("task_004").unwrap().next_due =
            NaiveDate::from_ymd_opt(2026, 2, 16);

        store.save_owner(&owner).unwrap();
        let loaded = store.load_owner("johndoe").unwrap().unwrap();
        assert_eq!(owner, loaded);
    }

    #[test]
    fn missing_owner_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        assert!(store.load_owner("nobody").unwrap().is_none());
        assert!(!store.owner_exists("nobody"));
    }

    #[test]
    fn schedule_round_trip_by_owner_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let owner = sample_owner();
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let schedule = Planner::new(&owner).plan_day(date);

        store.save_schedule(&schedule).unwrap();
        let loaded = store.load_schedule("johndoe", date).unwrap().unwrap();
        assert_eq!(schedule, loaded);

        let other_day = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        assert!(store.load_schedule("johndoe", other_day).unwrap().is_none());
    }

    #[test]
    fn delete_owner_removes_record_and_schedules() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let owner = sample_owner();
        let date = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        store.save_owner(&owner).unwrap();
        store.save_schedule(&Planner::new(&owner).plan_day(date)).unwrap();
        assert!(store.owner_exists("johndoe"));

        store.delete_owner("johndoe").unwrap();
        assert!(!store.owner_exists("johndoe"));
        assert!(store.load_schedule("johndoe", date).unwrap().is_none());

        // Deleting a missing owner is not an error.
        store.delete_owner("johndoe").unwrap();
    }
}
