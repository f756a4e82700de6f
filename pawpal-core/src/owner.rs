//! Owner and pet records.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A pet with its ordered care-task list. Insertion order is preserved but
/// carries no scheduling meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub age: u32,
    pub health_notes: String,
    pub tasks: Vec<Task>,
}

impl Pet {
    pub fn new(id: impl Into<String>, name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            age: 0,
            health_notes: String::new(),
            tasks: Vec::new(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_health_notes(mut self, notes: impl Into<String>) -> Self {
        self.health_notes = notes.into();
        self
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }
}

/// The pet owner: pets plus availability window strings.
///
/// Only the first availability entry is consulted by the planner
/// (see `AvailabilityWindow::first_of`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub availability: Vec<String>,
    pub pets: Vec<Pet>,
}

impl Owner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            availability: Vec::new(),
            pets: Vec::new(),
        }
    }

    pub fn with_availability(mut self, windows: Vec<String>) -> Self {
        self.availability = windows;
        self
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    pub fn pet_name(&self, pet_id: &str) -> Option<&str> {
        self.pets
            .iter()
            .find(|p| p.id == pet_id)
            .map(|p| p.name.as_str())
    }

    /// Mutable handle to a task, located by id across all pets.
    pub fn task_mut(&mut self, task_id: &str) -> Option<&mut Task> {
        self.pets
            .iter_mut()
            .flat_map(|p| p.tasks.iter_mut())
            .find(|t| t.id == task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_keeps_task_insertion_order() {
        let mut pet = Pet::new("p1", "Max", "Dog");
        pet.add_task(Task::new("t2", "p1", "Feeding"));
        pet.add_task(Task::new("t1", "p1", "Walk"));
        assert_eq!(pet.tasks[0].id, "t2");
        assert_eq!(pet.tasks[1].id, "t1");
    }

    #[test]
    fn task_mut_finds_across_pets() {
        let mut owner = Owner::new("johndoe");
        let mut dog = Pet::new("p1", "Max", "Dog");
        dog.add_task(Task::new("t1", "p1", "Walk"));
        let mut cat = Pet::new("p2", "Whiskers", "Cat");
        cat.add_task(Task::new("t2", "p2", "Medication"));
        owner.add_pet(dog);
        owner.add_pet(cat);

        assert!(owner.task_mut("t2").is_some());
        assert!(owner.task_mut("missing").is_none());
        assert_eq!(owner.pet_name("p2"), Some("Whiskers"));
    }
}
