use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use pawpal_core::{
    mark_complete, Owner, Pet, Planner, PreferredTime, Recurrence, Task,
};
use pawpal_store::Store;

#[derive(Parser, Debug)]
#[command(name = "pawpal", version, about = "PawPal pet-care day planner")]
struct Cli {
    /// Store directory (default: ~/.pawpal)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an owner profile
    Init {
        name: String,

        /// Availability window, e.g. "9:00-17:00" (repeatable; the planner
        /// consults the first)
        #[arg(long)]
        availability: Vec<String>,
    },

    /// Add a pet to an owner
    AddPet {
        owner: String,
        name: String,

        #[arg(long, default_value = "dog")]
        species: String,

        #[arg(long, default_value_t = 0)]
        age: u32,

        #[arg(long, default_value = "")]
        health: String,
    },

    /// Add a care task to a pet
    AddTask {
        owner: String,

        /// Pet name or id
        pet: String,

        name: String,

        /// Duration in minutes
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=240))]
        minutes: u32,

        #[arg(long, value_enum, default_value = "medium")]
        priority: PriorityLevel,

        #[arg(long, default_value = "general")]
        category: String,

        /// Medication task: always scheduled, even past the window
        #[arg(long)]
        medical: bool,

        #[arg(long, value_enum, default_value = "flexible")]
        prefer: PreferArg,

        #[arg(long, value_enum)]
        repeat: Option<RepeatArg>,

        /// Weekdays for --repeat weekly, e.g. "mon,wed,fri"
        #[arg(long)]
        weekdays: Option<String>,
    },

    /// Plan one day and print the schedule
    Plan {
        owner: String,

        /// Date to plan (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Persist the schedule after planning
        #[arg(long)]
        save: bool,
    },

    /// Mark a scheduled task complete
    Complete {
        owner: String,
        task_id: String,

        /// Schedule date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// End-to-end walkthrough with sample data
    Demo,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PriorityLevel {
    Low,
    Medium,
    High,
}

impl PriorityLevel {
    fn value(self) -> u8 {
        match self {
            PriorityLevel::Low => 2,
            PriorityLevel::Medium => 3,
            PriorityLevel::High => 5,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PreferArg {
    Morning,
    Flexible,
    Evening,
}

impl From<PreferArg> for PreferredTime {
    fn from(p: PreferArg) -> Self {
        match p {
            PreferArg::Morning => PreferredTime::Morning,
            PreferArg::Flexible => PreferredTime::Flexible,
            PreferArg::Evening => PreferredTime::Evening,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RepeatArg {
    Daily,
    EveryOtherDay,
    Weekly,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = match &cli.dir {
        Some(dir) => Store::open(dir.clone())?,
        None => Store::open_default()?,
    };

    match cli.command {
        Command::Init { name, availability } => {
            if store.owner_exists(&name) {
                bail!("owner '{name}' already exists");
            }
            let owner = Owner::new(&name).with_availability(availability);
            store.save_owner(&owner)?;
            println!("Created owner '{name}'");
        }

        Command::AddPet {
            owner,
            name,
            species,
            age,
            health,
        } => {
            let mut record = load_owner(&store, &owner)?;
            let pet_id = format!("pet_{:03}", record.pets.len() + 1);
            let pet = Pet::new(&pet_id, &name, &species)
                .with_age(age)
                .with_health_notes(&health);
            record.add_pet(pet);
            store.save_owner(&record)?;
            println!("Added pet '{name}' ({pet_id}) to '{owner}'");
        }

        Command::AddTask {
            owner,
            pet,
            name,
            minutes,
            priority,
            category,
            medical,
            prefer,
            repeat,
            weekdays,
        } => {
            let mut record = load_owner(&store, &owner)?;
            let recurrence = build_recurrence(repeat, weekdays.as_deref())?;

            let task_count: usize = record.pets.iter().map(|p| p.tasks.len()).sum();
            let task_id = format!("task_{:03}", task_count + 1);

            let Some(pet_record) = record
                .pets
                .iter_mut()
                .find(|p| p.id == pet || p.name == pet)
            else {
                bail!("no pet named '{pet}' for owner '{owner}'");
            };

            let mut task = Task::new(&task_id, &pet_record.id, &name)
                .with_duration(minutes)
                .with_priority(priority.value())
                .with_category(&category)
                .with_preferred_time(prefer.into());
            if medical {
                task = task.medical();
            }
            if let Some(r) = recurrence {
                task = task.with_recurrence(r);
            }

            pet_record.add_task(task);
            store.save_owner(&record)?;
            println!("Added task '{name}' ({task_id}) to pet '{pet}'");
        }

        Command::Plan { owner, date, save } => {
            let record = load_owner(&store, &owner)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let schedule = Planner::new(&record).plan_day(date);

            print_schedule(&schedule);
            if save {
                store.save_schedule(&schedule)?;
                println!("\nSaved schedule for {date}");
            }
        }

        Command::Complete { owner, task_id, date } => {
            let mut record = load_owner(&store, &owner)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());

            let Some(mut schedule) = store.load_schedule(&owner, date)? else {
                bail!("no saved schedule for '{owner}' on {date} (run plan --save first)");
            };
            let Some(idx) = schedule.tasks.iter().position(|t| t.task_id == task_id) else {
                bail!("task '{task_id}' is not on the {date} schedule");
            };
            let Some(task) = record.task_mut(&task_id) else {
                bail!("task '{task_id}' no longer exists for owner '{owner}'");
            };

            let message = mark_complete(&mut schedule.tasks[idx], task, date);
            store.save_schedule(&schedule)?;
            store.save_owner(&record)?;
            println!("{message}");
        }

        Command::Demo => run_demo(&store)?,
    }

    Ok(())
}

fn load_owner(store: &Store, name: &str) -> Result<Owner> {
    store
        .load_owner(name)
        .with_context(|| format!("loading owner '{name}'"))?
        .with_context(|| format!("owner '{name}' not found (run init first)"))
}

fn build_recurrence(
    repeat: Option<RepeatArg>,
    weekdays: Option<&str>,
) -> Result<Option<Recurrence>> {
    let Some(repeat) = repeat else {
        return Ok(None);
    };
    Ok(Some(match repeat {
        RepeatArg::Daily => Recurrence::Daily,
        RepeatArg::EveryOtherDay => Recurrence::EveryOtherDay,
        RepeatArg::Weekly => {
            let spec = weekdays.context("--repeat weekly requires --weekdays")?;
            let mut days: Vec<Weekday> = Vec::new();
            for part in spec.split(',') {
                let day: Weekday = part
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid weekday: {part}"))?;
                if !days.contains(&day) {
                    days.push(day);
                }
            }
            if days.is_empty() {
                bail!("--weekdays must list at least one day");
            }
            Recurrence::Weekly(days)
        }
    }))
}

fn print_schedule(schedule: &pawpal_core::DailySchedule) {
    println!("Schedule for {} on {}", schedule.owner, schedule.date);
    println!(
        "Window: {} - {}\n",
        schedule.window.start.format("%H:%M"),
        schedule.window.end.format("%H:%M")
    );

    let by_time = schedule.tasks_by_time();
    if by_time.is_empty() {
        println!("No tasks scheduled.");
    }
    for (i, t) in by_time.iter().enumerate() {
        println!(
            "{}. {} - {}  {} [{}]",
            i + 1,
            t.start.format("%H:%M"),
            t.end.format("%H:%M"),
            t.name,
            t.task_id,
        );
    }

    if schedule.has_conflicts() {
        println!("\n{}", schedule.conflict_summary());
    }

    println!("\n{}", schedule.explanation());
}

fn run_demo(store: &Store) -> Result<()> {
    println!("PawPal demo\n");

    let mut owner = Owner::new("demo").with_availability(vec!["9:00-17:00".to_string()]);

    let mut dog = Pet::new("pet_001", "Max", "Dog")
        .with_age(3)
        .with_health_notes("Healthy, needs daily walks");
    dog.add_task(
        Task::new("task_001", "pet_001", "Morning Walk")
            .with_duration(30)
            .with_priority(5)
            .with_category("walk")
            .with_preferred_time(PreferredTime::Morning),
    );
    dog.add_task(
        Task::new("task_002", "pet_001", "Feeding")
            .with_duration(15)
            .with_priority(4)
            .with_category("feeding"),
    );
    dog.add_task(
        Task::new("task_003", "pet_001", "Evening Walk")
            .with_duration(30)
            .with_priority(5)
            .with_category("walk")
            .with_preferred_time(PreferredTime::Evening),
    );
    owner.add_pet(dog);

    let mut cat = Pet::new("pet_002", "Whiskers", "Cat")
        .with_age(5)
        .with_health_notes("Healthy, on medication");
    cat.add_task(
        Task::new("task_004", "pet_002", "Morning Medication")
            .with_duration(5)
            .with_priority(5)
            .with_category("medication")
            .medical()
            .with_preferred_time(PreferredTime::Morning)
            .with_recurrence(Recurrence::Daily),
    );
    cat.add_task(
        Task::new("task_005", "pet_002", "Morning Feeding")
            .with_duration(10)
            .with_priority(5)
            .with_category("feeding")
            .with_preferred_time(PreferredTime::Morning),
    );
    cat.add_task(
        Task::new("task_006", "pet_002", "Playtime")
            .with_duration(20)
            .with_priority(2)
            .with_category("play"),
    );
    owner.add_pet(cat);

    let today = Local::now().date_naive();
    let schedule = Planner::new(&owner).plan_day(today);
    print_schedule(&schedule);

    store.save_owner(&owner)?;
    store.save_schedule(&schedule)?;
    println!("Saved owner and schedule under {}", store.root().display());

    let reloaded = store
        .load_owner("demo")?
        .context("demo owner failed to reload")?;
    let total_tasks: usize = reloaded.pets.iter().map(|p| p.tasks.len()).sum();
    println!(
        "Reloaded '{}': {} pets, {} tasks",
        reloaded.name,
        reloaded.pets.len(),
        total_tasks
    );

    Ok(())
}
