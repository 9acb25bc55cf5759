use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::datekey::{day_key, month_key, today};
use crate::domain::{streak, Dashboard, EventForm, TxForm};
use crate::entity::{HealthField, TxKind};
use crate::error::{LifeboardError, Result};
use crate::snapshot;
use crate::store::SqliteSubstrate;

const DB_FILE: &str = "dashboard.db";

/// Resolve the data directory: LIFEBOARD_HOME when set, otherwise
/// ~/.lifeboard. The core never reads the environment; this is CLI-only.
fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("LIFEBOARD_HOME") {
        return PathBuf::from(dir);
    }
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".lifeboard")
}

fn open_dashboard() -> Result<Dashboard> {
    let dir = data_dir();
    fs::create_dir_all(&dir)?;
    let substrate = SqliteSubstrate::open(&dir.join(DB_FILE))?;
    Ok(Dashboard::open(Rc::new(substrate)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ========== Tasks ==========

pub fn handle_task_add(text: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    match dash.tasks.add(&text) {
        Some(task) => println!("Added task {} - {}", task.id, task.text),
        None => eprintln!("Task text is empty, nothing added"),
    }
    Ok(())
}

pub fn handle_task_toggle(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.tasks.toggle(&id);
    Ok(())
}

pub fn handle_task_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.tasks.remove(&id);
    Ok(())
}

pub fn handle_task_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.tasks.list());
    }
    for task in dash.tasks.list() {
        let mark = if task.done { "x" } else { " " };
        println!("[{}] {} {}", mark, task.id, task.text);
    }
    Ok(())
}

// ========== Notes ==========

pub fn handle_note_add(text: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    match dash.notes.add(&text) {
        Some(note) => println!("Captured note {}", note.id),
        None => eprintln!("Note text is empty, nothing captured"),
    }
    Ok(())
}

pub fn handle_note_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.notes.remove(&id);
    Ok(())
}

pub fn handle_note_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.notes.list());
    }
    for note in dash.notes.list() {
        println!("{} {}", note.id, note.text);
    }
    Ok(())
}

// ========== Habits ==========

pub fn handle_habit_add(name: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    match dash.habits.add(&name) {
        Some(habit) => println!("Added habit {} - {}", habit.id, habit.name),
        None => eprintln!("Habit name is empty, nothing added"),
    }
    Ok(())
}

pub fn handle_habit_toggle(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.habits.toggle_today(&id);
    Ok(())
}

pub fn handle_habit_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.habits.remove(&id);
    Ok(())
}

pub fn handle_habit_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.habits.list());
    }
    let now = today();
    for habit in dash.habits.list() {
        let done = if habit.done_on(&day_key(now)) { "done" } else { "todo" };
        println!(
            "{} {} [{}] streak {}d",
            habit.id,
            habit.name,
            done,
            streak(habit, now)
        );
    }
    Ok(())
}

// ========== Goals ==========

pub fn handle_goal_add(name: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    match dash.goals.add(&name) {
        Some(goal) => println!("Added goal {} - {}", goal.id, goal.name),
        None => eprintln!("Goal name is empty, nothing added"),
    }
    Ok(())
}

pub fn handle_goal_set(id: String, progress: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.goals.set_progress(&id, &progress);
    Ok(())
}

pub fn handle_goal_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.goals.remove(&id);
    Ok(())
}

pub fn handle_goal_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.goals.list());
    }
    for goal in dash.goals.list() {
        println!("{} {} - {}%", goal.id, goal.name, goal.progress);
    }
    Ok(())
}

// ========== Health ==========

pub fn handle_health_set(field: String, value: String) -> Result<()> {
    let field: HealthField = field
        .parse()
        .map_err(LifeboardError::UnknownHealthField)?;
    let mut dash = open_dashboard()?;
    dash.health.update(field, &value);
    println!("Recorded {} for {}", field, day_key(today()));
    Ok(())
}

pub fn handle_health_week() -> Result<()> {
    let dash = open_dashboard()?;
    for sample in dash.health.last7() {
        match sample.entry {
            Some(entry) => println!(
                "{}  weight {}  sleep {}",
                sample.day,
                entry.weight.as_deref().unwrap_or("-"),
                entry.sleep.as_deref().unwrap_or("-"),
            ),
            None => println!("{}  -", sample.day),
        }
    }
    Ok(())
}

// ========== Finance ==========

pub fn handle_tx_add(amount: String, kind: String, category: String, note: String) -> Result<()> {
    let kind: TxKind = kind.parse().map_err(LifeboardError::UnknownTxKind)?;
    let mut dash = open_dashboard()?;
    let form = TxForm {
        kind,
        amount,
        category,
        note,
    };
    match dash.finance.add(&form) {
        Some(tx) => println!("Booked {} {} {:.2} on {}", tx.id, tx.kind, tx.amount, tx.date),
        None => eprintln!("Amount must be a non-zero number, nothing booked"),
    }
    Ok(())
}

pub fn handle_tx_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.finance.remove(&id);
    Ok(())
}

pub fn handle_tx_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.finance.list());
    }
    for tx in dash.finance.list() {
        println!(
            "{} {} {} {:.2} {}",
            tx.id, tx.date, tx.kind, tx.amount, tx.category
        );
    }
    Ok(())
}

pub fn handle_tx_totals(month: Option<String>) -> Result<()> {
    let dash = open_dashboard()?;
    let month = month.unwrap_or_else(|| month_key(today()));
    let totals = dash.finance.monthly_totals(&month);
    println!(
        "{}  income {:.2}  expense {:.2}  net {:.2}",
        month, totals.income, totals.expense, totals.net
    );
    Ok(())
}

// ========== Events ==========

pub fn handle_event_add(title: String, date: String, time: String, note: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    let form = EventForm {
        title,
        date,
        time,
        note,
    };
    match dash.events.add(&form) {
        Some(event) => println!("Added event {} on {}", event.id, event.date),
        None => eprintln!("Event title is empty, nothing added"),
    }
    Ok(())
}

pub fn handle_event_rm(id: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.events.remove(&id);
    Ok(())
}

pub fn handle_event_list(json: bool) -> Result<()> {
    let dash = open_dashboard()?;
    if json {
        return print_json(&dash.events.list());
    }
    for event in dash.events.list() {
        match &event.time {
            Some(time) => println!("{} {} {} {}", event.id, event.date, time, event.title),
            None => println!("{} {} {}", event.id, event.date, event.title),
        }
    }
    Ok(())
}

// ========== Journal ==========

pub fn handle_journal_write(text: String) -> Result<()> {
    let mut dash = open_dashboard()?;
    dash.journal.set_today(&text);
    println!("Journal updated for {}", day_key(today()));
    Ok(())
}

pub fn handle_journal_show(date: Option<String>) -> Result<()> {
    let dash = open_dashboard()?;
    let day = date.unwrap_or_else(|| day_key(today()));
    match dash.journal.entry(&day) {
        Some(text) => println!("{}", text),
        None => println!("(no entry for {})", day),
    }
    Ok(())
}

// ========== Backup ==========

pub fn handle_export(path: Option<PathBuf>) -> Result<()> {
    let dash = open_dashboard()?;
    let json = snapshot::export_json(&dash)?;
    match path {
        Some(path) => {
            write_export(&path, &json)?;
            println!("Exported to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn write_export(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

pub fn handle_import(path: PathBuf) -> Result<()> {
    let text = fs::read_to_string(&path)?;
    let mut dash = open_dashboard()?;
    if snapshot::import_json(&mut dash, &text) {
        println!("Imported {}", path.display());
    } else {
        eprintln!("Import rejected: not a valid backup document, state unchanged");
    }
    Ok(())
}
