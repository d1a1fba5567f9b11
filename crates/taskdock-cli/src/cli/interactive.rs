/*
[INPUT]:  Synchronized task state and user input via CLI
[OUTPUT]: Task mutations against the remote collection
[POS]:    CLI interactive flow
[UPDATE]: 2026-08-07 Interactive task management loop
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use taskdock_adapter::{Task, TaskSynchronizer};

pub async fn run_interactive(sync: TaskSynchronizer) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Taskdock").bold().cyan());

    loop {
        show_error_banner(&sync);
        render_tasks(&sync.tasks());

        let actions = [
            "Add task",
            "Toggle done",
            "Edit label",
            "Delete task",
            "Clear all",
            "Refresh",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => add_task(&sync, &theme).await?,
            1 => toggle_task(&sync, &theme).await?,
            2 => relabel_task(&sync, &theme).await?,
            3 => delete_task(&sync, &theme).await?,
            4 => clear_tasks(&sync, &theme).await?,
            5 => refresh(&sync).await,
            _ => return Ok(()),
        }
    }
}

/// Print and dismiss the latest recorded error, if any.
fn show_error_banner(sync: &TaskSynchronizer) {
    if let Some(message) = sync.last_error() {
        println!("{}", style(message).red().bold());
        sync.clear_error();
    }
}

fn render_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("{}", style("No tasks yet. Add one below.").yellow());
        return;
    }
    for task in tasks {
        let marker = if task.is_done {
            style("done").green()
        } else {
            style("open").dim()
        };
        println!(
            "  [{}] {} {}",
            marker,
            task.label,
            style(format!("#{}", task.id)).dim()
        );
    }
}

fn select_task(tasks: &[Task], theme: &ColorfulTheme, prompt: &str) -> Result<Option<Task>> {
    if tasks.is_empty() {
        println!("{}", style("No tasks found.").yellow());
        return Ok(None);
    }

    let items: Vec<String> = tasks
        .iter()
        .map(|task| {
            let marker = if task.is_done { "done" } else { "open" };
            format!("{} | {} | {}", task.id, marker, task.label)
        })
        .collect();
    let selection = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(Some(tasks[selection].clone()))
}

async fn add_task(sync: &TaskSynchronizer, theme: &ColorfulTheme) -> Result<()> {
    let label: String = Input::with_theme(theme)
        .with_prompt("Task label")
        .allow_empty(true)
        .interact_text()?;

    match sync.add(&label).await {
        Ok(Some(task)) => println!("{}", style(format!("Added \"{}\"", task.label)).green()),
        // Empty labels are silently ignored; failures surface on the banner.
        Ok(None) | Err(_) => {}
    }
    Ok(())
}

async fn toggle_task(sync: &TaskSynchronizer, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(&sync.tasks(), theme, "Toggle which task?")? else {
        return Ok(());
    };

    if let Ok(task) = sync.toggle_done(task.id).await {
        let status = if task.is_done { "done" } else { "open" };
        println!("{}", style(format!("\"{}\" is now {status}", task.label)).green());
    }
    Ok(())
}

async fn relabel_task(sync: &TaskSynchronizer, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(&sync.tasks(), theme, "Relabel which task?")? else {
        return Ok(());
    };

    let label: String = Input::with_theme(theme)
        .with_prompt("New label")
        .allow_empty(true)
        .interact_text()?;

    if let Ok(Some(task)) = sync.set_label(task.id, &label).await {
        println!("{}", style(format!("Renamed to \"{}\"", task.label)).green());
    }
    Ok(())
}

async fn delete_task(sync: &TaskSynchronizer, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = select_task(&sync.tasks(), theme, "Delete which task?")? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete \"{}\"?", task.label))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if sync.remove(task.id).await.is_ok() {
        println!("{}", style(format!("Deleted \"{}\"", task.label)).green());
    }
    Ok(())
}

async fn clear_tasks(sync: &TaskSynchronizer, theme: &ColorfulTheme) -> Result<()> {
    let count = sync.tasks().len();
    if count == 0 {
        println!("{}", style("No tasks found.").yellow());
        return Ok(());
    }

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Delete all {count} tasks?"))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let outcome = sync.clear_all().await;
    if outcome.is_complete() {
        println!(
            "{}",
            style(format!("Cleared {} tasks", outcome.deleted.len())).green()
        );
    }
    // Partial failure surfaces on the banner with a count; the ids whose
    // delete confirmed are already gone from the list.
    Ok(())
}

async fn refresh(sync: &TaskSynchronizer) {
    if let Ok(count) = sync.refresh().await {
        println!("{}", style(format!("Loaded {count} tasks")).green());
    }
}
