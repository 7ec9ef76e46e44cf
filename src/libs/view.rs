use super::board::Notification;
use super::component::{TaskComponent, TaskGroup};
use super::settings::Settings;
use super::task::{Status, Task};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "TITLE", "DESCRIPTION", "TYPE", "STATUS", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.category.tag().icon,
                task.title,
                task.description,
                task.type_label(),
                status_marker(task.status),
                task.created_at().format("%Y-%m-%d %H:%M")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn settings(settings: &Settings) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "VALUE"]);
        for (key, value) in settings.entries() {
            table.add_row(row![key, value]);
        }
        table.printstd();

        Ok(())
    }

    pub fn notifications<'a>(notifications: impl Iterator<Item = &'a Notification>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "EVENT"]);
        for notification in notifications {
            table.add_row(row![notification.at.format("%H:%M:%S"), notification.message]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tree(root: &TaskGroup) -> Result<()> {
        print!("{}", Self::render_tree(root));
        Ok(())
    }

    /// Indented text rendering of a group. Collapsed groups show a one-line
    /// summary instead of their children.
    pub fn render_tree(root: &TaskGroup) -> String {
        let mut out = String::new();
        render_children(root.children(), "", &mut out);
        out
    }
}

fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Pending => "[ ] pending",
        Status::InProgress => "[~] in progress",
        Status::Completed => "[x] completed",
    }
}

fn render_children(children: &[TaskComponent], prefix: &str, out: &mut String) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        match child {
            TaskComponent::Leaf(leaf) => {
                let task = &leaf.task;
                out.push_str(&format!(
                    "{}{}{} #{} {} {}\n",
                    prefix,
                    branch,
                    &status_marker(task.status)[..3],
                    task.id,
                    task.category.tag().icon,
                    task.title
                ));
            }
            TaskComponent::Group(group) => {
                let marker = if group.expanded { "▾" } else { "▸" };
                out.push_str(&format!(
                    "{}{}{} {} #{} ({}/{})\n",
                    prefix,
                    branch,
                    marker,
                    group.name,
                    group.id,
                    group.count_by_status(Status::Completed),
                    group.count_tasks()
                ));
                if group.expanded {
                    let nested = format!("{}{}", prefix, if last { "    " } else { "│   " });
                    render_children(group.children(), &nested, out);
                }
            }
        }
    }
}
