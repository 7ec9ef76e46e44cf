use crate::{
    libs::{
        board::{Board, ROOT_ID},
        component::TaskComponent,
        messages::Message,
        settings::Settings,
        strategy::Filter,
        task::{Category, Status},
        view::View,
    },
    msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Tree,
    AddTask,
    AddGroup,
    ChangeStatus,
    Remove,
    ToggleGroup,
    ChooseSort,
    ChooseFilter,
    ChangeSetting,
    Activity,
    Quit,
}

impl Action {
    const ALL: [Action; 12] = [
        Action::List,
        Action::Tree,
        Action::AddTask,
        Action::AddGroup,
        Action::ChangeStatus,
        Action::Remove,
        Action::ToggleGroup,
        Action::ChooseSort,
        Action::ChooseFilter,
        Action::ChangeSetting,
        Action::Activity,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::List => "List tasks",
            Action::Tree => "Show tree",
            Action::AddTask => "Add task",
            Action::AddGroup => "Add group",
            Action::ChangeStatus => "Change status",
            Action::Remove => "Remove item",
            Action::ToggleGroup => "Collapse / expand group",
            Action::ChooseSort => "Choose sort",
            Action::ChooseFilter => "Choose filter",
            Action::ChangeSetting => "Change setting",
            Action::Activity => "Recent activity",
            Action::Quit => "Quit",
        }
    }
}

pub fn cmd() -> Result<()> {
    let mut board = Board::seeded(Settings::default())?;
    msg_print!(
        Message::AppBanner(
            crate::libs::metadata::APP_NAME.to_string(),
            crate::libs::metadata::APP_VERSION.to_string()
        ),
        true
    );

    loop {
        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let action = Action::ALL[selection];
        if action == Action::Quit {
            msg_info!(Message::InteractiveGoodbye);
            return Ok(());
        }

        // A failed action is reported and the session continues.
        if let Err(e) = run_action(&mut board, action) {
            msg_error!(Message::ActionFailed(e.to_string()));
        }
    }
}

fn run_action(board: &mut Board, action: Action) -> Result<()> {
    match action {
        Action::List => {
            let tasks = board.visible_tasks();
            if tasks.is_empty() {
                msg_info!(Message::TasksNotFound);
            } else {
                View::tasks(&tasks)?;
            }
        }
        Action::Tree => View::tree(board.root())?,
        Action::AddTask => {
            let parent = select_group(board)?;
            let title: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskTitle.to_string())
                .interact_text()?;
            let description: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDescription.to_string())
                .allow_empty(true)
                .interact_text()?;
            let default_index = Category::ALL
                .iter()
                .position(|c| *c == board.default_category())
                .unwrap_or(0);
            let category = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectCategory.to_string())
                .items(&Category::ALL.iter().map(Category::label).collect::<Vec<_>>())
                .default(default_index)
                .interact()?;
            board.create_task(Some(parent), &title, &description, Some(Category::ALL[category]))?;
            msg_success!(Message::TaskCreated(title));
        }
        Action::AddGroup => {
            let parent = select_group(board)?;
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGroupName.to_string())
                .interact_text()?;
            board.create_group(Some(parent), &name, None)?;
            msg_success!(Message::GroupCreated(name));
        }
        Action::ChangeStatus => {
            let id = select_component(board, |_| true)?;
            let status = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectStatus.to_string())
                .items(&Status::ALL.iter().map(Status::label).collect::<Vec<_>>())
                .default(0)
                .interact()?;
            let status = Status::ALL[status];
            let touched = board.set_status(id, status)?;
            msg_success!(Message::StatusApplied(touched, status.to_string()));
        }
        Action::Remove => {
            let id = select_component(board, |_| true)?;
            board.remove(id)?;
            msg_success!(Message::ComponentRemoved(id));
        }
        Action::ToggleGroup => {
            let id = select_component(board, TaskComponent::is_composite)?;
            let expanded = board.toggle_group(id)?;
            let name = match board.find(id) {
                Some(TaskComponent::Group(group)) => group.name.clone(),
                _ => id.to_string(),
            };
            msg_success!(Message::GroupToggled(name, expanded));
        }
        Action::ChooseSort => {
            let keys: Vec<String> = board.strategies().sort_keys().into_iter().map(str::to_string).collect();
            let current = keys.iter().position(|k| k == board.strategies().current_sort()).unwrap_or(0);
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectSort.to_string())
                .items(&keys)
                .default(current)
                .interact()?;
            board.strategies_mut().set_sort(&keys[selection])?;
            msg_success!(Message::SortApplied(keys[selection].clone()));
        }
        Action::ChooseFilter => {
            let filters = board.strategies().available_filters();
            let mut items: Vec<String> = filters.iter().map(ToString::to_string).collect();
            items.push(Message::SearchFilterOption.to_string());
            let current = filters
                .iter()
                .position(|f| f == board.strategies().current_filter())
                .unwrap_or(0);
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectFilter.to_string())
                .items(&items)
                .default(current)
                .interact()?;

            let filter = match filters.get(selection) {
                Some(filter) => filter.clone(),
                None => {
                    let text: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSearchText.to_string())
                        .allow_empty(true)
                        .interact_text()?;
                    Filter::BySearchText(text.trim().to_lowercase())
                }
            };
            let key = filter.to_string();
            board.strategies_mut().use_filter(filter);
            msg_success!(Message::FilterApplied(key));
        }
        Action::ChangeSetting => {
            let keys: Vec<String> = board.settings().entries().map(|(key, _)| key.to_string()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSettingKey.to_string())
                .items(&keys)
                .default(0)
                .interact()?;
            let key = &keys[selection];
            let current = board.settings().get(key).map(ToString::to_string).unwrap_or_default();
            let raw: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSettingValue.to_string())
                .default(current)
                .interact_text()?;
            let value = board.settings().parse_for(key, &raw)?;
            board.update_setting(key, value.clone())?;
            msg_success!(Message::SettingUpdated(key.clone(), value.to_string()));
        }
        Action::Activity => {
            if board.notifications().next().is_none() {
                msg_info!(Message::NoNotifications);
            } else {
                msg_print!(Message::NotificationsHeader);
                View::notifications(board.notifications())?;
            }
        }
        Action::Quit => {}
    }

    Ok(())
}

/// Depth-first list of components as (id, indented label).
fn outline(children: &[TaskComponent], depth: usize, out: &mut Vec<(u32, String)>) {
    for child in children {
        let label = match child {
            TaskComponent::Leaf(leaf) => format!("{}{} {}", "  ".repeat(depth), leaf.task.category.tag().icon, leaf.task.title),
            TaskComponent::Group(group) => format!("{}▾ {}", "  ".repeat(depth), group.name),
        };
        out.push((child.id(), label));
        outline(child.children(), depth + 1, out);
    }
}

fn select_component(board: &Board, keep: impl Fn(&TaskComponent) -> bool) -> Result<u32> {
    let mut entries = Vec::new();
    outline(board.root().children(), 0, &mut entries);
    let entries: Vec<(u32, String)> = entries
        .into_iter()
        .filter(|(id, _)| board.find(*id).is_some_and(&keep))
        .collect();

    if entries.is_empty() {
        return Err(msg_error_anyhow!(Message::TasksNotFound));
    }

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectComponent.to_string())
        .items(&entries.iter().map(|(_, label)| label.as_str()).collect::<Vec<_>>())
        .default(0)
        .interact()?;
    Ok(entries[selection].0)
}

fn select_group(board: &Board) -> Result<u32> {
    let mut entries = vec![(ROOT_ID, Message::RootGroupLabel.to_string())];
    let mut all = Vec::new();
    outline(board.root().children(), 0, &mut all);
    entries.extend(
        all.into_iter()
            .filter(|(id, _)| board.find(*id).is_some_and(TaskComponent::is_composite)),
    );

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectParent.to_string())
        .items(&entries.iter().map(|(_, label)| label.as_str()).collect::<Vec<_>>())
        .default(0)
        .interact()?;
    Ok(entries[selection].0)
}
