use crate::cli::{ListFormat, TodoAction, TodoArgs};
use crate::config::Config;
use crate::core::data::TodoList;
use crate::core::traits::RecordStore;
use crate::storage::JsonStore;
use crate::utils::error::{AppError, AppResult, FlowResult, handle_flow};
use crate::utils::format::{list_format, to_pretty_json};
use anyhow::Result;

pub fn handle_todo_command(config: &Config, args: &TodoArgs) -> Result<()> {
    let store = JsonStore::new(&config.storage.todo_file);
    let flow = run_todo(&store, args)?;
    handle_flow(flow);
    Ok(())
}

/// Run one to-do action against `store`. The list is read fresh on every
/// call and written back only after a mutation.
pub fn run_todo<S: RecordStore<String>>(store: &S, args: &TodoArgs) -> AppResult<FlowResult> {
    let format = list_format(args.action == TodoAction::List, args.format)?;
    let mut list = TodoList::from(store.load()?);

    match args.action {
        TodoAction::List => match format {
            ListFormat::Text => Ok(FlowResult::Listing {
                header: "To-Do List:".to_string(),
                lines: list.items().iter().map(|item| format!("- {}", item)).collect(),
            }),
            ListFormat::Json => Ok(FlowResult::Info(to_pretty_json(list.items())?)),
        },
        TodoAction::Add => {
            let item = required_item(args)?;
            list.add(item.to_string());
            store.save(list.items())?;
            Ok(FlowResult::Success(format!("Added: {}", item)))
        }
        TodoAction::Remove => {
            let item = required_item(args)?;
            if list.remove(item) {
                store.save(list.items())?;
                Ok(FlowResult::Success(format!("Removed: {}", item)))
            } else {
                Ok(FlowResult::NotFound {
                    item_type: "Item".to_string(),
                    search_term: item.to_string(),
                })
            }
        }
    }
}

fn required_item(args: &TodoArgs) -> AppResult<&str> {
    args.item
        .as_deref()
        .ok_or_else(|| AppError::MissingArgument("item is required for add and remove".to_string()))
}
