use crate::cli::{ContactAction, ContactArgs, ListFormat};
use crate::config::Config;
use crate::core::data::{Contact, ContactBook};
use crate::core::traits::RecordStore;
use crate::storage::JsonStore;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::format::{list_format, or_empty, to_pretty_json};
use anyhow::Result;

pub fn handle_contact_command(config: &Config, args: &ContactArgs) -> Result<()> {
    let store = JsonStore::new(&config.storage.contacts_file);
    let flow = run_contact(&store, args)?;
    handle_flow(flow);
    Ok(())
}

/// Run one contact action against `store`.
///
/// `remove` drops every contact with the given name and saves even when
/// nothing matched.
pub fn run_contact<S: RecordStore<Contact>>(store: &S, args: &ContactArgs) -> AppResult<FlowResult> {
    let format = list_format(args.action == ContactAction::List, args.format)?;
    let mut book = ContactBook::from(store.load()?);

    match args.action {
        ContactAction::List => match format {
            ListFormat::Text => Ok(FlowResult::Listing {
                header: "Contacts:".to_string(),
                lines: book.contacts().iter().map(Contact::to_string).collect(),
            }),
            ListFormat::Json => Ok(FlowResult::Info(to_pretty_json(book.contacts())?)),
        },
        ContactAction::Add => {
            let contact = Contact::new(args.name.clone(), args.phone.clone(), args.email.clone());
            book.add(contact);
            store.save(book.contacts())?;
            Ok(FlowResult::Success(format!("Added contact: {}", or_empty(&args.name))))
        }
        ContactAction::Remove => {
            let removed = book.remove_by_name(args.name.as_deref());
            log::debug!("removed {} contacts named {:?}", removed, args.name);
            store.save(book.contacts())?;
            Ok(FlowResult::Success(format!("Removed contact: {}", or_empty(&args.name))))
        }
    }
}
