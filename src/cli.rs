use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use anyhow::Result;
use crate::commands::{arithmetic, contact, convert, todo, weather};
use crate::config::Config;
use crate::core::arithmetic::Operation;

#[derive(Parser)]
#[command(name = "pocketkit")]
#[command(about = "A multi-purpose CLI tool")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE", global = true, help = "Read settings from a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "FILE", global = true, help = "To-do list storage file")]
    pub todo_file: Option<PathBuf>,

    #[arg(long, value_name = "FILE", global = true, help = "Contacts storage file")]
    pub contacts_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file if
    /// one was given, then command-line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_custom(path)?,
            None => Config::default(),
        };

        config.apply_overrides(self.todo_file.clone(), self.contacts_file.clone(), self.no_color);
        config.validate()?;
        Ok(config)
    }
}

impl Commands {
    pub fn execute(self, config: &Config) -> Result<()> {
        match self {
            Commands::Arithmetic(args) => {
                arithmetic::handle_arithmetic_command(&args)?;
            }
            Commands::Todo(args) => {
                todo::handle_todo_command(config, &args)?;
            }
            Commands::Weather(args) => {
                weather::handle_weather_command(&args);
            }
            Commands::Contact(args) => {
                contact::handle_contact_command(config, &args)?;
            }
            Commands::Convert(args) => {
                convert::handle_convert_command(&args);
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Perform arithmetic operations
    Arithmetic(ArithmeticArgs),

    /// Manage your to-do list
    Todo(TodoArgs),

    /// Get the current weather information
    Weather(WeatherArgs),

    /// Manage your contacts
    Contact(ContactArgs),

    /// Convert between units
    Convert(ConvertArgs),
}

#[derive(Args)]
pub struct ArithmeticArgs {
    #[arg(value_enum, help = "The operation to perform")]
    pub operation: Operation,

    #[arg(allow_negative_numbers = true, help = "The first number")]
    pub a: f64,

    #[arg(allow_negative_numbers = true, help = "The second number")]
    pub b: f64,
}

#[derive(Args)]
pub struct TodoArgs {
    #[arg(value_enum, help = "The action to perform on the to-do list")]
    pub action: TodoAction,

    #[arg(
        required_if_eq_any([("action", "add"), ("action", "remove")]),
        help = "The to-do item (required for add and remove actions)"
    )]
    pub item: Option<String>,

    #[arg(short, long, value_enum, help = "Output format for list (default: text)")]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct WeatherArgs {
    #[arg(help = "The city to get the weather for")]
    pub city: String,
}

#[derive(Args)]
pub struct ContactArgs {
    #[arg(value_enum, help = "The action to perform on the contacts")]
    pub action: ContactAction,

    #[arg(long, help = "The contact's name")]
    pub name: Option<String>,

    #[arg(long, help = "The contact's phone number")]
    pub phone: Option<String>,

    #[arg(long, help = "The contact's email address")]
    pub email: Option<String>,

    #[arg(short, long, value_enum, help = "Output format for list (default: text)")]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[arg(value_name = "TYPE", help = "The type of unit conversion (length or weight)")]
    pub kind: String,

    #[arg(allow_negative_numbers = true, help = "The value to convert")]
    pub value: f64,

    #[arg(help = "The unit to convert from")]
    pub from_unit: String,

    #[arg(help = "The unit to convert to")]
    pub to_unit: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoAction {
    Add,
    List,
    Remove,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Add,
    List,
    Remove,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}
