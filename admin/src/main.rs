//! AGS Admin CLI
//!
//! Command-line administration for the AGS API: manage catalog items,
//! systems and their components.

mod client;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use client::{
    AgsClient, CategoryRequest, CreateComponentRequest, CreateItemRequest, CreateSystemRequest,
    UpdateComponentRequest, UpdateItemRequest, UpdateSystemRequest,
};

#[derive(Parser, Debug)]
#[command(name = "ags-admin")]
#[command(about = "Administer the AGS windows and doors catalog")]
struct Cli {
    /// Base URL of the AGS API
    #[arg(long, env = "AGS_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up
    Health,
    /// Manage catalog items
    #[command(subcommand)]
    Items(ItemCommand),
    /// Manage systems
    #[command(subcommand)]
    Systems(SystemCommand),
    /// Manage the components of a system
    #[command(subcommand)]
    Components(ComponentCommand),
}

#[derive(Subcommand, Debug)]
enum ItemCommand {
    List,
    Get {
        code: String,
    },
    Create {
        code: String,
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "0")]
        price: f64,
        #[arg(long)]
        category_name: Option<String>,
        #[arg(long)]
        category_code: Option<String>,
        #[command(flatten)]
        appearance: AppearanceArgs,
    },
    Update {
        code: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long, requires = "category_code")]
        category_name: Option<String>,
        #[arg(long, requires = "category_name")]
        category_code: Option<String>,
        #[command(flatten)]
        appearance: AppearanceArgs,
    },
    Delete {
        code: String,
    },
    Activate {
        code: String,
    },
    Deactivate {
        code: String,
    },
}

/// Color and dimensions of an item
#[derive(Args, Debug)]
struct AppearanceArgs {
    #[arg(long)]
    color_name: Option<String>,
    #[arg(long)]
    color_hex: Option<String>,
    #[arg(long)]
    dimension_value: Option<f64>,
    #[arg(long)]
    dimension_unit: Option<String>,
}

#[derive(Subcommand, Debug)]
enum SystemCommand {
    List,
    Get {
        code: String,
    },
    Create {
        code: String,
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "Window")]
        category_name: String,
        #[arg(long, default_value = "WIN")]
        category_code: String,
    },
    Update {
        code: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
}

/// Length rule of a component
#[derive(Args, Debug)]
struct LengthArgs {
    /// Length formula, e.g. "frame.Height - 2*profile"
    #[arg(long, conflicts_with_all = ["fixed_length", "unit"])]
    formula: Option<String>,
    #[arg(long)]
    fixed_length: Option<f64>,
    #[arg(long)]
    unit: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ComponentCommand {
    List {
        system: String,
    },
    Get {
        id: String,
    },
    Add {
        system: String,
        item_code: String,
        name: String,
        #[arg(long, default_value = "1")]
        quantity: i32,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        length: LengthArgs,
        /// Mark the component as optional
        #[arg(long)]
        optional: bool,
        #[arg(long, default_value = "0")]
        sort_order: i32,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        quantity: Option<i32>,
        #[arg(long)]
        description: Option<String>,
        #[command(flatten)]
        length: LengthArgs,
        #[arg(long)]
        required: Option<bool>,
        #[arg(long)]
        sort_order: Option<i32>,
    },
    Remove {
        id: String,
    },
}

async fn run_items(client: &AgsClient, command: ItemCommand) -> Result<Value> {
    match command {
        ItemCommand::List => client.list_items().await,
        ItemCommand::Get { code } => client.get_item(&code).await,
        ItemCommand::Create {
            code,
            name,
            description,
            price,
            category_name,
            category_code,
            appearance,
        } => {
            client
                .create_item(&CreateItemRequest {
                    code,
                    name,
                    description,
                    price,
                    category_name,
                    category_code,
                    color_name: appearance.color_name,
                    color_hex: appearance.color_hex,
                    dimension_value: appearance.dimension_value,
                    dimension_unit: appearance.dimension_unit,
                })
                .await
        }
        ItemCommand::Update {
            code,
            name,
            description,
            price,
            category_name,
            category_code,
            appearance,
        } => {
            client
                .update_item(
                    &code,
                    &UpdateItemRequest {
                        name,
                        description,
                        price,
                        category_name,
                        category_code,
                        color_name: appearance.color_name,
                        color_hex: appearance.color_hex,
                        dimension_value: appearance.dimension_value,
                        dimension_unit: appearance.dimension_unit,
                    },
                )
                .await
        }
        ItemCommand::Delete { code } => client.delete_item(&code).await,
        ItemCommand::Activate { code } => client.activate_item(&code).await,
        ItemCommand::Deactivate { code } => client.deactivate_item(&code).await,
    }
}

async fn run_systems(client: &AgsClient, command: SystemCommand) -> Result<Value> {
    match command {
        SystemCommand::List => client.list_systems().await,
        SystemCommand::Get { code } => client.get_system(&code).await,
        SystemCommand::Create {
            code,
            name,
            description,
            category_name,
            category_code,
        } => {
            client
                .create_system(&CreateSystemRequest {
                    code,
                    name,
                    description,
                    category: CategoryRequest {
                        name: category_name,
                        code: category_code,
                    },
                })
                .await
        }
        SystemCommand::Update {
            code,
            name,
            description,
            active,
        } => {
            client
                .update_system(
                    &code,
                    &UpdateSystemRequest {
                        name,
                        description,
                        is_active: active,
                    },
                )
                .await
        }
    }
}

async fn run_components(client: &AgsClient, command: ComponentCommand) -> Result<Value> {
    match command {
        ComponentCommand::List { system } => client.list_components(&system).await,
        ComponentCommand::Get { id } => client.get_component(&id).await,
        ComponentCommand::Add {
            system,
            item_code,
            name,
            quantity,
            description,
            length,
            optional,
            sort_order,
        } => {
            client
                .add_component(
                    &system,
                    &CreateComponentRequest {
                        item_code,
                        name,
                        quantity,
                        description,
                        length_formula: length.formula,
                        fixed_length_value: length.fixed_length,
                        fixed_length_unit: length.unit,
                        is_required: !optional,
                        sort_order,
                    },
                )
                .await
        }
        ComponentCommand::Update {
            id,
            name,
            quantity,
            description,
            length,
            required,
            sort_order,
        } => {
            client
                .update_component(
                    &id,
                    &UpdateComponentRequest {
                        name,
                        quantity,
                        description,
                        length_formula: length.formula,
                        fixed_length_value: length.fixed_length,
                        fixed_length_unit: length.unit,
                        is_required: required,
                        sort_order,
                    },
                )
                .await
        }
        ComponentCommand::Remove { id } => client.remove_component(&id).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(api_url = %cli.api_url, "Using AGS API");

    let client = AgsClient::new(&cli.api_url)?;

    let output = match cli.command {
        Command::Health => client.health().await?,
        Command::Items(command) => run_items(&client, command).await?,
        Command::Systems(command) => run_systems(&client, command).await?,
        Command::Components(command) => run_components(&client, command).await?,
    };

    if output.is_null() {
        println!("Done");
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
