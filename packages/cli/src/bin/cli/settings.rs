use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use setkeep_storage::SettingsStore;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// List all settings
    List,
    /// Show the value stored under a key
    Get {
        /// Setting key
        key: i64,
        /// Parse the value as this type
        #[arg(long = "as", value_enum, default_value = "text")]
        kind: ValueKind,
    },
    /// Add a new setting
    Add {
        /// Setting key
        key: i64,
        /// Setting value
        value: String,
        /// Setting description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Update the value of an existing setting
    Update {
        /// Setting key
        key: i64,
        /// New value
        value: String,
        /// Description (accepted for symmetry, the stored one is kept)
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete a setting
    Delete {
        /// Setting key
        key: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ValueKind {
    Int,
    Float,
    Bool,
    Text,
}

pub async fn handle_settings_command(
    store: &SettingsStore,
    command: SettingsCommands,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::List => list_settings(store).await,
        SettingsCommands::Get { key, kind } => get_setting(store, key, kind).await,
        SettingsCommands::Add {
            key,
            value,
            description,
        } => {
            let entry = store
                .add(key, &value, &description)
                .await
                .with_context(|| format!("Failed to add setting {}", key))?;
            println!(
                "{} Added setting {} (id {})",
                "✓".green(),
                entry.key,
                entry.id
            );
            Ok(())
        }
        SettingsCommands::Update {
            key,
            value,
            description,
        } => {
            if !store.contains_key(key).await? {
                println!("{}", format!("No setting with key {}", key).yellow());
                return Ok(());
            }
            store.update(key, &value, &description).await?;
            println!("{} Updated setting {}", "✓".green(), key);
            Ok(())
        }
        SettingsCommands::Delete { key } => {
            if !store.contains_key(key).await? {
                println!("{}", format!("No setting with key {}", key).yellow());
                return Ok(());
            }
            store.delete(key).await?;
            println!("{} Deleted setting {}", "✓".green(), key);
            Ok(())
        }
    }
}

async fn list_settings(store: &SettingsStore) -> anyhow::Result<()> {
    let mut entries = store.load_all().await?;

    if entries.is_empty() {
        println!("{}", "No settings found".yellow());
        println!("{}", "Use 'setkeep add' to create your first setting".dimmed());
        return Ok(());
    }

    entries.sort_by_key(|e| e.key);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["ID", "Key", "Value", "Description"]);

    for entry in &entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.key.to_string(),
            entry.value.clone(),
            entry.description.clone(),
        ]);
    }

    println!("{}", table);
    println!("{}", format!("{} setting(s)", entries.len()).dimmed());
    Ok(())
}

async fn get_setting(store: &SettingsStore, key: i64, kind: ValueKind) -> anyhow::Result<()> {
    let rendered = match kind {
        ValueKind::Int => store.load_typed::<i64>(key).await?.map(|v| v.to_string()),
        ValueKind::Float => store.load_typed::<f64>(key).await?.map(|v| v.to_string()),
        ValueKind::Bool => store.load_typed::<bool>(key).await?.map(|v| v.to_string()),
        ValueKind::Text => store.load_value(key).await?,
    };

    match rendered {
        Some(value) => println!("{}", value),
        None => println!("{}", format!("No setting with key {}", key).yellow()),
    }
    Ok(())
}
