//! # Seed Data Loader
//!
//! Populates a database file with the sample tool catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./toolrent_dev.db (default)
//! cargo run -p toolrent-db --bin seed
//!
//! # Specify database path
//! cargo run -p toolrent-db --bin seed -- --db ./data/toolrent.db
//! ```
//!
//! Seeding is skipped when the catalog already has tools in it.

use std::env;
use toolrent_db::{Database, DbConfig, SAMPLE_TOOLS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./toolrent_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("ToolRent Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./toolrent_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("ToolRent Seed Data Loader");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let inserted = db.tools().seed_sample_tools().await?;
    if inserted == 0 {
        let existing = db.tools().count().await?;
        println!("⚠ Database already has {} tools", existing);
        println!("  Skipping seed to avoid duplicates.");
    } else {
        println!("✓ Inserted {} of {} sample tools", inserted, SAMPLE_TOOLS.len());
        for tool in db.tools().list().await? {
            println!("  #{} {} ({}/day)", tool.id, tool.name, tool.daily_rate());
        }
    }

    db.close().await;
    Ok(())
}
