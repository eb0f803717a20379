use anyhow::Result;
use std::fs;
use std::path::Path;

use vidquiz::config::AppConfig;
use vidquiz::models::overlay::OverlayRow;
use vidquiz::services::database::Database;

/// Import a JSON export of overlay rows into the `overlay_rows` collection.
///
/// The export format is an array of arrays of strings, one inner array per
/// sheet row, in the original column order. Rows are appended in file order
/// so overlay ids (row positions) line up with the source sheet.
#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "overlay_rows.json".to_string());

    println!("Importing overlay rows from {}...", path);

    if !Path::new(&path).exists() {
        println!("❌ Export file not found: {}", path);
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    let cells: Vec<Vec<String>> = serde_json::from_str(&content)?;

    if cells.is_empty() {
        println!("⚠️ Export file contains no rows, nothing to do");
        return Ok(());
    }

    let rows: Vec<OverlayRow> = cells.iter().map(|row| OverlayRow::from_cells(row)).collect();

    let config = AppConfig::load()?;
    let db = Database::new(&config.database.url, &config.database.name).await?;

    let existing = db
        .overlay_rows()
        .count_documents(None, None)
        .await?;
    if existing > 0 {
        println!(
            "❌ overlay_rows already contains {} rows; refusing to append a second export",
            existing
        );
        return Ok(());
    }

    db.overlay_rows().insert_many(&rows, None).await?;

    println!("\n🎉 Import completed!");
    println!("✅ Imported: {} rows", rows.len());

    Ok(())
}
