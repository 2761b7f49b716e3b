use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tagstream_wire::TypeTag;

use crate::cmd::TagsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct TagRow {
    byte: u8,
    kind: &'static str,
}

pub fn run(_args: TagsArgs, format: OutputFormat) -> CliResult<i32> {
    let rows: Vec<TagRow> = TypeTag::ALL
        .iter()
        .map(|tag| TagRow {
            byte: tag.byte(),
            kind: tag.name(),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["BYTE", "KIND"]);
            for row in &rows {
                table.add_row(vec![format!("0x{:02X}", row.byte), row.kind.to_string()]);
            }
            println!("{table}");
        }
    }

    Ok(SUCCESS)
}
