use comfy_table::{ContentArrangement, Table};
use ll_core::LodgeContent;

pub fn run() -> Result<(), String> {
    let lodge = LodgeContent::new();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Room", "Description", "Clue", "Tool"]);

    for room in lodge.rooms() {
        let clue = lodge
            .clue_in(room.id)
            .map_or_else(|| "-".to_string(), |c| c.name.clone());
        let tool = lodge
            .tool_in(room.id)
            .map_or_else(|| "-".to_string(), |t| t.name.clone());
        table.add_row(vec![
            (room.id.index() + 1).to_string(),
            room.name.clone(),
            room.description.clone(),
            clue,
            tool,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", lodge.rooms().len());

    Ok(())
}
