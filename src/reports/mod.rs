use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use quadbreak::alphabet::Alphabet;
use quadbreak::pipeline::MonoBreak;

/// Two-row grid: plaintext letters over the ciphertext letters that stand for them.
pub fn print_key_grid(alphabet: &Alphabet, key: &str) {
    println!("\nRecovered Key:");
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let plain: Vec<Cell> = std::iter::once(Cell::new("plain").add_attribute(Attribute::Bold))
        .chain(
            alphabet
                .as_str()
                .chars()
                .map(|c| Cell::new(c).set_alignment(CellAlignment::Center)),
        )
        .collect();
    let cipher: Vec<Cell> = std::iter::once(Cell::new("cipher").add_attribute(Attribute::Bold))
        .chain(key.chars().map(|c| {
            Cell::new(c.to_ascii_uppercase())
                .set_alignment(CellAlignment::Center)
                .fg(Color::Cyan)
        }))
        .collect();

    table.add_row(plain);
    table.add_row(cipher);
    println!("{}", table);
}

pub fn print_search_summary(result: &MonoBreak) {
    let s = &result.search;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Trials"),
        Cell::new("Plateau"),
        Cell::new("Stop"),
        Cell::new("Time (s)"),
    ]);

    for i in 0..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let stop = if s.terminated_early {
        "plateau"
    } else if s.cancelled {
        "cancelled"
    } else {
        "budget"
    };

    let score_cell = if s.is_degenerate() {
        Cell::new("0 (no confidence)").fg(Color::Red)
    } else {
        Cell::new(s.score).fg(Color::Cyan)
    };

    table.add_row(vec![
        score_cell,
        Cell::new(s.trials),
        Cell::new(s.plateau_hits),
        Cell::new(stop),
        Cell::new(format!("{:.2}", s.elapsed.as_secs_f32())),
    ]);
    println!("\n{}", table);
}
