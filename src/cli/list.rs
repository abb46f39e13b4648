use super::ui;
use crate::core::CurrencyRegistry;
use comfy_table::Cell;

pub fn render(registry: &CurrencyRegistry) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Item ID")]);

    for (name, id) in registry.iter() {
        table.add_row(vec![Cell::new(format!("{name:?}")), Cell::new(id)]);
    }

    format!(
        "{}\n\n{}\n{}",
        ui::style_text("Known currencies", ui::StyleType::Title),
        table,
        ui::style_text(
            &format!("{} currencies", registry.len()),
            ui::StyleType::Subtle
        )
    )
}

pub fn run(registry: &CurrencyRegistry) {
    println!("{}", render(registry));
}
