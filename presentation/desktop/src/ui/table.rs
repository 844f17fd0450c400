use business::domain::category::model::{Category, category_name};
use business::domain::product::model::Product;

const HEADERS: [&str; 4] = ["ID", "Nombre", "Precio", "Categoría"];
const EMPTY: &str = "No hay productos disponibles";

/// Renders the product list as a plain-text table. Categories are looked up by
/// id and shown as "N/A" when unknown; prices are whole currency units.
pub fn render_products(products: &[Product], categories: &[Category]) -> String {
    if products.is_empty() {
        return format!("{}\n{}\n", HEADERS.join(" | "), EMPTY);
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|product| {
            [
                product.id.to_string(),
                product.name.clone(),
                format_price(product.price),
                category_name(categories, product.category_id)
                    .unwrap_or("N/A")
                    .to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

pub fn format_price(price: f64) -> String {
    format!("${:.0}", price)
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::{CategoryId, ProductId};

    fn product(id: &str, name: &str, price: f64, category: i64) -> Product {
        Product::from_repository(
            ProductId::new(id),
            name.to_string(),
            price,
            CategoryId::new(category),
        )
    }

    #[test]
    fn should_show_placeholder_when_no_products() {
        let table = render_products(&[], &[]);
        assert!(table.contains("No hay productos disponibles"));
    }

    #[test]
    fn should_show_category_name_or_na() {
        let categories = vec![Category::from_repository(
            CategoryId::new(1),
            "Periféricos".to_string(),
        )];
        let table = render_products(
            &[product("a", "Mouse", 10.0, 1), product("b", "Cable", 3.0, 9)],
            &categories,
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Periféricos"));
        assert!(lines[3].ends_with("N/A"));
    }

    #[test]
    fn should_round_price_to_whole_units() {
        assert_eq!(format_price(19.9), "$20");
        assert_eq!(format_price(1500.0), "$1500");
        assert_eq!(format_price(-3.2), "$-3");
    }

    #[test]
    fn should_align_columns_to_widest_cell() {
        let table = render_products(&[product("P-100", "Teclado mecánico", 80.0, 1)], &[]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0].find('|'), lines[2].find('|'));
    }
}
