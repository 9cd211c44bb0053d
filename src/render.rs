use crate::domain::model::{Restaurant, RestaurantList, SortOrder};

/// Renders the list's current order as an aligned text table. Rows are
/// fetched through the bounds-checked snapshot API only.
pub fn render_table(list: &RestaurantList, limit: Option<usize>) -> String {
    let shown = match limit {
        Some(limit) => limit.min(list.count()),
        None => list.count(),
    };

    let mut rows: Vec<[String; 4]> = Vec::with_capacity(shown);
    for index in 0..shown {
        if let Some(restaurant) = list.restaurant_at(index) {
            rows.push([
                format!("{}", index + 1),
                restaurant.name.clone(),
                format!("{:.1} mi", restaurant.distance),
                address_line(restaurant),
            ]);
        }
    }

    let headers = ["#", "NAME", "DISTANCE", "ADDRESS"];
    let mut widths: [usize; 4] = [headers[0].len(), headers[1].len(), headers[2].len(), headers[3].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&headers.map(String::from), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    if shown < list.count() {
        out.push_str(&format!("... and {} more\n", list.count() - shown));
    }
    out
}

pub fn render_footer(order: SortOrder) -> String {
    format!(
        "Sorted by {}. [d] sort by distance  [n] sort by name  [q] quit",
        order.label()
    )
}

fn address_line(restaurant: &Restaurant) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(address) = restaurant.address.as_deref() {
        parts.push(address);
    }
    if let Some(city) = restaurant.city.as_deref() {
        parts.push(city);
    }
    if let Some(state) = restaurant.state.as_deref() {
        parts.push(state);
    }
    parts.join(", ")
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Pad by character count so unicode names stay aligned.
        for _ in cell.chars().count()..*width {
            line.push(' ');
        }
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Restaurant;

    fn restaurant(name: &str, distance: f64, city: Option<&str>) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            distance,
            address: None,
            city: city.map(String::from),
            state: None,
            zip_code: None,
            phone: None,
        }
    }

    #[test]
    fn rows_follow_the_model_order() {
        let list = RestaurantList::new(vec![
            restaurant("Far Out Pizza", 6.3, Some("Oakland")),
            restaurant("Corner Slice", 0.4, Some("SF")),
        ]);
        let table = render_table(&list, None);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('#'));
        assert!(lines[1].contains("Corner Slice"));
        assert!(lines[1].contains("0.4 mi"));
        assert!(lines[2].contains("Far Out Pizza"));
    }

    #[test]
    fn limit_truncates_and_reports_the_remainder() {
        let list = RestaurantList::new(vec![
            restaurant("A", 1.0, None),
            restaurant("B", 2.0, None),
            restaurant("C", 3.0, None),
        ]);
        let table = render_table(&list, Some(2));
        assert!(table.contains("... and 1 more"));
        assert!(!table.contains("3.0 mi"));
    }

    #[test]
    fn empty_list_renders_just_the_header() {
        let list = RestaurantList::new(Vec::new());
        let table = render_table(&list, None);
        assert_eq!(table.lines().count(), 1);
    }
}
