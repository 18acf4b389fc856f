use crate::domain::model::ScheduledMatch;

const HEADERS: [&str; 6] = ["Weekend", "Leg", "Home Team", "Away Team", "Stadium", "Town"];

/// Renders the match list as an aligned console table, one row per match in
/// weekend order.
pub fn render_matches(matches: &[ScheduledMatch]) -> String {
    let rows: Vec<[String; 6]> = matches
        .iter()
        .map(|m| {
            [
                m.weekend.to_string(),
                m.leg.to_string(),
                m.home_team.clone(),
                m.away_team.clone(),
                m.stadium.clone(),
                m.town.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
