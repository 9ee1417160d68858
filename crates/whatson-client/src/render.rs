//! Terminal rendering of event views.
//!
//! Renderers are plain presentation strategies over [`EventView`]: all
//! placeholder substitution already happened in the core, so these functions
//! only arrange text.

use whatson_core::{EventView, FacetSet, ViewMode};

/// Shown when the visible set is empty.
pub const NO_EVENTS_TEXT: &str = "No events to display.";

/// Card width in grid view, in characters.
const GRID_CARD_WIDTH: usize = 24;

/// Renders the views in the requested mode.
pub fn render(views: &[EventView], mode: ViewMode, grid_columns: usize) -> String {
    match mode {
        ViewMode::List => render_list(views),
        ViewMode::Grid => render_grid(views, grid_columns),
    }
}

/// List view: one block per event, full detail.
pub fn render_list(views: &[EventView]) -> String {
    if views.is_empty() {
        return NO_EVENTS_TEXT.to_string();
    }

    let blocks: Vec<String> = views.iter().map(list_block).collect();
    blocks.join("\n\n")
}

fn list_block(view: &EventView) -> String {
    let mut lines = vec![
        view.title.clone(),
        format!("  {} | {}", view.date_label, view.venue),
    ];

    let classification: Vec<&str> = [view.event_type.as_deref(), view.category.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !classification.is_empty() {
        lines.push(format!("  {}", classification.join(" / ")));
    }

    if let Some(ref description) = view.description {
        lines.push(format!("  {description}"));
    }
    if let Some(ref url) = view.details_url {
        lines.push(format!("  {url}"));
    }

    lines.join("\n")
}

/// Grid view: compact cards arranged in columns.
pub fn render_grid(views: &[EventView], columns: usize) -> String {
    if views.is_empty() {
        return NO_EVENTS_TEXT.to_string();
    }
    let columns = columns.max(1);

    let rows: Vec<String> = views
        .chunks(columns)
        .map(|row| {
            let cards: Vec<[String; 3]> = row
                .iter()
                .map(|view| {
                    [
                        clip(&view.title, GRID_CARD_WIDTH),
                        clip(&view.date_label, GRID_CARD_WIDTH),
                        clip(&view.venue, GRID_CARD_WIDTH),
                    ]
                })
                .collect();

            (0..3)
                .map(|line| {
                    cards
                        .iter()
                        .map(|card| format!("{:<width$}", card[line], width = GRID_CARD_WIDTH))
                        .collect::<Vec<_>>()
                        .join("  ")
                        .trim_end()
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    rows.join("\n\n")
}

/// The filter choice lists, one section per facet dimension.
pub fn render_facets(facets: &FacetSet) -> String {
    let section = |name: &str, values: &[String]| {
        let mut out = format!("{name}:");
        if values.is_empty() {
            out.push_str("\n  (none)");
        } else {
            for value in values {
                out.push_str("\n  - ");
                out.push_str(value);
            }
        }
        out
    };

    [
        section("Event types", &facets.event_types),
        section("Venues", &facets.venues),
        section("Categories", &facets.categories),
    ]
    .join("\n\n")
}

/// The single user-visible message for a failed load.
pub fn render_error(message: &str) -> String {
    format!("Could not load events: {message}\n{NO_EVENTS_TEXT}")
}

/// Truncates to `width` characters, marking the cut with `...`.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use whatson_core::{CatalogEvent, Schedule};

    fn sample_views() -> Vec<EventView> {
        let full = CatalogEvent::new()
            .with_title("Modern Art Fair")
            .with_short_description("Contemporary works")
            .with_schedule(Schedule::new().with_single_day(true).with_date(
                chrono::Utc.with_ymd_and_hms(2025, 12, 15, 0, 0, 0).unwrap(),
            ))
            .with_event_type("Exhibition")
            .with_category("Visual Arts")
            .with_venue("City Hall")
            .with_details_url("https://example.com/art");
        let bare = CatalogEvent::new();
        vec![EventView::from_event(&full), EventView::from_event(&bare)]
    }

    #[test]
    fn list_view_golden() {
        insta::assert_snapshot!(render_list(&sample_views()), @r"
        Modern Art Fair
          15 Dec 2025 | City Hall
          Exhibition / Visual Arts
          Contemporary works
          https://example.com/art

        Untitled Event
          Date TBA | Venue TBA
        ");
    }

    #[test]
    fn single_column_grid() {
        let output = render_grid(&sample_views(), 1);
        assert_eq!(
            output,
            "Modern Art Fair\n15 Dec 2025\nCity Hall\n\nUntitled Event\nDate TBA\nVenue TBA"
        );
    }

    #[test]
    fn multi_column_grid_puts_cards_side_by_side() {
        let output = render_grid(&sample_views(), 2);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Modern Art Fair"));
        assert!(lines[0].ends_with("Untitled Event"));
        assert!(lines[1].contains("15 Dec 2025"));
        assert!(lines[1].contains("Date TBA"));
    }

    #[test]
    fn empty_set_renders_placeholder_text() {
        assert_eq!(render_list(&[]), NO_EVENTS_TEXT);
        assert_eq!(render_grid(&[], 3), NO_EVENTS_TEXT);
    }

    #[test]
    fn render_dispatches_on_mode() {
        let views = sample_views();
        assert_eq!(render(&views, ViewMode::List, 3), render_list(&views));
        assert_eq!(render(&views, ViewMode::Grid, 3), render_grid(&views, 3));
    }

    #[test]
    fn clip_limits_width() {
        let long = "An Exceptionally Long Event Title That Overflows";
        let clipped = clip(long, 24);
        assert_eq!(clipped.chars().count(), 24);
        assert!(clipped.ends_with("..."));
        assert_eq!(clip("Short", 24), "Short");
    }

    #[test]
    fn facet_listing() {
        let facets = FacetSet {
            event_types: vec!["Concert".to_string(), "Exhibition".to_string()],
            venues: vec!["City Hall".to_string()],
            categories: vec![],
        };
        let output = render_facets(&facets);
        assert!(output.contains("Event types:\n  - Concert\n  - Exhibition"));
        assert!(output.contains("Venues:\n  - City Hall"));
        assert!(output.contains("Categories:\n  (none)"));
    }

    #[test]
    fn error_banner_includes_empty_state() {
        let output = render_error("catalog API returned HTTP 502");
        assert!(output.contains("Could not load events"));
        assert!(output.contains(NO_EVENTS_TEXT));
    }
}
