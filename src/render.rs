//! TUI rendering for campus-events types.
//!
//! Extension traits and small wrappers that add colored terminal output to
//! campus-events-core types using owo_colors.

use campus_events_core::registration::CatalogStats;
use campus_events_core::{Event, FillLevel};
use owo_colors::OwoColorize;

/// Width of the occupancy bar, in cells
const BAR_WIDTH: usize = 20;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize a category badge
fn category_badge(category: &str) -> String {
    let label = format!("[{}]", category);
    match category {
        "Workshop" => label.blue().to_string(),
        "Hackathon" => label.purple().to_string(),
        "Tech Talk" => label.green().to_string(),
        "Career" => label.yellow().to_string(),
        "Study Group" => label.bright_magenta().to_string(),
        _ => label.dimmed().to_string(),
    }
}

impl Render for FillLevel {
    fn render(&self) -> String {
        match self {
            FillLevel::Low => "low".green().to_string(),
            FillLevel::Medium => "filling up".yellow().to_string(),
            FillLevel::High => "almost full".red().to_string(),
        }
    }
}

fn occupancy_bar(event: &Event) -> String {
    let filled = ((event.percent_full() / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar = "█".repeat(filled);
    let rest = "░".repeat(BAR_WIDTH - filled);

    let bar = match event.fill_level() {
        FillLevel::Low => bar.green().to_string(),
        FillLevel::Medium => bar.yellow().to_string(),
        FillLevel::High => bar.red().to_string(),
    };

    format!("{}{}", bar, rest.dimmed())
}

/// One event, as shown in a listing.
pub struct EventCard<'a> {
    pub event: &'a Event,
    pub registered: bool,
}

impl Render for EventCard<'_> {
    fn render(&self) -> String {
        let event = self.event;

        let status = if self.registered {
            "✓ Registered".green().bold().to_string()
        } else if event.is_full() {
            "Event Full".red().to_string()
        } else {
            format!("{} seats left", event.available_seats())
        };

        let lines = [
            format!(
                "{} {} {}",
                format!("#{}", event.id).dimmed(),
                event.title.bold(),
                category_badge(&event.category)
            ),
            format!("   {}", event.description),
            format!("   📅 {}", event.long_date()),
            format!("   🕒 {}", event.time),
            format!("   📍 {}", event.location),
            format!(
                "   {} {} / {} registered",
                occupancy_bar(event),
                event.registered,
                event.capacity
            ),
            format!("   {}", status),
        ];

        lines.join("\n")
    }
}

/// The category tab strip with the selected tab highlighted.
pub struct CategoryTabs<'a> {
    pub tabs: &'a [String],
    pub selected: &'a str,
}

impl Render for CategoryTabs<'_> {
    fn render(&self) -> String {
        self.tabs
            .iter()
            .map(|tab| {
                if tab == self.selected {
                    format!("[{}]", tab).reversed().to_string()
                } else {
                    tab.dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Render for CatalogStats {
    fn render(&self) -> String {
        format!(
            "{} total events   {} total capacity   {} total registered",
            self.total_events.bold(),
            self.total_capacity.bold(),
            self.total_registered.bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_events_core::EventCatalog;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn card_shows_counts_and_status() {
        let catalog = EventCatalog::seeded();
        let event = catalog.get_event(5).unwrap();

        let card = strip_ansi(&EventCard { event, registered: false }.render());
        assert!(card.contains("#5 Containers & Kubernetes Workshop [Workshop]"));
        assert!(card.contains("Tuesday, February 25, 2025"));
        assert!(card.contains("48 / 50 registered"));
        assert!(card.contains("2 seats left"));

        let card = strip_ansi(&EventCard { event, registered: true }.render());
        assert!(card.contains("✓ Registered"));
    }

    #[test]
    fn full_event_card() {
        let mut event = EventCatalog::seeded().get_event(6).unwrap().clone();
        event.registered = event.capacity;

        let card = strip_ansi(&EventCard { event: &event, registered: false }.render());
        assert!(card.contains("Event Full"));
        assert!(card.contains(&"█".repeat(BAR_WIDTH)));
    }

    #[test]
    fn tabs_highlight_selection() {
        let tabs = vec!["All".to_string(), "Career".to_string(), "Registered".to_string()];
        let rendered = strip_ansi(&CategoryTabs { tabs: &tabs, selected: "Career" }.render());
        assert_eq!(rendered, "All  [Career]  Registered");
    }
}
