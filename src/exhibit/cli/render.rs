use chrono::{DateTime, Utc};
use colored::Colorize;
use exhibit::api::{CmdMessage, MessageLevel};
use exhibit::config::{ExhibitConfig, CONFIG_KEYS};
use exhibit::gateway::GalleryPage;
use exhibit::model::{BookmarkedArtwork, Source};
use exhibit::store::Exhibition;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_gallery(source: Source, page: &GalleryPage) -> String {
    let position = match page.total_pages() {
        Some(pages) if pages > 0 => format!("page {} of {}", page.page, pages),
        _ => format!("page {}", page.page),
    };
    let mut out = format!(
        "{} {}\n\n",
        source.display_name().bold(),
        position.dimmed()
    );
    for artwork in &page.artworks {
        out.push_str(&artwork_line(artwork, ""));
        out.push('\n');
    }
    out
}

/// Artworks from mixed museums, tagged with their source.
pub(super) fn render_listed(artworks: &[BookmarkedArtwork]) -> String {
    let mut out = String::new();
    for artwork in artworks {
        let tag = format!("{:<10}", artwork.source.to_string());
        out.push_str(&format!("{}{}\n", tag.cyan(), artwork_line(artwork, "")));
    }
    out
}

pub(super) fn render_exhibition(exhibition: &Exhibition) -> String {
    let mut out = String::new();
    for source in Source::ALL {
        let records = exhibition.by_source(source);
        if records.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            source.display_name().bold(),
            format!("({})", records.len()).dimmed()
        ));
        for artwork in records {
            let added = artwork.added_at.map(format_time_ago).unwrap_or_default();
            out.push_str(&artwork_line(artwork, &added));
            out.push('\n');
        }
    }
    out
}

pub(super) fn render_detail(artwork: &BookmarkedArtwork) -> String {
    let mut out = format!("{}\n", artwork.display_title().bold());
    out.push_str("--------------------------------\n");
    out.push_str(&format!("Artist:  {}\n", artwork.display_artist()));
    out.push_str(&format!("Date:    {}\n", artwork.display_date()));
    out.push_str(&format!("Museum:  {}\n", artwork.source.display_name()));
    if let Some(image) = &artwork.image {
        out.push_str(&format!("Image:   {}\n", image.underline()));
    }
    out.push_str(&format!(
        "{}\n",
        artwork.source.detail_route(artwork.id).dimmed()
    ));
    out
}

pub(super) fn render_config(config: &ExhibitConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn artwork_line(artwork: &BookmarkedArtwork, right: &str) -> String {
    let id = format!("{:>width$}  ", artwork.id, width = ID_WIDTH - 2);
    let text = format!(
        "{} · {} ({})",
        artwork.display_title(),
        artwork.display_artist(),
        artwork.display_date()
    );

    let right = if right.is_empty() {
        String::new()
    } else {
        format!("{:>width$}", right, width = TIME_WIDTH)
    };
    let available = LINE_WIDTH.saturating_sub(ID_WIDTH + right.width());
    let shown = truncate_to_width(&text, available);
    let padding = if right.is_empty() {
        0
    } else {
        available.saturating_sub(shown.width())
    };

    format!(
        "{}{}{}{}",
        id.yellow(),
        shown,
        " ".repeat(padding),
        right.dimmed()
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit::gateway::GalleryRequest;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("富士山下の図", 6), "富士…");
    }

    #[test]
    fn missing_fields_render_as_sentinels() {
        plain();
        let line = artwork_line(&BookmarkedArtwork::new(Source::Cleveland, 160011), "");
        assert!(line.contains("160011"));
        assert!(line.contains("Untitled · Unknown Artist (Date Unknown)"));
    }

    #[test]
    fn gallery_header_shows_page_count_when_known() {
        plain();
        let mut page = GalleryPage::empty(&GalleryRequest::new(2, 60));
        assert!(render_gallery(Source::Met, &page).contains("page 2\n"));

        page.total = Some(130);
        let out = render_gallery(Source::Met, &page);
        assert!(out.starts_with("The Metropolitan Museum of Art page 2 of 3"));
    }

    #[test]
    fn gallery_header_without_results_has_no_page_count() {
        plain();
        let mut page = GalleryPage::empty(&GalleryRequest::new(1, 60));
        page.total = Some(0);
        let out = render_gallery(Source::Cleveland, &page);
        assert!(out.contains("page 1\n"));
        assert!(!out.contains("page 1 of"));
    }

    #[test]
    fn exhibition_groups_by_museum() {
        plain();
        let exhibition = Exhibition::from_records(vec![
            BookmarkedArtwork::new(Source::Cleveland, 2).with_title("Twilight in the Wilderness"),
            BookmarkedArtwork::new(Source::Met, 1).with_title("Wheat Field with Cypresses"),
        ]);
        let out = render_exhibition(&exhibition);

        let met = out.find("The Metropolitan Museum of Art (1)").unwrap();
        let cma = out.find("The Cleveland Museum of Art (1)").unwrap();
        assert!(met < cma);
        assert!(out.contains("Twilight in the Wilderness"));
    }

    #[test]
    fn config_lists_every_key() {
        let out = render_config(&ExhibitConfig::default());
        assert_eq!(out.lines().count(), CONFIG_KEYS.len());
        assert!(out.contains("dedup = source-and-id\n"));
    }
}
