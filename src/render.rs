use crate::config::SiteOptions;
use crate::page::Page;
use crate::photo::normalize_photo_path;
use crate::row::Row;

/// Escape text for use in HTML element content or a double-quoted attribute.
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Subtitle line: `Hole N`, then ` · Par P` and ` · Y yds` when present.
pub fn format_subtitle(hole: &str, par: &str, yardage: &str) -> String {
    let mut sub = format!("Hole {hole}");
    if !par.is_empty() {
        sub.push_str(&format!(" · Par {par}"));
    }
    if !yardage.is_empty() {
        sub.push_str(&format!(" · {yardage} yds"));
    }
    sub
}

/// Display model of one featured hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub image_src: String,
    pub alt: String,
}

impl Card {
    /// Build a card for `row`, resolving its photo under `photo_base`.
    pub fn from_row(row: &Row, photo_base: &str) -> Self {
        Self {
            title: row.course().to_string(),
            subtitle: format_subtitle(row.hole(), row.par(), row.yardage()),
            image_src: format!("{photo_base}{}", normalize_photo_path(row.photo())),
            alt: format!("{} – Hole {}", row.course(), row.hole()),
        }
    }

    /// `.hole-card` markup. The image keeps its full-size source in `data-large`.
    pub fn to_html(&self) -> String {
        let src = escape_html(&self.image_src);
        format!(
            concat!(
                "<div class=\"hole-card\">\n",
                "  <img class=\"hole-img\" src=\"{src}\" data-large=\"{src}\" loading=\"lazy\" alt=\"{alt}\">\n",
                "  <div class=\"hole-title\">{title}</div>\n",
                "  <div class=\"hole-sub\">{sub}</div>\n",
                "</div>\n"
            ),
            src = src,
            alt = escape_html(&self.alt),
            title = escape_html(&self.title),
            sub = escape_html(&self.subtitle),
        )
    }
}

/// Render the featured picks into `page`.
///
/// Clears the container first. With no picks the "no photos" notice is shown
/// and nothing else happens. Returns the rendered cards; index `i` is the
/// click target of the `i`th card image.
pub fn render_featured<P: Page + ?Sized>(
    page: &mut P,
    picks: &[&Row],
    options: &SiteOptions,
) -> Vec<Card> {
    page.clear_featured();

    if picks.is_empty() {
        page.show_no_photos();
        return Vec::new();
    }

    picks
        .iter()
        .map(|row| {
            let card = Card::from_row(row, &options.photo_base);
            page.append_card(&card);
            card
        })
        .collect()
}
