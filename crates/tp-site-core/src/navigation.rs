//! Section toggling and scroll-driven nav highlighting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hero/services content pairing selected from the top navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    #[default]
    Empresas,
    Particulares,
    Other(String),
}

impl Section {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "empresas" => Section::Empresas,
            "particulares" => Section::Particulares,
            other => Section::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Section::Empresas => "empresas",
            Section::Particulares => "particulares",
            Section::Other(id) => id,
        }
    }

    pub fn hero_id(&self) -> String {
        format!("hero-{}", self.as_str())
    }

    pub fn services_id(&self) -> String {
        format!("services-{}", self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Section {
    fn from(raw: String) -> Self {
        Section::parse(&raw)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.as_str().to_owned()
    }
}

/// Vertical extent of a `section[id]` element, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: Section,
    active_link: Option<String>,
}

impl NavigationState {
    pub fn current(&self) -> &Section {
        &self.current
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    /// Switch to `id` if the markup carries that section.
    ///
    /// Returns the newly active section, or `None` (state untouched) when
    /// `id` names no section in `present`.
    pub fn select_section(&mut self, id: &str, present: &[Section]) -> Option<&Section> {
        let wanted = Section::parse(id);
        if !present.contains(&wanted) {
            return None;
        }
        self.current = wanted;
        Some(&self.current)
    }

    pub fn is_visible(&self, section: &Section) -> bool {
        self.current == *section
    }

    pub fn set_active_link(&mut self, anchor: Option<&str>) {
        self.active_link = anchor.map(str::to_owned);
    }

    /// Scroll handler: highlight the first section containing the lookahead
    /// point. Returns the new anchor when it changed.
    pub fn sync_on_scroll(
        &mut self,
        sections: &[SectionBounds],
        scroll_y: f64,
        lookahead: f64,
    ) -> Option<&str> {
        let hit = active_section_at(sections, scroll_y + lookahead)?;
        if self.active_link.as_deref() == Some(hit) {
            return None;
        }
        self.active_link = Some(hit.to_owned());
        self.active_link.as_deref()
    }
}

/// Anchor id named by an in-page link (`#contacto` → `contacto`).
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Smooth-scroll destination for an element at `offset_top`.
pub fn scroll_target(offset_top: f64, header_offset: f64) -> f64 {
    (offset_top - header_offset).max(0.0)
}

/// First section, in document order, whose bounds contain `y`.
pub fn active_section_at(sections: &[SectionBounds], y: f64) -> Option<&str> {
    sections
        .iter()
        .find(|s| s.contains(y))
        .map(|s| s.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present() -> Vec<Section> {
        vec![Section::Empresas, Section::Particulares]
    }

    fn bounds(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_owned(),
            top,
            height,
        }
    }

    #[test]
    fn select_leaves_exactly_one_pair_visible() {
        let sections = present();
        let mut nav = NavigationState::default();
        for target in &sections {
            nav.select_section(target.as_str(), &sections)
                .expect("section exists");
            let visible: Vec<_> = sections.iter().filter(|s| nav.is_visible(s)).collect();
            assert_eq!(visible, vec![target]);
            assert_eq!(nav.current().hero_id(), format!("hero-{target}"));
            assert_eq!(nav.current().services_id(), format!("services-{target}"));
        }
    }

    #[test]
    fn unknown_section_is_a_noop() {
        let mut nav = NavigationState::default();
        nav.select_section("particulares", &present());
        assert!(nav.select_section("mayoristas", &present()).is_none());
        assert_eq!(nav.current(), &Section::Particulares);
    }

    #[test]
    fn markup_defined_sections_round_trip() {
        let custom = Section::parse("educacion");
        assert_eq!(custom, Section::Other("educacion".into()));
        assert_eq!(custom.hero_id(), "hero-educacion");
        let json = serde_json::to_string(&Section::Particulares).unwrap();
        assert_eq!(json, "\"particulares\"");
    }

    #[test]
    fn anchor_target_requires_hash_and_id() {
        assert_eq!(anchor_target("#servicios"), Some("servicios"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
    }

    #[test]
    fn scroll_target_subtracts_header_and_clamps() {
        assert_eq!(scroll_target(500.0, 80.0), 420.0);
        assert_eq!(scroll_target(30.0, 80.0), 0.0);
    }

    #[test]
    fn first_containing_section_wins() {
        let sections = vec![
            bounds("inicio", 0.0, 600.0),
            bounds("servicios", 600.0, 400.0),
            bounds("solapado", 650.0, 100.0),
        ];
        assert_eq!(active_section_at(&sections, 0.0), Some("inicio"));
        assert_eq!(active_section_at(&sections, 600.0), Some("servicios"));
        assert_eq!(active_section_at(&sections, 700.0), Some("servicios"));
        assert_eq!(active_section_at(&sections, 1000.0), None);
    }

    #[test]
    fn scroll_sync_applies_lookahead_and_reports_changes_only() {
        let sections = vec![bounds("inicio", 0.0, 600.0), bounds("galeria", 600.0, 500.0)];
        let mut nav = NavigationState::default();
        assert_eq!(nav.sync_on_scroll(&sections, 0.0, 100.0), Some("inicio"));
        assert_eq!(nav.sync_on_scroll(&sections, 10.0, 100.0), None);
        assert_eq!(nav.sync_on_scroll(&sections, 500.0, 100.0), Some("galeria"));
        // Past the last section the highlight stays where it was.
        assert_eq!(nav.sync_on_scroll(&sections, 5_000.0, 100.0), None);
        assert_eq!(nav.active_link(), Some("galeria"));
    }
}
