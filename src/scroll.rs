use crate::{
    config::ScrollConfig,
    motion::{interpolate, Ease, Tween},
};

/// Id reported when there are no sections to pick from.
pub const DEFAULT_SECTION: &str = "home";

/// Layout box of a named page region, measured from the live document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Builds a section from a viewport-relative bounding box, shifting its
    /// top into document coordinates by the current scroll offset.
    pub fn from_client_rect(
        id: impl Into<String>,
        client_top: f64,
        height: f64,
        scroll_y: f64,
    ) -> Self {
        Self::new(id, client_top + sanitize(scroll_y), height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub active_section_id: String,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            active_section_id: DEFAULT_SECTION.to_string(),
        }
    }
}

/// Parallax translation and fade applied to the hero region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub progress: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self {
            progress: 0.0,
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

impl HeroTransform {
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0); opacity: {:.3};",
            self.translate_y, self.opacity
        )
    }
}

/// Picks the section currently under the nav bar.
///
/// A section qualifies once its top offset is at or above `scroll_y + probe_offset`.
/// Of the qualifying sections the one furthest down the page wins; when nothing
/// qualifies yet the first section is reported, and an empty list reports
/// [`DEFAULT_SECTION`].
pub fn update_active_section(scroll_y: f64, sections: &[Section], probe_offset: f64) -> String {
    let Some(first) = sections.first() else {
        return DEFAULT_SECTION.to_string();
    };
    let probe = sanitize(scroll_y) + probe_offset;
    sections
        .iter()
        .filter(|s| s.top <= probe)
        // max_by keeps the last of equal elements, so ties go to document order
        .max_by(|a, b| a.top.total_cmp(&b.top))
        .unwrap_or(first)
        .id
        .clone()
}

/// Maps `scroll_y` over `[0, max_distance]` onto a hero shift of `[0, -shift]`
/// and an opacity of `[1, 0]`, clamped at both ends.
pub fn compute_hero_transform(scroll_y: f64, max_distance: f64, shift: f64) -> HeroTransform {
    let scroll_y = sanitize(scroll_y);
    let progress = if max_distance.is_finite() && max_distance > 0.0 {
        (scroll_y / max_distance).clamp(0.0, 1.0)
    } else if scroll_y > 0.0 {
        1.0
    } else {
        0.0
    };
    HeroTransform {
        progress,
        translate_y: interpolate(progress, &Tween::new(0.0, -shift, Ease::Linear)),
        opacity: interpolate(progress, &Tween::new(1.0, 0.0, Ease::Linear)),
    }
}

fn sanitize(scroll_y: f64) -> f64 {
    if scroll_y.is_finite() {
        scroll_y
    } else {
        0.0
    }
}

/// Single owner of the page's [`ScrollState`].
///
/// Only the page controller holds one of these; everything else reads the
/// state it publishes.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        let active_section_id = config
            .sections
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_SECTION.to_string());
        Self {
            config,
            state: ScrollState {
                scroll_y: 0.0,
                active_section_id,
            },
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Records a scroll sample. `layout` is `None` until the sections have
    /// been measured, in which case the previous active section is kept.
    pub fn observe(&mut self, scroll_y: f64, layout: Option<&[Section]>) -> &ScrollState {
        self.state.scroll_y = sanitize(scroll_y);
        if let Some(sections) = layout {
            let active = update_active_section(scroll_y, sections, self.config.probe_offset);
            if active != self.state.active_section_id {
                log::debug!(
                    "active section {} -> {} at {:.0}px",
                    self.state.active_section_id,
                    active,
                    self.state.scroll_y
                );
                self.state.active_section_id = active;
            }
        }
        &self.state
    }

    pub fn hero(&self) -> HeroTransform {
        compute_hero_transform(
            self.state.scroll_y,
            self.config.hero_distance,
            self.config.hero_shift,
        )
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 800.0),
            Section::new("skills", 1600.0, 900.0),
        ]
    }

    #[test]
    fn test_active_section_examples() {
        let sections = page();
        assert_eq!(update_active_section(900.0, &sections, 100.0), "about");
        assert_eq!(update_active_section(1700.0, &sections, 100.0), "skills");
        assert_eq!(update_active_section(0.0, &sections, 100.0), "home");
    }

    #[test]
    fn test_active_section_boundaries() {
        let sections = page();
        // the probe reaches "about" exactly at 700
        assert_eq!(update_active_section(699.0, &sections, 100.0), "home");
        assert_eq!(update_active_section(700.0, &sections, 100.0), "about");
        assert_eq!(update_active_section(1499.9, &sections, 100.0), "about");
        assert_eq!(update_active_section(1500.0, &sections, 100.0), "skills");
        assert_eq!(update_active_section(1_000_000.0, &sections, 100.0), "skills");
    }

    #[test]
    fn test_active_section_before_first() {
        let sections = vec![
            Section::new("intro", 400.0, 100.0),
            Section::new("outro", 900.0, 100.0),
        ];
        assert_eq!(update_active_section(0.0, &sections, 100.0), "intro");
        assert_eq!(update_active_section(-250.0, &sections, 100.0), "intro");
    }

    #[test]
    fn test_active_section_empty_and_non_finite() {
        assert_eq!(update_active_section(500.0, &[], 100.0), DEFAULT_SECTION);
        assert_eq!(update_active_section(f64::NAN, &page(), 100.0), "home");
    }

    #[test]
    fn test_active_section_ties_follow_document_order() {
        let sections = vec![
            Section::new("home", 0.0, 0.0),
            Section::new("collapsed", 500.0, 0.0),
            Section::new("next", 500.0, 400.0),
        ];
        assert_eq!(update_active_section(450.0, &sections, 100.0), "next");
    }

    #[test]
    fn test_active_section_idempotent() {
        let sections = page();
        let a = update_active_section(1234.0, &sections, 100.0);
        let b = update_active_section(1234.0, &sections, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hero_transform_endpoints() {
        let start = compute_hero_transform(0.0, 1000.0, 150.0);
        assert_eq!(start.translate_y, 0.0);
        assert_eq!(start.opacity, 1.0);

        let end = compute_hero_transform(1000.0, 1000.0, 150.0);
        assert_eq!(end.translate_y, -150.0);
        assert_eq!(end.opacity, 0.0);

        let past = compute_hero_transform(1500.0, 1000.0, 150.0);
        assert_eq!(past, end);
    }

    #[test]
    fn test_hero_transform_midpoint_and_negative() {
        let mid = compute_hero_transform(250.0, 1000.0, 200.0);
        assert!((mid.progress - 0.25).abs() < 1e-12);
        assert!((mid.translate_y + 50.0).abs() < 1e-12);
        assert!((mid.opacity - 0.75).abs() < 1e-12);

        let above = compute_hero_transform(-80.0, 1000.0, 200.0);
        assert_eq!(above, HeroTransform::default());
    }

    #[test]
    fn test_hero_transform_degenerate_distance() {
        assert_eq!(compute_hero_transform(0.0, 0.0, 100.0).progress, 0.0);
        assert_eq!(compute_hero_transform(10.0, 0.0, 100.0).progress, 1.0);
        assert_eq!(compute_hero_transform(10.0, f64::NAN, 100.0).progress, 1.0);
    }

    #[test]
    fn test_tracker_keeps_active_when_unmeasured() {
        let mut tracker = ScrollTracker::default();
        let sections = vec![
            Section::new("home", 0.0, 900.0),
            Section::new("skills", 900.0, 700.0),
        ];
        assert_eq!(tracker.observe(950.0, Some(&sections)).active_section_id, "skills");

        let state = tracker.observe(10.0, None);
        assert_eq!(state.active_section_id, "skills");
        assert_eq!(state.scroll_y, 10.0);

        assert_eq!(tracker.observe(10.0, Some(&sections)).active_section_id, "home");
    }

    #[test]
    fn test_section_from_client_rect_uses_document_top() {
        // scrolled 1200px, "skills" is 300px below the viewport top
        let skills = Section::from_client_rect("skills", 300.0, 900.0, 1200.0);
        assert_eq!(skills.top, 1500.0);
        // already scrolled past: negative client top
        let home = Section::from_client_rect("home", -1200.0, 800.0, 1200.0);
        assert_eq!(home.top, 0.0);
        assert_eq!(Section::from_client_rect("x", 40.0, 0.0, f64::NAN).top, 40.0);

        let layout = vec![
            home,
            Section::from_client_rect("about", -400.0, 800.0, 1200.0),
            skills,
        ];
        assert_eq!(update_active_section(1200.0, &layout, 100.0), "about");
        assert_eq!(update_active_section(1400.0, &layout, 100.0), "skills");
    }

    #[test]
    fn test_tracker_hero_follows_scroll() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(tracker.config().hero_distance, None);
        let hero = tracker.hero();
        assert_eq!(hero.progress, 1.0);
        assert_eq!(hero.opacity, 0.0);
        assert_eq!(hero.translate_y, -tracker.config().hero_shift);
    }
}
