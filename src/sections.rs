//! Which part of the page the visitor is looking at.

/// Scroll offset past which the nav bar gets its shadow.
pub const SCROLLED_AFTER: f64 = 50.0;
/// Distance from the top of the viewport that decides the active section.
pub const ACTIVE_LINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Viewport-relative vertical extent of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn spans(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// First section, in page order, crossing [`ACTIVE_LINE`]. Sections that are
/// not rendered yet report `None` and are skipped.
pub fn active_section<F>(bounds_of: F) -> Option<Section>
where
    F: Fn(Section) -> Option<Bounds>,
{
    Section::ALL.into_iter().find(|section| {
        bounds_of(*section)
            .map(|b| b.spans(ACTIVE_LINE))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(2000.0));
    }

    #[test]
    fn test_active_section_picks_line_crossing() {
        // page laid out in 600px blocks, scrolled 1000px down
        let layout = |s: Section| {
            let top = s.index() as f64 * 600.0 - 1000.0;
            Some(Bounds::new(top, top + 600.0))
        };
        // line sits at page y 1100, inside the second block
        assert_eq!(active_section(layout), Some(Section::About));
    }

    #[test]
    fn test_active_section_boundaries_inclusive() {
        // about ends exactly on the line, skills starts exactly on it
        let layout = |s: Section| match s {
            Section::About => Some(Bounds::new(-500.0, 100.0)),
            Section::Skills => Some(Bounds::new(100.0, 700.0)),
            _ => Some(Bounds::new(800.0, 900.0)),
        };
        // both qualify, the earlier one wins
        assert_eq!(active_section(layout), Some(Section::About));
    }

    #[test]
    fn test_active_section_none() {
        assert_eq!(active_section(|_| None), None);
        // everything below the line, e.g. before layout
        assert_eq!(active_section(|_| Some(Bounds::new(0.0, 0.0))), None);
        // missing elements are skipped rather than stopping the search
        let layout = |s: Section| match s {
            Section::Contact => Some(Bounds::new(-20.0, 400.0)),
            _ => None,
        };
        assert_eq!(active_section(layout), Some(Section::Contact));
    }

    #[test]
    fn test_section_anchors() {
        let ids = Section::ALL.map(|s| s.id());
        assert_eq!(
            ids,
            ["hero", "about", "skills", "projects", "experience", "contact"]
        );
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::Hero.label(), "Home");
        for (i, s) in Section::ALL.into_iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
