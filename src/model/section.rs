//! Section extents and active-section computation
//!
//! The page is a single scrollable document; each section occupies a
//! contiguous run of rows. Extents are rebuilt from the live layout on every
//! evaluation, so a resize or content change is picked up the next frame.

/// Height in rows of the fixed navigation bar
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Rows of lookahead added to the scroll probe so a section activates
/// slightly before its top edge reaches the viewport top
pub const SECTION_PROBE_LOOKAHEAD: usize = 5;

/// Rows of breathing room left above a section when jumping to it
pub const SECTION_JUMP_MARGIN: usize = 1;

/// The fixed ordered navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}

/// One section's vertical extent in document rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionExtent {
    fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Compute the active section for a scroll offset
///
/// The probe point sits a fixed distance below the scroll offset; the last
/// section in document order containing it wins, and no section is active
/// when the probe falls outside every extent.
pub fn active_section(sections: &[SectionExtent], scroll_offset: usize) -> Option<usize> {
    let probe = scroll_offset + NAV_BAR_HEIGHT as usize + SECTION_PROBE_LOOKAHEAD;

    let mut active = None;
    for (i, section) in sections.iter().enumerate() {
        if section.contains(probe) {
            active = Some(i);
        }
    }
    active
}

/// Scroll offset that places a section's top edge just below the navbar
pub fn jump_target(section: &SectionExtent) -> usize {
    section.top.saturating_sub(SECTION_JUMP_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extents() -> Vec<SectionExtent> {
        vec![
            SectionExtent { id: SectionId::Home, top: 0, height: 12 },
            SectionExtent { id: SectionId::About, top: 12, height: 20 },
            SectionExtent { id: SectionId::Projects, top: 32, height: 30 },
        ]
    }

    #[test]
    fn test_probe_selects_containing_section() {
        let sections = extents();
        // probe = 0 + 3 + 5 = 8, inside Home
        assert_eq!(active_section(&sections, 0), Some(0));
        // probe = 10 + 8 = 18, inside About
        assert_eq!(active_section(&sections, 10), Some(1));
        // probe = 40 + 8 = 48, inside Projects
        assert_eq!(active_section(&sections, 40), Some(2));
    }

    #[test]
    fn test_at_most_one_section_active() {
        let sections = extents();
        for offset in 0..200 {
            // active_section returns at most one index by construction;
            // check it is a valid one when present
            if let Some(i) = active_section(&sections, offset) {
                assert!(i < sections.len());
            }
        }
    }

    #[test]
    fn test_no_section_outside_all_extents() {
        let sections = extents();
        // probe = 100 + 8 = 108, beyond the last extent (ends at 62)
        assert_eq!(active_section(&sections, 100), None);
    }

    #[test]
    fn test_overlapping_extents_last_match_wins() {
        let sections = vec![
            SectionExtent { id: SectionId::Home, top: 0, height: 30 },
            SectionExtent { id: SectionId::About, top: 10, height: 30 },
        ];
        // probe = 4 + 8 = 12, inside both; last in document order wins
        assert_eq!(active_section(&sections, 4), Some(1));
    }

    #[test]
    fn test_jump_target_clears_margin() {
        let section = SectionExtent { id: SectionId::About, top: 12, height: 20 };
        assert_eq!(jump_target(&section), 12 - SECTION_JUMP_MARGIN);

        let first = SectionExtent { id: SectionId::Home, top: 0, height: 12 };
        assert_eq!(jump_target(&first), 0);
    }
}
