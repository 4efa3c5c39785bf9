//! Static keybinding reference shown in the help popup.

pub struct HelpSection {
    pub title: &'static str,
    pub bindings: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Global",
        bindings: &[
            ("Tab / Shift+Tab", "Next / previous tab"),
            ("F1", "Toggle this help"),
            ("Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "Single",
        bindings: &[
            ("Ctrl+T", "Translate"),
            ("Ctrl+O", "Toggle generation options"),
            ("Ctrl+Y", "Copy translation"),
            ("Ctrl+L", "Clear input and result"),
        ],
    },
    HelpSection {
        title: "Batch",
        bindings: &[
            ("Ctrl+T", "Translate all lines"),
            ("Ctrl+E", "Export results to CSV"),
            ("Ctrl+L", "Clear input and results"),
            ("Up / Down", "Scroll results"),
        ],
    },
    HelpSection {
        title: "Dictionary",
        bindings: &[
            ("Enter", "Search"),
            ("Up / Down", "Scroll results"),
        ],
    },
    HelpSection {
        title: "History",
        bindings: &[
            ("Type", "Filter entries"),
            ("Up / Down", "Select entry"),
            ("Ctrl+D", "Delete selected entry"),
            ("Ctrl+Y", "Copy selected translation"),
            ("Ctrl+L", "Clear all (press y to confirm)"),
        ],
    },
];

/// Number of rendered lines: a title and the bindings per section, plus a
/// blank line between sections.
pub fn line_count() -> usize {
    let sections = HELP_SECTIONS.len();
    let bindings: usize = HELP_SECTIONS.iter().map(|s| s.bindings.len()).sum();
    sections * 2 + bindings - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections_have_bindings() {
        for section in HELP_SECTIONS {
            assert!(
                !section.bindings.is_empty(),
                "section {} has no bindings",
                section.title
            );
        }
    }

    #[test]
    fn test_line_count_matches_sections() {
        let expected: usize = HELP_SECTIONS
            .iter()
            .map(|s| s.bindings.len() + 2)
            .sum::<usize>()
            - 1;
        assert_eq!(line_count(), expected);
    }

    #[test]
    fn test_every_tab_is_covered() {
        let titles: Vec<&str> = HELP_SECTIONS.iter().map(|s| s.title).collect();
        for tab in ["Single", "Batch", "Dictionary", "History"] {
            assert!(titles.contains(&tab), "missing help for {tab} tab");
        }
    }
}
