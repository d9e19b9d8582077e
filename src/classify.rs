//! The classify module maps a section identifier, and optionally the section element,
//! to a sitemap priority and change frequency.
//!
//! Matching is a case-insensitive substring test against an ordered keyword table,
//! so an earlier short keyword shadows a later, more specific one (`about` wins over
//! `about-me`, and also matches inside unrelated identifiers). The table order is kept
//! as is for output compatibility.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::constants::{
    PROJECT_CLASS_PATTERN, PROJECT_CONTENT_SELECTOR, PUBLICATION_CLASS_PATTERN,
    PUBLICATION_CONTENT_SELECTOR,
};
use crate::{ChangeFrequency, Priority};

/// Priority and change frequency derived for one entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Classification {
    pub priority: Priority,
    pub change_frequency: ChangeFrequency,
}

impl Classification {
    /// Table literal constructor; tenths above 10 saturate to 1.0.
    const fn new(tenths: u8, change_frequency: ChangeFrequency) -> Self {
        let priority = match Priority::from_tenths(tenths) {
            Some(priority) => priority,
            None => Priority::HIGHEST,
        };
        Self {
            priority,
            change_frequency,
        }
    }
}

const MONTHLY: ChangeFrequency = ChangeFrequency::Monthly;

/// Ordered keyword table, first match wins.
pub const KEYWORD_TABLE: [(&str, Classification); 18] = [
    ("about", Classification::new(9, MONTHLY)),
    ("about-me", Classification::new(9, MONTHLY)),
    ("publications", Classification::new(9, MONTHLY)),
    ("papers", Classification::new(9, MONTHLY)),
    ("research", Classification::new(9, MONTHLY)),
    ("talks", Classification::new(8, MONTHLY)),
    ("presentations", Classification::new(8, MONTHLY)),
    ("projects", Classification::new(8, MONTHLY)),
    ("experience", Classification::new(8, MONTHLY)),
    ("education", Classification::new(8, MONTHLY)),
    ("skills", Classification::new(7, MONTHLY)),
    ("tech-stack", Classification::new(7, MONTHLY)),
    ("contact", Classification::new(6, ChangeFrequency::Yearly)),
    ("activities", Classification::new(7, MONTHLY)),
    ("academic-activities", Classification::new(7, MONTHLY)),
    ("awards", Classification::new(7, MONTHLY)),
    ("blog", Classification::new(8, ChangeFrequency::Weekly)),
    ("news", Classification::new(8, ChangeFrequency::Weekly)),
];

const PUBLICATION_CONTENT: Classification = Classification::new(9, MONTHLY);
const PROJECT_CONTENT: Classification = Classification::new(8, MONTHLY);
const FALLBACK: Classification = Classification::new(7, MONTHLY);

static PUBLICATION_CLASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PUBLICATION_CLASS_PATTERN).expect("Failed to compile PUBLICATION_CLASS regex")
});
static PROJECT_CLASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PROJECT_CLASS_PATTERN).expect("Failed to compile PROJECT_CLASS regex")
});
static PUBLICATION_CONTENT_SELECTOR_PARSED: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(PUBLICATION_CONTENT_SELECTOR)
        .expect("Failed to parse PUBLICATION_CONTENT selector")
});
static PROJECT_CONTENT_SELECTOR_PARSED: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(PROJECT_CONTENT_SELECTOR).expect("Failed to parse PROJECT_CONTENT selector")
});

/// Classifies a section by its identifier, falling back to the section content when
/// no keyword matches and the element is available.
///
/// # Arguments
///
/// * `identifier` - The section id or anchor fragment, without `#`
/// * `element` - The section element, if the entry comes from one
///
/// # Returns
///
/// The classification of the first matching keyword, then publication-like content
/// (0.9 monthly), then project-like content (0.8 monthly), otherwise 0.7 monthly.
#[must_use]
pub fn classify(identifier: &str, element: Option<ElementRef<'_>>) -> Classification {
    let identifier = identifier.to_lowercase();

    if let Some((_, classification)) = KEYWORD_TABLE
        .iter()
        .find(|(keyword, _)| identifier.contains(*keyword))
    {
        return *classification;
    }

    if let Some(element) = element {
        if has_descendant_class(
            element,
            &PUBLICATION_CONTENT_SELECTOR_PARSED,
            &PUBLICATION_CLASS_REGEX,
        ) {
            return PUBLICATION_CONTENT;
        }
        if has_descendant_class(element, &PROJECT_CONTENT_SELECTOR_PARSED, &PROJECT_CLASS_REGEX) {
            return PROJECT_CONTENT;
        }
    }

    FALLBACK
}

fn has_descendant_class(element: ElementRef<'_>, selector: &Selector, pattern: &Regex) -> bool {
    element
        .select(selector)
        .any(|descendant| descendant.value().classes().any(|class| pattern.is_match(class)))
}
