// src/organize.rs
// =============================================================================
// Puts rendered sections in reading order and builds the navigation tree.
//
// Ordering rules:
// - sections are ordered by their page number, never by fetch order
// - a group is placed where its lowest-numbered page first appears
// - inside a group, pages are ascending by page number
// - sections that failed to fetch are simply not in the map and are skipped
// - two sections claiming the same page number is a data error
//
// Example (page, group):
//   (3, "B") (1, "A") (2, "B") (4, "A")
//   -> A: [1, 4]   B: [2, 3]
// =============================================================================

use std::collections::{BTreeMap, HashMap};

use crate::api::SectionSummary;
use crate::error::{Error, Result};

/// A section after its markdown has been rendered
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub id: u64,
    pub title: String,
    pub html: String,
    pub page: u32,
    pub group: String,
}

impl RenderedSection {
    /// Output file name, e.g. page 3 -> "3.html"
    pub fn file_name(&self) -> String {
        page_file_name(self.page)
    }
}

/// One link in the navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPage {
    pub page: u32,
    pub title: String,
}

impl NavPage {
    pub fn file_name(&self) -> String {
        page_file_name(self.page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub label: String,
    pub pages: Vec<NavPage>,
}

/// Groups in display order, each with its pages in page order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationTree {
    pub groups: Vec<NavGroup>,
}

impl NavigationTree {
    pub fn page_count(&self) -> usize {
        self.groups.iter().map(|group| group.pages.len()).sum()
    }
}

fn page_file_name(page: u32) -> String {
    format!("{}.html", page)
}

/// Rendered sections from `listing`, sorted by page number.
///
/// Entries of `listing` missing from `rendered` are skipped. Two sections
/// with the same page number fail with `Error::DuplicatePage`.
pub fn order_sections<'a>(
    listing: &[SectionSummary],
    rendered: &'a HashMap<u64, RenderedSection>,
) -> Result<Vec<&'a RenderedSection>> {
    let mut by_page: BTreeMap<u32, &RenderedSection> = BTreeMap::new();

    for summary in listing {
        let section = match rendered.get(&summary.id) {
            Some(section) => section,
            None => continue,
        };
        if let Some(existing) = by_page.insert(section.page, section) {
            // Same id listed twice is the same section, not a clash
            if existing.id != section.id {
                return Err(Error::DuplicatePage {
                    page: section.page,
                    first: existing.id,
                    second: section.id,
                });
            }
        }
    }

    Ok(by_page.into_values().collect())
}

/// Builds the navigation from sections already sorted by `order_sections`
pub fn build_navigation(sections: &[&RenderedSection]) -> NavigationTree {
    // page -> (group, title), iterated in ascending page order
    let pages: BTreeMap<u32, (&str, &str)> = sections
        .iter()
        .map(|section| (section.page, (section.group.as_str(), section.title.as_str())))
        .collect();

    // Group order by first appearance
    let mut group_order: Vec<&str> = Vec::new();
    for (group, _) in pages.values() {
        if !group_order.contains(group) {
            group_order.push(*group);
        }
    }

    let groups = group_order
        .into_iter()
        .map(|label| NavGroup {
            label: label.to_string(),
            pages: pages
                .iter()
                .filter(|(_, (group, _))| *group == label)
                .map(|(page, (_, title))| NavPage {
                    page: *page,
                    title: title.to_string(),
                })
                .collect(),
        })
        .collect();

    NavigationTree { groups }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why BTreeMap instead of HashMap?
//    - A BTreeMap keeps its keys sorted
//    - Iterating it walks the pages in ascending order for free
//    - HashMap iteration order is random, which would shuffle the sidebar
//
// 2. What does the 'a on order_sections mean?
//    - The returned Vec holds references into the `rendered` map
//    - 'a ties them together: the Vec cannot outlive the map
//    - No section HTML is copied
//
// 3. Why is a duplicate page an error?
//    - Pages are written as {page}.html
//    - Two sections with the same number would overwrite each other's file
// -----------------------------------------------------------------------------
