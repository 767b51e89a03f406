use std::collections::HashSet;

use colored::*;
use iscsigw_common::diff::ListComparison;
use iscsigw_common::lio;

use crate::terminal::{colors, print};

pub fn diff(current: Vec<String>, new: Vec<String>) {
    let comparison = ListComparison::new(current, new);
    let added: Vec<&String> = comparison.added();
    let removed: HashSet<&String> = comparison.removed();

    for item in added {
        print::print(&format!("{} {}", "+".color(colors::ADDED).bold(), item));
    }

    // Removal order carries no meaning; sort for stable output.
    let mut removed: Vec<&String> = removed.into_iter().collect();
    removed.sort();
    for item in removed {
        print::print(&format!("{} {}", "-".color(colors::REMOVED).bold(), item));
    }

    print::aligned_line("Changed", lio::yes_no(comparison.changed()));
}
