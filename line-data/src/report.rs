//! Diagnostic statistics over the built tables.
//!
//! The report is printed after both tables are written and is never
//! persisted. Building it cannot fail.

use std::fmt;

use indexmap::IndexMap;

use crate::tables::{CodeMapping, LineDetails};

/// Number of categories listed in the report.
const TOP_CATEGORIES: usize = 5;

/// Aggregate statistics for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Keys in the code mapping.
    pub mapping_entries: usize,

    /// Keys in the details table.
    pub detail_entries: usize,

    /// Detail entries with a non-empty direction-A street list.
    pub lines_with_streets: usize,

    /// Direction-A streets summed over all detail entries.
    pub total_streets: usize,

    /// Non-empty categories with their entry counts, most frequent first.
    /// Ties keep first-seen order.
    pub categories: Vec<(String, usize)>,
}

impl Report {
    /// Compute statistics from the built tables.
    ///
    /// Counts are per key, so a line published under an original and a
    /// transliterated code counts twice.
    pub fn from_tables(mapping: &CodeMapping, details: &LineDetails) -> Self {
        let mut lines_with_streets = 0;
        let mut total_streets = 0;
        let mut counts: IndexMap<&str, usize> = IndexMap::new();

        for info in details.values() {
            let streets = info.streets_a.as_deref().unwrap_or_default();
            if !streets.is_empty() {
                lines_with_streets += 1;
            }
            total_streets += streets.len();

            if !info.category.is_empty() {
                *counts.entry(info.category.as_str()).or_default() += 1;
            }
        }

        let mut categories: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect();
        // Stable: equal counts stay in first-seen order
        categories.sort_by(|a, b| b.1.cmp(&a.1));

        Self {
            mapping_entries: mapping.len(),
            detail_entries: details.len(),
            lines_with_streets,
            total_streets,
            categories,
        }
    }

    /// Average direction-A streets per line that has any.
    ///
    /// Returns `None` when no line has a street list.
    pub fn average_streets(&self) -> Option<f64> {
        (self.lines_with_streets > 0)
            .then(|| self.total_streets as f64 / self.lines_with_streets as f64)
    }

    /// The most frequent categories, at most five.
    pub fn top_categories(&self) -> &[(String, usize)] {
        &self.categories[..self.categories.len().min(TOP_CATEGORIES)]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Statistics ===")?;
        writeln!(f, "Total line codes in mapping: {}", self.mapping_entries)?;
        writeln!(f, "Total lines with details: {}", self.detail_entries)?;
        writeln!(f, "Lines with street lists: {}", self.lines_with_streets)?;
        writeln!(f, "Total streets across all lines: {}", self.total_streets)?;
        if let Some(avg) = self.average_streets() {
            writeln!(f, "Average streets per line: {avg:.1}")?;
        }

        writeln!(f)?;
        write!(f, "Categories: {}", self.categories.len())?;
        for (category, count) in self.top_categories() {
            let quoted = format!("'{category}'");
            write!(f, "\n  {quoted:<15} : {count:>3} lines")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::tables::LineInfo;

    fn info(category: &str, streets_a: Option<&[&str]>) -> Arc<LineInfo> {
        Arc::new(LineInfo {
            id: "L".into(),
            line_type: "bus".into(),
            category: category.into(),
            streets_a: streets_a.map(|s| s.iter().map(|x| x.to_string()).collect()),
            streets_b: None,
        })
    }

    fn details(entries: Vec<(&str, Arc<LineInfo>)>) -> LineDetails {
        entries
            .into_iter()
            .map(|(code, info)| (code.to_string(), info))
            .collect()
    }

    #[test]
    fn counts_streets_and_entries() {
        let mut mapping = CodeMapping::new();
        mapping.insert("1".into(), "L1".into());
        mapping.insert("2".into(), "L2".into());
        mapping.insert("3".into(), "L3".into());

        let details = details(vec![
            ("1", info("gradski", Some(&["A", "B", "C"]))),
            ("2", info("gradski", Some(&["D"]))),
            ("3", info("noćni", Some(&[]))),
            ("4", info("", None)),
        ]);

        let report = Report::from_tables(&mapping, &details);
        assert_eq!(report.mapping_entries, 3);
        assert_eq!(report.detail_entries, 4);
        assert_eq!(report.lines_with_streets, 2);
        assert_eq!(report.total_streets, 4);
        assert_eq!(report.average_streets(), Some(2.0));
    }

    #[test]
    fn average_omitted_without_streets() {
        let details = details(vec![("1", info("gradski", None))]);
        let report = Report::from_tables(&CodeMapping::new(), &details);

        assert_eq!(report.average_streets(), None);
        assert!(!report.to_string().contains("Average"));
    }

    #[test]
    fn empty_categories_ignored() {
        let details = details(vec![("1", info("", None)), ("2", info("", None))]);
        let report = Report::from_tables(&CodeMapping::new(), &details);
        assert!(report.categories.is_empty());
    }

    #[test]
    fn top_categories_stable_on_ties() {
        let details = details(vec![
            ("1", info("c", None)),
            ("2", info("a", None)),
            ("3", info("b", None)),
            ("4", info("a", None)),
            ("5", info("d", None)),
            ("6", info("e", None)),
            ("7", info("f", None)),
            ("8", info("b", None)),
        ]);
        let report = Report::from_tables(&CodeMapping::new(), &details);

        let top: Vec<_> = report
            .top_categories()
            .iter()
            .map(|(c, n)| (c.as_str(), *n))
            .collect();
        assert_eq!(top, vec![("a", 2), ("b", 2), ("c", 1), ("d", 1), ("e", 1)]);
        assert_eq!(report.categories.len(), 6);
    }

    #[test]
    fn shared_info_counted_per_key() {
        let shared = info("gradski", Some(&["A", "B"]));
        let details = details(vec![("ЕКО1", Arc::clone(&shared)), ("EKO1", shared)]);
        let report = Report::from_tables(&CodeMapping::new(), &details);

        assert_eq!(report.lines_with_streets, 2);
        assert_eq!(report.total_streets, 4);
        assert_eq!(report.categories, vec![("gradski".to_string(), 2)]);
    }

    #[test]
    fn renders_statistics() {
        let mut mapping = CodeMapping::new();
        mapping.insert("91".into(), "L91".into());
        let details = details(vec![("91", info("gradski", Some(&["A", "B", "C"])))]);

        let rendered = Report::from_tables(&mapping, &details).to_string();
        let expected = "\
=== Statistics ===
Total line codes in mapping: 1
Total lines with details: 1
Lines with street lists: 1
Total streets across all lines: 3
Average streets per line: 3.0

Categories: 1
  'gradski'       :   1 lines";
        assert_eq!(rendered, expected);
    }
}
