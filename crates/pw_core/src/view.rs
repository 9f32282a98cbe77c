use std::cmp::Ordering;

use crate::types::{Article, Politician, SortMode};

/// One per-state table in the grouped rendering mode.
#[derive(Debug, Clone, PartialEq)]
pub struct StateGroup {
    pub state: String,
    pub members: Vec<Politician>,
}

/// Session-local state of the politicians page.
///
/// Two pieces of state, two transitions: `load` replaces the list wholesale
/// when the fetch resolves, `set_sort_mode` records a user selection. The
/// derived orderings are recomputed per render and never touch the
/// underlying list.
#[derive(Debug, Clone, Default)]
pub struct PoliticiansPage {
    politicians: Vec<Politician>,
    sort_mode: SortMode,
}

impl PoliticiansPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, politicians: Vec<Politician>) {
        self.politicians = politicians;
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn politicians(&self) -> &[Politician] {
        &self.politicians
    }

    /// The list in the current sort order. Ties keep their fetched order.
    pub fn sorted(&self) -> Vec<Politician> {
        let mut sorted = self.politicians.clone();
        match self.sort_mode {
            SortMode::Name => sorted.sort_by(|a, b| compare_ci(&a.name, &b.name)),
            SortMode::State => sorted.sort_by(|a, b| compare_ci(&a.state, &b.state)),
        }
        sorted
    }

    /// The sorted list partitioned into per-state groups.
    pub fn grouped(&self) -> Vec<StateGroup> {
        group_by_state(self.sorted())
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Partitions into groups keyed by exact state value. Group order is the
/// first-seen order of the input; within a group, rows are re-sorted by
/// ascending district.
pub fn group_by_state(politicians: Vec<Politician>) -> Vec<StateGroup> {
    let mut groups: Vec<StateGroup> = Vec::new();
    for politician in politicians {
        match groups.iter_mut().find(|g| g.state == politician.state) {
            Some(group) => group.members.push(politician),
            None => groups.push(StateGroup {
                state: politician.state.clone(),
                members: vec![politician],
            }),
        }
    }
    for group in &mut groups {
        group.members.sort_by_key(|p| p.district);
    }
    groups
}

/// Splits the fetched list into the home page slots: the lead article
/// (index 0, when present) and up to three secondary cards (indices 1-3),
/// in received order.
pub fn split_lead(articles: &[Article]) -> (Option<&Article>, &[Article]) {
    let lead = articles.first();
    let secondary = if articles.len() > 1 {
        &articles[1..articles.len().min(4)]
    } else {
        &[]
    };
    (lead, secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn politician(id: i64, name: &str, state: &str, district: u32) -> Politician {
        Politician {
            id,
            name: name.to_string(),
            state: state.to_string(),
            party: "Independent".to_string(),
            district,
            url: format!("https://example.com/member/{}", id),
        }
    }

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            link: format!("https://example.com/{}", title),
            snippet: None,
            source: "Test Wire".to_string(),
            thumbnail: "/images/default.jpg".to_string(),
        }
    }

    #[test]
    fn test_sort_by_name() {
        let mut page = PoliticiansPage::new();
        page.load(vec![
            politician(1, "Zeta", "TX", 2),
            politician(2, "Alpha", "CA", 5),
        ]);

        let sorted = page.sorted();
        assert_eq!(sorted[0].name, "Alpha");
        assert_eq!(sorted[1].name, "Zeta");
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let mut page = PoliticiansPage::new();
        page.load(vec![
            politician(1, "adams", "TX", 2),
            politician(2, "Baker", "CA", 5),
            politician(3, "Abbott", "NY", 1),
        ]);

        let names: Vec<_> = page.sorted().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Abbott", "adams", "Baker"]);
    }

    #[test]
    fn test_group_by_state_sorts_districts() {
        let mut page = PoliticiansPage::new();
        page.load(vec![
            politician(1, "A", "CA", 5),
            politician(2, "B", "CA", 1),
            politician(3, "C", "TX", 2),
        ]);
        page.set_sort_mode(SortMode::State);

        let groups = page.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].state, "CA");
        let districts: Vec<_> = groups[0].members.iter().map(|p| p.district).collect();
        assert_eq!(districts, vec![1, 5]);
        assert!(groups[1].members.iter().all(|p| p.state == "TX"));
    }

    #[test]
    fn test_toggling_sort_mode_leaves_list_untouched() {
        let original = vec![
            politician(1, "Zeta", "TX", 2),
            politician(2, "Alpha", "CA", 5),
        ];
        let mut page = PoliticiansPage::new();
        page.load(original.clone());

        page.set_sort_mode(SortMode::State);
        let _ = page.sorted();
        let _ = page.grouped();
        page.set_sort_mode(SortMode::Name);
        let _ = page.sorted();

        assert_eq!(page.politicians(), original.as_slice());
    }

    #[test]
    fn test_empty_list_renders_no_groups() {
        let page = PoliticiansPage::new();
        assert!(page.sorted().is_empty());
        assert!(page.grouped().is_empty());
    }

    #[test]
    fn test_split_lead_windowing() {
        let empty: Vec<Article> = vec![];
        assert!(matches!(split_lead(&empty), (None, [])));

        let one = vec![article("a")];
        let (lead, secondary) = split_lead(&one);
        assert_eq!(lead.map(|a| a.title.as_str()), Some("a"));
        assert!(secondary.is_empty());

        let four: Vec<_> = ["a", "b", "c", "d"].iter().map(|t| article(t)).collect();
        let (lead, secondary) = split_lead(&four);
        assert_eq!(lead.map(|a| a.title.as_str()), Some("a"));
        assert_eq!(secondary.len(), 3);

        let ten: Vec<_> = (0..10).map(|i| article(&i.to_string())).collect();
        let (_, secondary) = split_lead(&ten);
        assert_eq!(secondary.len(), 3);
        let titles: Vec<_> = secondary.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["1", "2", "3"]);
    }
}
