//! Roster aggregation and the expand/collapse state of member cards.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{CampaignRibbon, Member, Rank};
use crate::utils::{cmp_locale, format_german_date};

/// Member count per rank. Always holds all six ranks.
pub type RankCounts = BTreeMap<Rank, usize>;

fn empty_buckets<T: Default>() -> BTreeMap<Rank, T> {
    Rank::ALL.into_iter().map(|rank| (rank, T::default())).collect()
}

/// Partition members by rank.
///
/// Every rank is present (possibly empty) and iterates in priority order.
/// Within a rank, members are sorted by name with `cmp_locale`; the sort is
/// stable, so members with identical names keep their input order.
pub fn group_by_rank(members: &[Member]) -> BTreeMap<Rank, Vec<&Member>> {
    let mut grouped: BTreeMap<Rank, Vec<&Member>> = empty_buckets();
    for member in members {
        grouped.entry(member.rank).or_default().push(member);
    }
    for bucket in grouped.values_mut() {
        bucket.sort_by(|a, b| cmp_locale(&a.name, &b.name));
    }
    grouped
}

pub fn count_by_rank(members: &[Member]) -> RankCounts {
    let mut counts: RankCounts = empty_buckets();
    for member in members {
        *counts.entry(member.rank).or_default() += 1;
    }
    counts
}

/// Fill in ranks missing from a server-provided count map.
pub fn complete_counts(counts: BTreeMap<Rank, usize>) -> RankCounts {
    let mut full: RankCounts = empty_buckets();
    full.extend(counts);
    full
}

pub fn has_expandable_content(member: &Member) -> bool {
    !member.medals.is_empty()
        || !member.campaign_ribbons.is_empty()
        || !member.departments.is_empty()
}

/// Campaign ribbons newest first. Ribbons without a numeric year sort last.
pub fn sorted_campaign_ribbons(ribbons: &[CampaignRibbon]) -> Vec<&CampaignRibbon> {
    let mut sorted: Vec<&CampaignRibbon> = ribbons.iter().collect();
    sorted.sort_by(|a, b| b.year_number().cmp(&a.year_number()));
    sorted
}

fn parse_member_since(value: &str) -> Option<NaiveDate> {
    value
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// "2015-01-01" -> "1. Januar 2015". Unparseable input is returned as-is.
pub fn format_member_since(value: &str) -> String {
    parse_member_since(value)
        .map(format_german_date)
        .unwrap_or_else(|| value.to_string())
}

/// Year of joining for the compact card.
pub fn member_year(value: &str) -> Option<i32> {
    parse_member_since(value).map(|d| d.year())
}

/// Which member card is open. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    expanded: Option<String>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `id` if it is open, otherwise open it and close any other.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    /// Drop the expansion if its member is no longer in the roster.
    pub fn retain_known(&mut self, members: &[Member]) {
        if let Some(id) = &self.expanded {
            if !members.iter().any(|m| &m.id == id) {
                self.expanded = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn member(id: &str, name: &str, rank: Rank) -> Member {
        Member {
            id: id.to_string(),
            name: name.to_string(),
            rank,
            avatar: String::new(),
            member_since: "2020-03-15".to_string(),
            medals: Vec::new(),
            campaign_ribbons: Vec::new(),
            departments: Vec::new(),
        }
    }

    fn ribbon(id: &str, year: &str) -> CampaignRibbon {
        CampaignRibbon {
            id: id.to_string(),
            name: format!("Ribbon {id}"),
            image: String::new(),
            campaign: String::new(),
            year: year.to_string(),
        }
    }

    #[test]
    fn test_grouping_partitions_members() {
        let members = fallback::members();
        let grouped = group_by_rank(&members);
        assert_eq!(grouped.len(), 6);

        let mut seen: Vec<&str> = grouped
            .values()
            .flat_map(|bucket| bucket.iter().map(|m| m.id.as_str()))
            .collect();
        seen.sort();
        let mut expected: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        expected.sort();
        assert_eq!(seen, expected);

        for (rank, bucket) in &grouped {
            assert!(bucket.iter().all(|m| m.rank == *rank));
        }
    }

    #[test]
    fn test_grouping_iterates_in_rank_order() {
        let members = fallback::members();
        let grouped = group_by_rank(&members);
        let order: Vec<Rank> = grouped.keys().copied().collect();
        assert_eq!(order, Rank::ALL.to_vec());
    }

    #[test]
    fn test_empty_input_has_all_ranks() {
        let grouped = group_by_rank(&[]);
        assert_eq!(grouped.len(), 6);
        assert!(grouped.values().all(Vec::is_empty));

        let counts = count_by_rank(&[]);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 0));
    }

    #[test]
    fn test_sorted_by_name_within_rank() {
        let members = fallback::members();
        let grouped = group_by_rank(&members);
        let nco: Vec<&str> = grouped[&Rank::NonCommissionedOfficer]
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(nco, vec!["Reimchen", "rockn_roller"]);

        let recruits: Vec<&str> = grouped[&Rank::Recruit].iter().map(|m| m.name.as_str()).collect();
        assert_eq!(recruits, vec!["Addi995", "Epsilon"]);
    }

    #[test]
    fn test_accented_names_sort_with_base_letter() {
        let members = vec![
            member("1", "Zulu", Rank::Soldier),
            member("2", "Çelik", Rank::Soldier),
            member("3", "Åsa", Rank::Soldier),
            member("4", "Bravo", Rank::Soldier),
        ];
        let grouped = group_by_rank(&members);
        let names: Vec<&str> = grouped[&Rank::Soldier].iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Åsa", "Bravo", "Çelik", "Zulu"]);
    }

    #[test]
    fn test_equal_names_keep_input_order() {
        let members = vec![
            member("b", "Leroy", Rank::Guest),
            member("a", "Leroy", Rank::Guest),
        ];
        let grouped = group_by_rank(&members);
        let ids: Vec<&str> = grouped[&Rank::Guest].iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let members = vec![
            member("1", "A", Rank::Officer),
            member("2", "B", Rank::Officer),
            member("3", "C", Rank::Guest),
        ];
        let counts = count_by_rank(&members);
        assert_eq!(counts[&Rank::Officer], 2);
        assert_eq!(counts[&Rank::Guest], 1);
        assert_eq!(counts[&Rank::Veteran], 0);
        assert_eq!(counts.values().sum::<usize>(), members.len());
    }

    #[test]
    fn test_complete_counts_fills_missing_ranks() {
        let partial: BTreeMap<Rank, usize> = [(Rank::Soldier, 7)].into_iter().collect();
        let full = complete_counts(partial);
        assert_eq!(full.len(), 6);
        assert_eq!(full[&Rank::Soldier], 7);
        assert_eq!(full[&Rank::Officer], 0);
    }

    #[test]
    fn test_toggle_single_expansion() {
        let mut state = RosterState::new();
        assert_eq!(state.expanded(), None);

        state.toggle("member-1");
        assert!(state.is_expanded("member-1"));

        state.toggle("member-2");
        assert!(state.is_expanded("member-2"));
        assert!(!state.is_expanded("member-1"));

        state.toggle("member-2");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_collapse_and_retain() {
        let mut state = RosterState::new();
        state.toggle("member-1");
        state.collapse_all();
        assert_eq!(state.expanded(), None);

        state.toggle("gone");
        state.retain_known(&fallback::members());
        assert_eq!(state.expanded(), None);

        state.toggle("member-3");
        state.retain_known(&fallback::members());
        assert!(state.is_expanded("member-3"));
    }

    #[test]
    fn test_expandable_content() {
        let members = fallback::members();
        assert!(has_expandable_content(&members[0]));
        assert!(!has_expandable_content(&members[1]));
    }

    #[test]
    fn test_ribbons_newest_first() {
        let ribbons = vec![
            ribbon("a", "2015"),
            ribbon("b", "2021"),
            ribbon("c", "n/a"),
            ribbon("d", "2020"),
        ];
        let ids: Vec<&str> = sorted_campaign_ribbons(&ribbons)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_member_since_formatting() {
        assert_eq!(format_member_since("2020-03-15"), "15. März 2020");
        assert_eq!(format_member_since("2015-01-01T00:00:00Z"), "1. Januar 2015");
        assert_eq!(format_member_since("irgendwann"), "irgendwann");
        assert_eq!(member_year("2019-01-01"), Some(2019));
        assert_eq!(member_year(""), None);
    }
}
