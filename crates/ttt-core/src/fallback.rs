//! Canned data served when the backend is unreachable.

use chrono::{DateTime, Utc};

use crate::models::{CampaignRibbon, Department, Medal, Member, Rank, TwitchStream};
use crate::roster::RankCounts;

const OFFICER_AVATAR: &str = "/img/aufstellung/offizier-kopf.webp";

/// (name, rank, member since)
const ROSTER: [(&str, Rank, &str); 12] = [
    ("TheConen", Rank::Officer, "2015-01-01"),
    ("SpecOp0", Rank::Officer, "2016-01-01"),
    ("Reimchen", Rank::NonCommissionedOfficer, "2018-01-01"),
    ("rockn_roller", Rank::NonCommissionedOfficer, "2019-01-01"),
    ("GSG9_abzocker", Rank::Veteran, "2017-01-01"),
    ("Speutzi", Rank::Veteran, "2018-01-01"),
    ("Corben", Rank::Soldier, "2022-01-01"),
    ("SchmerzKeks", Rank::Soldier, "2023-01-01"),
    ("Epsilon", Rank::Recruit, "2024-01-01"),
    ("Addi995", Rank::Recruit, "2024-01-01"),
    ("Mynx", Rank::Guest, "2024-01-01"),
    ("Leroy", Rank::Guest, "2024-01-01"),
];

/// The fallback roster: twelve members, two per rank.
pub fn members() -> Vec<Member> {
    ROSTER
        .iter()
        .enumerate()
        .map(|(i, &(name, rank, since))| {
            let mut member = Member {
                id: format!("member-{}", i + 1),
                name: name.to_string(),
                rank,
                avatar: if rank == Rank::Officer {
                    OFFICER_AVATAR.to_string()
                } else {
                    String::new()
                },
                member_since: since.to_string(),
                medals: Vec::new(),
                campaign_ribbons: Vec::new(),
                departments: Vec::new(),
            };
            if i == 0 {
                decorate(&mut member);
            }
            member
        })
        .collect()
}

fn decorate(member: &mut Member) {
    member.medals.push(Medal {
        id: "medal-1".to_string(),
        name: "Medal of Honor".to_string(),
        image: "/img/aufstellung/medals/medal-mdh.png".to_string(),
        description: "Für besondere Verdienste".to_string(),
    });
    member.campaign_ribbons.push(CampaignRibbon {
        id: "ribbon-1".to_string(),
        name: "Aspis Kampagne".to_string(),
        image: "/img/aufstellung/ribbons/ttt_veteran-kampagne-aspis.png".to_string(),
        campaign: "Operation Aspis".to_string(),
        year: "2020".to_string(),
    });
    member.departments.push(Department {
        id: "abt-1".to_string(),
        name: "Missionsbau".to_string(),
        icon: "/img/aufstellung/group/group-missionsbau-icon.png".to_string(),
        description: "Wissensvermittlung & Multiplikation im Missionsbau".to_string(),
    });
}

/// Same distribution as `members()`.
pub fn stats() -> RankCounts {
    Rank::ALL.into_iter().map(|rank| (rank, 2)).collect()
}

/// One live stream on the community channel, started at `now`.
pub fn twitch_streams(now: DateTime<Utc>) -> Vec<TwitchStream> {
    vec![TwitchStream {
        id: "1".to_string(),
        user_name: "TacticalTrainingTeam".to_string(),
        title: "Arma 3 ♦ Blood and Sand [Coop] ♦ Kamera EinStein".to_string(),
        viewer_count: 42,
        started_at: now.to_rfc3339(),
        thumbnail_url: "/img/home-banner/home-banner1.webp".to_string(),
        is_live: true,
        url: "https://twitch.tv/tacticaltrainingteam".to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_roster_shape() {
        let members = members();
        assert_eq!(members.len(), 12);
        let ids: HashSet<_> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(members[0].id, "member-1");
        assert_eq!(members[11].id, "member-12");
        for rank in Rank::ALL {
            assert_eq!(members.iter().filter(|m| m.rank == rank).count(), 2);
        }
    }

    #[test]
    fn test_only_first_officer_is_decorated() {
        let members = members();
        let conen = &members[0];
        assert_eq!(conen.name, "TheConen");
        assert_eq!(conen.medals.len(), 1);
        assert_eq!(conen.campaign_ribbons.len(), 1);
        assert_eq!(conen.departments.len(), 1);
        assert!(members[1..].iter().all(|m| m.medals.is_empty()
            && m.campaign_ribbons.is_empty()
            && m.departments.is_empty()));
    }

    #[test]
    fn test_officers_have_avatars() {
        for member in members() {
            assert_eq!(member.has_avatar(), member.rank == Rank::Officer, "{}", member.name);
        }
    }

    #[test]
    fn test_stats_match_roster() {
        let stats = stats();
        assert_eq!(stats.len(), 6);
        assert_eq!(stats.values().sum::<usize>(), members().len());
    }

    #[test]
    fn test_fallback_stream_is_live() {
        let now = Utc::now();
        let streams = twitch_streams(now);
        assert_eq!(streams.len(), 1);
        assert!(streams[0].is_live);
        assert_eq!(streams[0].uptime_display(now).as_deref(), Some("0h 00m"));
    }
}
