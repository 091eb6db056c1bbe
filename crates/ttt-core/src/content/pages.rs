use crate::routes::Route;

use super::home::home_page;
use super::{ContentSection, Link, Page, TimelineEntry, TimelineKind};

/// Invite link for the community Discord server.
pub const DISCORD_URL: &str = "https://discord.tacticalteam.de";

const FICTION_DOCUMENTATION: &str =
    "https://drive.google.com/file/d/1QpkevojoID6-HfPsp5GIW3OUmUjnfOSd/view";

const EVENT_SCHEDULE: &str = "dienstags und freitags von 19:30 bis 23:30 Uhr";

const TIMELINE: [TimelineEntry; 7] = [
    TimelineEntry {
        date: "2013",
        title: "Gründung des Tactical Training Teams",
        description: "Eine Handvoll Arma-Spieler beschließt, Ausbildung und Einsätze gemeinsam zu organisieren.",
        kind: TimelineKind::Milestone,
    },
    TimelineEntry {
        date: "2014",
        title: "Partnerschaft mit Gruppe W",
        description: "Erste feste Partnerschaft mit einer befreundeten Gemeinschaft.",
        kind: TimelineKind::Other,
    },
    TimelineEntry {
        date: "2015",
        title: "Kampagnen Themis und Entzug",
        description: "Die ersten mehrteiligen Kampagnen mit eigenen Kampagnenbändern.",
        kind: TimelineKind::Other,
    },
    TimelineEntry {
        date: "2018",
        title: "5 Jahre TTT",
        description: "Fünf Jahre regelmäßige Spieltage am Dienstag und Freitag.",
        kind: TimelineKind::Anniversary,
    },
    TimelineEntry {
        date: "2020",
        title: "Operation Aspis",
        description: "Großkampagne mit europaweiter Beteiligung.",
        kind: TimelineKind::Other,
    },
    TimelineEntry {
        date: "2022",
        title: "Slotbot und neue Infrastruktur",
        description: "Eventplanung und Slotting laufen über den eigenen Slotbot.",
        kind: TimelineKind::System,
    },
    TimelineEntry {
        date: "2023",
        title: "10 Jahre TTT",
        description: "Ein Jahrzehnt Ausbildung, Training und gemeinsame Einsätze.",
        kind: TimelineKind::Anniversary,
    },
];

fn aufstellung_page() -> Page {
    Page {
        title: "Aufstellung",
        subtitle: "Mitglieder und Struktur des Tactical Training Teams",
        sections: vec![
            ContentSection::Heading {
                title: "Mitgliederübersicht",
                subtitle: Some("Aktuelle Personalstärke nach Dienstgraden"),
            },
            ContentSection::Heading {
                title: "Personalaufstellung",
                subtitle: Some("Vollständige Mitgliederliste mit Details"),
            },
        ],
    }
}

fn chronik_page() -> Page {
    Page {
        title: "TTT-Chronik",
        subtitle: "Geschichte des Tactical Training Teams",
        sections: vec![
            ContentSection::Timeline(TIMELINE.to_vec()),
            ContentSection::Links {
                title: "Hintergrund",
                links: vec![
                    Link::described(
                        "Fiktion-Dokumentation",
                        FICTION_DOCUMENTATION,
                        "Die Hintergrundgeschichte unserer Kampagnen",
                    ),
                    Link::new("Jetzt mitmachen", "/mitmachen"),
                ],
            },
        ],
    }
}

fn medien_page() -> Page {
    Page {
        title: "Medien",
        subtitle: "Streams, Videos und Community-Kanäle des Tactical Training Teams",
        sections: vec![
            ContentSection::Heading {
                title: "Live Streams",
                subtitle: Some("Aktuelle Live-Übertragungen unserer Community"),
            },
            ContentSection::Links {
                title: "Medien-Kanäle",
                links: vec![
                    Link::described(
                        "YouTube",
                        "https://www.youtube.com/@tacticalteamde",
                        "Mission-Videos, Streams, Tutorials und Community-Highlights",
                    ),
                    Link::described(
                        "Twitch",
                        "https://www.twitch.tv/tacticaltrainingteam",
                        "Live-Streams unserer Missionen und Events",
                    ),
                    Link::described(
                        "Trovo",
                        "https://trovo.live/tacticalteam",
                        "Alternative Streaming-Plattform für unsere Community",
                    ),
                ],
            },
            ContentSection::Links {
                title: "Community & Plattformen",
                links: vec![
                    Link::described("X (Twitter)", "https://x.com/TTT_ArmA", "@TTT_ArmA"),
                    Link::described(
                        "Mastodon",
                        "https://mastodon.social/@tacticaltrainingteam",
                        "@tacticaltrainingteam",
                    ),
                    Link::described(
                        "Bluesky",
                        "https://bsky.app/profile/tacticalteam.bsky.social",
                        "@tacticalteam.bsky.social",
                    ),
                    Link::described(
                        "Instagram",
                        "https://www.instagram.com/tacticaltrainingteam/",
                        "@tacticaltrainingteam",
                    ),
                    Link::described(
                        "TikTok",
                        "https://www.tiktok.com/@tacticaltrainingteam",
                        "@tacticaltrainingteam",
                    ),
                    Link::described(
                        "Steam Gruppe",
                        "https://steamcommunity.com/groups/tacticaltrainingteam",
                        "Tactical Training Team",
                    ),
                    Link::described(
                        "Reddit",
                        "https://www.reddit.com/user/tacticaltrainingteam/",
                        "tacticaltrainingteam",
                    ),
                    Link::described(
                        "GitHub",
                        "https://github.com/orgs/TacticalTrainingTeam/",
                        "TacticalTrainingTeam",
                    ),
                ],
            },
            ContentSection::Links {
                title: "Corporate Design",
                links: vec![
                    Link::described(
                        "Corporate Design Wiki",
                        "https://wiki.tacticalteam.de/de/TTT-PR/Corporate-Identity",
                        "Umfassende Richtlinien für Logo-Verwendung, Farben und Design-Standards",
                    ),
                    Link::described(
                        "Logos und Designs (ZIP)",
                        "https://files.tacticalteam.de/s/36FWSHsGNwaXLHg",
                        "Hochauflösende Logos und Design-Ressourcen in verschiedenen Formaten",
                    ),
                ],
            },
        ],
    }
}

fn mitmachen_page() -> Page {
    Page {
        title: "Mitmachen",
        subtitle: "Wir veranstalten regelmäßig Events für Arma 3 und Arma Reforger, von Training über Missionen bis zu taktischen Gefechten ist alles dabei.",
        sections: vec![
            ContentSection::Paragraph(
                "Unsere Events finden dienstags und freitags von 19:30 bis 23:30 Uhr statt. Komm einfach auf unseren Discord und melde dich für ein Event an.",
            ),
            ContentSection::Bullets {
                title: "So geht's",
                items: vec![
                    "Discord beitreten",
                    "Mods mit Arma3Sync installieren",
                    "Für ein Event eintragen",
                ],
            },
            ContentSection::Links {
                title: "Links",
                links: vec![
                    Link::new("Discord", DISCORD_URL),
                    Link::new("Events", "https://events.tacticalteam.de/events/"),
                    Link::new(
                        "Arma3Sync Anleitung",
                        "https://wiki.tacticalteam.de/Technik/ArmA3Sync",
                    ),
                    Link::new(
                        "Arma3Sync Video",
                        "https://www.youtube.com/watch?v=lJ2DYk7SMPY&source_ve_path=MjM4NTE",
                    ),
                    Link::new("Arma3Sync Tipps", "https://www.youtube.com/watch?v=mFCTQJLqQNY"),
                ],
            },
        ],
    }
}

fn impressum_page() -> Page {
    Page {
        title: "Impressum",
        subtitle: "Angaben gemäß § 5 DDG",
        sections: vec![
            ContentSection::Heading {
                title: "Verantwortlich",
                subtitle: None,
            },
            ContentSection::Paragraph(
                "Tactical Training Team, eine nicht-kommerzielle Arma-Gemeinschaft. Kontakt über unseren Discord-Server.",
            ),
            ContentSection::Heading {
                title: "Haftung für Links",
                subtitle: None,
            },
            ContentSection::Paragraph(
                "Unser Angebot enthält Links zu externen Websites Dritter, auf deren Inhalte wir keinen Einfluss haben. Für die Inhalte der verlinkten Seiten ist stets der jeweilige Anbieter verantwortlich.",
            ),
            ContentSection::Links {
                title: "Kontakt",
                links: vec![Link::new("Discord", DISCORD_URL)],
            },
        ],
    }
}

fn datenschutz_page() -> Page {
    Page {
        title: "Datenschutzerklärung",
        subtitle: "Informationen zur Verarbeitung personenbezogener Daten",
        sections: vec![
            ContentSection::Heading {
                title: "Allgemeines",
                subtitle: None,
            },
            ContentSection::Paragraph(
                "Diese Anwendung speichert keine personenbezogenen Daten. Inhalte werden ausschließlich lesend von tacticalteam.de abgerufen.",
            ),
            ContentSection::Heading {
                title: "Eventplanung",
                subtitle: None,
            },
            ContentSection::Paragraph(
                "Für die Anmeldung zu Events nutzen wir den Slotbot. Es gilt dessen Datenschutzerklärung.",
            ),
            ContentSection::Heading {
                title: "Newsletter",
                subtitle: None,
            },
            ContentSection::Paragraph(
                "Der Newsletter wird über Mailchimp versendet. Es gelten die Datenschutzbestimmungen von Mailchimp.",
            ),
            ContentSection::Links {
                title: "Weitere Informationen",
                links: vec![
                    Link::new(
                        "slotbot.de",
                        "https://docs.slotbot.de/policies/datenschutzerkl%C3%A4rung",
                    ),
                    Link::new(
                        "https://mailchimp.com/legal/privacy/",
                        "https://mailchimp.com/legal/privacy/",
                    ),
                    Link::new("tacticalteam.de", "https://tacticalteam.de"),
                ],
            },
        ],
    }
}

/// Static content for a route.
pub fn page(route: Route) -> Page {
    match route {
        Route::Home => home_page(),
        Route::Aufstellung => aufstellung_page(),
        Route::Chronik => chronik_page(),
        Route::Medien => medien_page(),
        Route::Mitmachen => mitmachen_page(),
        Route::Impressum => impressum_page(),
        Route::Datenschutz => datenschutz_page(),
    }
}

/// Links shown at the bottom of every page.
pub fn footer() -> Page {
    Page {
        title: "Tactical Training Team",
        subtitle: EVENT_SCHEDULE,
        sections: vec![
            ContentSection::Links {
                title: "Social",
                links: vec![
                    Link::new("Discord", DISCORD_URL),
                    Link::new("YouTube", "https://www.youtube.com/c/TacticalteamDe"),
                    Link::new("𝕏 (Twitter)", "https://x.com/TTT_ArmA"),
                    Link::new("Mastodon", "https://mastodon.social/@tacticaltrainingteam"),
                ],
            },
            ContentSection::Links {
                title: "Partner",
                links: vec![
                    Link::described(
                        "Gruppe W",
                        "https://www.gruppe-w.de/",
                        "Partnerschaft seit 2014",
                    ),
                    Link::described(
                        "Gruppe Adler",
                        "https://gruppe-adler.de/",
                        "Partnerschaft seit 2022",
                    ),
                    Link::described(
                        "Praetorianische Garde™",
                        "https://prae-garde.de/",
                        "Partnerschaft seit 2025",
                    ),
                    Link::described(
                        "Electronic Sports Masters™",
                        "https://esportsmasters.org",
                        "Partnerschaft",
                    ),
                ],
            },
            ContentSection::Links {
                title: "Quick Links",
                links: vec![
                    Link::new("Wiki", "https://wiki.tacticalteam.de/"),
                    Link::new("Slottung", "https://events.tacticalteam.de/events"),
                    Link::new("Replay", "https://replay.tacticalteam.de"),
                ],
            },
            ContentSection::Links {
                title: "Rechtliches",
                links: vec![
                    Link::new("Datenschutz", "/datenschutz"),
                    Link::new("Impressum", "/impressum"),
                ],
            },
        ],
    }
}
