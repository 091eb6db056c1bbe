use std::time::{Duration, Instant};

use serde::Serialize;

use super::{ContentSection, Link, Page, Stat};

/// Time a banner slide stays up before the carousel advances.
pub const SLIDE_INTERVAL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerSlide {
    pub image: &'static str,
    /// May contain inline markup for the highlighted word
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SLIDES: [BannerSlide; 3] = [
    BannerSlide {
        image: "/img/home-banner/home-banner1.webp",
        title: "TACTICAL TRAINING <span class=\"text-tttRed\">TEAM</span>",
        subtitle: "Als eine der größeren Arma-Gemeinschaften im deutschsprachigen Raum bieten wir dir das volle Paket: Von Ausbildung und Training bis hin zu Events und Kampagnen ist alles dabei.",
    },
    BannerSlide {
        image: "/img/home-banner/home-banner2.webp",
        title: "REALISTISCHES <span class=\"text-tttRed\">MILSIM</span>",
        subtitle: "Erlebe authentische militärische Simulation in Arma 3 und Arma Reforger mit taktischem Tiefgang und koordinierten Großoperationen.",
    },
    BannerSlide {
        image: "/img/home-banner/home-banner3.webp",
        title: "STARKE <span class=\"text-tttRed\">COMMUNITY</span>",
        subtitle: "Über 80 aktive Community-Mitglieder, regelmäßige Missionen und eine europaweite vernetzte MilSim-Community erwarten dich.",
    },
];

const COMMUNITY_STATS: [Stat; 3] = [
    Stat { value: "80+", label: "Mitglieder" },
    Stat { value: "2013", label: "Gegründet" },
    Stat { value: "2x", label: "Events/Woche" },
];

const CALL_TO_ACTION: [Link; 2] = [
    Link::new("JETZT DURCHSTARTEN", "/mitmachen"),
    Link::new("WIKI ENTDECKEN", "https://wiki.tacticalteam.de"),
];

const ORBAT: [&str; 6] = [
    "Offiziere: Führen das TTT eigenverantwortlich",
    "Unteroffiziere: Direkte Unterstützer der Offiziere",
    "Veteranen: Hervorragende langjährige Mitglieder",
    "Soldaten: Vollwertige TTT-Mitglieder",
    "Rekruten: Angehende Mitglieder",
    "Gäste: Freie Mitspieler bei Events",
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Mindestens zwei Events pro Woche",
        "Ob Trainings, Coop-Missionen, Zeus-Missionen oder externe Events: bei uns gibt es jede Woche mindestens 2 Spieltage.",
    ),
    (
        "Ausbildung & Training",
        "Wir legen großen Wert auf unsere Ausbildungstätigkeit. Spannende, abwechslungsreiche und stetig weiterentwickelte Trainingskonzepte.",
    ),
    (
        "Für Einsteiger & Profis",
        "Unabhängig von Wissensstand werden Einsteiger explizit durch Ausbildung aufgebaut! Keine Pflichttermine!",
    ),
    (
        "Abwechslungsreiche Herausforderungen",
        "Erlebe neue Blickwinkel als JTAC, Panzerkommandant, Gruppenführer oder einfacher Infanterist in unterschiedlichsten Einsätzen.",
    ),
];

const REQUIREMENTS: [&str; 5] = [
    "Ab 18 Jahre",
    "Headset für TeamSpeak 3 & Discord",
    "Apex- & Contact Expansion (Arma 3)",
    "Keine Erfahrung notwendig",
    "Spieltage: Dienstag & Freitag",
];

pub fn home_page() -> Page {
    let mut sections = vec![
        ContentSection::Stats(COMMUNITY_STATS.to_vec()),
        ContentSection::Links {
            title: "Los geht's",
            links: CALL_TO_ACTION.to_vec(),
        },
        ContentSection::Heading {
            title: "Struktur",
            subtitle: Some("Unsere ORBAT vom Gast bis zum Offizier"),
        },
        ContentSection::Bullets {
            title: "ORBAT",
            items: ORBAT.to_vec(),
        },
        ContentSection::Heading {
            title: "Was dich erwartet",
            subtitle: None,
        },
    ];
    for (title, description) in FEATURES {
        sections.push(ContentSection::Heading {
            title,
            subtitle: Some(description),
        });
    }
    sections.push(ContentSection::Bullets {
        title: "Voraussetzungen",
        items: REQUIREMENTS.to_vec(),
    });

    Page {
        title: SLIDES[0].title,
        subtitle: SLIDES[0].subtitle,
        sections,
    }
}

/// Banner carousel.
///
/// Advances on its own every `SLIDE_INTERVAL`; any manual move restarts the
/// interval. Time is passed in so the caller owns the clock.
#[derive(Debug, Clone)]
pub struct Slideshow {
    current: usize,
    len: usize,
    next_advance: Instant,
}

impl Slideshow {
    pub fn new(len: usize, now: Instant) -> Self {
        Self {
            current: 0,
            len,
            next_advance: now + SLIDE_INTERVAL,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn restart(&mut self, now: Instant) {
        self.next_advance = now + SLIDE_INTERVAL;
    }

    pub fn next(&mut self, now: Instant) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.restart(now);
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len > 0 {
            self.current = if self.current == 0 { self.len - 1 } else { self.current - 1 };
        }
        self.restart(now);
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if index < self.len {
            self.current = index;
            self.restart(now);
            true
        } else {
            false
        }
    }

    /// Advance if the interval has elapsed. Returns whether it moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if now >= self.next_advance {
            self.next(now);
            true
        } else {
            false
        }
    }

    /// How long until the next automatic advance.
    pub fn time_until_advance(&self, now: Instant) -> Duration {
        self.next_advance.saturating_duration_since(now)
    }
}
