use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base path for rank insignia images
const RANK_ICON_PATH: &str = "/img/aufstellung/ranks/";

/// Membership tier. Ordering follows priority, so `Officer` sorts first
/// and `Guest` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum Rank {
    #[serde(rename = "offizier")]
    Officer = 1,
    #[serde(rename = "unteroffizier")]
    NonCommissionedOfficer = 2,
    #[serde(rename = "veteran")]
    Veteran = 3,
    #[serde(rename = "soldat")]
    Soldier = 4,
    #[serde(rename = "rekrut")]
    Recruit = 5,
    #[serde(rename = "gast")]
    Guest = 6,
}

/// Display metadata for a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    /// Insignia file name below `RANK_ICON_PATH`.
    pub icon_file: &'static str,
    pub color: &'static str,
    pub priority: u8,
}

impl RankInfo {
    /// Site path of the rank insignia, e.g. `/img/aufstellung/ranks/TTT-Icon_Gast.png`.
    pub fn icon_path(&self) -> String {
        format!("{}{}", RANK_ICON_PATH, self.icon_file)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown rank: {0}")]
pub struct RankParseError(pub String);

impl Rank {
    /// All ranks in priority order.
    pub const ALL: [Rank; 6] = [
        Rank::Officer,
        Rank::NonCommissionedOfficer,
        Rank::Veteran,
        Rank::Soldier,
        Rank::Recruit,
        Rank::Guest,
    ];

    /// Wire identifier, as used in the REST API and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Officer => "offizier",
            Rank::NonCommissionedOfficer => "unteroffizier",
            Rank::Veteran => "veteran",
            Rank::Soldier => "soldat",
            Rank::Recruit => "rekrut",
            Rank::Guest => "gast",
        }
    }

    pub fn priority(&self) -> u8 {
        *self as u8
    }

    pub fn info(&self) -> RankInfo {
        // Veteran and Soldier share one insignia
        match self {
            Rank::Officer => RankInfo {
                name: "Offizier",
                short_name: "Off.",
                icon_file: "TTT-Icon_Offizier.png",
                color: "text-yellow-500",
                priority: 1,
            },
            Rank::NonCommissionedOfficer => RankInfo {
                name: "Unteroffizier",
                short_name: "Uffz.",
                icon_file: "TTT-Icon_Unteroffizier.png",
                color: "text-gray-400",
                priority: 2,
            },
            Rank::Veteran => RankInfo {
                name: "Veteran",
                short_name: "Vet.",
                icon_file: "TTT-Icon_Soldat-Veteran.png",
                color: "text-green-500",
                priority: 3,
            },
            Rank::Soldier => RankInfo {
                name: "Soldat",
                short_name: "Sdt.",
                icon_file: "TTT-Icon_Soldat-Veteran.png",
                color: "text-blue-900",
                priority: 4,
            },
            Rank::Recruit => RankInfo {
                name: "Rekrut",
                short_name: "Rekr.",
                icon_file: "TTT-Icon_Rekrut.png",
                color: "text-blue-300",
                priority: 5,
            },
            Rank::Guest => RankInfo {
                name: "Gast",
                short_name: "Gast",
                icon_file: "TTT-Icon_Gast.png",
                color: "text-gray-300",
                priority: 6,
            },
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.info().name
    }

    /// Plural heading used on the home page structure overview.
    pub fn plural_name(&self) -> &'static str {
        match self {
            Rank::Officer => "Offiziere",
            Rank::NonCommissionedOfficer => "Unteroffiziere",
            Rank::Veteran => "Veteranen",
            Rank::Soldier => "Soldaten",
            Rank::Recruit => "Rekruten",
            Rank::Guest => "Gäste",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    /// Accepts the wire identifier or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Rank::ALL
            .into_iter()
            .find(|r| r.as_str() == lower || r.display_name().to_lowercase() == lower)
            .ok_or_else(|| RankParseError(s.to_string()))
    }
}
