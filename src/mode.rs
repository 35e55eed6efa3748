use std::fmt;
use std::str::FromStr;

use crate::error::WeightError;

/// Game modes a race can be started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinorMode {
    TimeTrial,
    NormalRace,
    FollowLeader,
    ThreeStrikes,
    FreeForAll,
    CaptureTheFlag,
    Tutorial,
    EasterEgg,
    Overworld,
    Cutscene,
    Soccer,
}

impl MinorMode {
    pub const ALL: [MinorMode; 11] = [
        MinorMode::TimeTrial,
        MinorMode::NormalRace,
        MinorMode::FollowLeader,
        MinorMode::ThreeStrikes,
        MinorMode::FreeForAll,
        MinorMode::CaptureTheFlag,
        MinorMode::Tutorial,
        MinorMode::EasterEgg,
        MinorMode::Overworld,
        MinorMode::Cutscene,
        MinorMode::Soccer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MinorMode::TimeTrial => "time-trial",
            MinorMode::NormalRace => "normal-race",
            MinorMode::FollowLeader => "follow-leader",
            MinorMode::ThreeStrikes => "3-strikes",
            MinorMode::FreeForAll => "free-for-all",
            MinorMode::CaptureTheFlag => "capture-the-flag",
            MinorMode::Tutorial => "tutorial",
            MinorMode::EasterEgg => "easter-egg",
            MinorMode::Overworld => "overworld",
            MinorMode::Cutscene => "cutscene",
            MinorMode::Soccer => "soccer",
        }
    }
}

impl FromStr for MinorMode {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MinorMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| WeightError::UnknownMode { name: s.to_owned() })
    }
}

impl fmt::Display for MinorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The weight list a game mode draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeClass {
    Race,
    Ftl,
    Battle,
    Soccer,
    Tutorial,
}

impl ModeClass {
    pub const ALL: [ModeClass; 5] = [
        ModeClass::Race,
        ModeClass::Ftl,
        ModeClass::Battle,
        ModeClass::Soccer,
        ModeClass::Tutorial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeClass::Race => "race",
            ModeClass::Ftl => "ftl",
            ModeClass::Battle => "battle",
            ModeClass::Soccer => "soccer",
            ModeClass::Tutorial => "tutorial",
        }
    }

    /// Key of this class in the weight document.
    pub fn list_name(&self) -> &'static str {
        match self {
            ModeClass::Race => "race-weight-list",
            ModeClass::Ftl => "ftl-weight-list",
            ModeClass::Battle => "battle-weight-list",
            ModeClass::Soccer => "soccer-weight-list",
            ModeClass::Tutorial => "tutorial-weight-list",
        }
    }

    /// Whether a weight document must define this class.
    pub fn is_required(&self) -> bool {
        !matches!(self, ModeClass::Ftl)
    }
}

impl From<MinorMode> for ModeClass {
    fn from(mode: MinorMode) -> Self {
        match mode {
            MinorMode::TimeTrial | MinorMode::NormalRace => ModeClass::Race,
            MinorMode::FollowLeader => ModeClass::Ftl,
            MinorMode::ThreeStrikes | MinorMode::FreeForAll | MinorMode::CaptureTheFlag => {
                ModeClass::Battle
            }
            MinorMode::Tutorial => ModeClass::Tutorial,
            MinorMode::EasterEgg
            | MinorMode::Overworld
            | MinorMode::Cutscene
            | MinorMode::Soccer => ModeClass::Soccer,
        }
    }
}

impl FromStr for ModeClass {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| WeightError::UnknownMode { name: s.to_owned() })
    }
}

impl fmt::Display for ModeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
