//! Closed-choice answers of the questionnaire.
//!
//! Every choice serializes as its integer value. Decoding rejects values
//! outside the declared range instead of clamping them.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Shared behaviour of the questionnaire's enumerated answers.
pub trait Choice: Copy + Sized + Send + Sync + 'static {
    /// Name used in error messages (e.g. "frequency").
    const KIND: &'static str;

    /// Human-readable description of the valid range (e.g. "[0, 3]").
    const EXPECTED: &'static str;

    /// Every variant, ordered by value.
    const ALL: &'static [Self];

    /// The stored integer value.
    fn value(self) -> u8;

    /// The label shown on the questionnaire form.
    fn label(self) -> &'static str;

    /// Reverse table from display label to variant, built on first use.
    fn label_index() -> &'static HashMap<&'static str, Self>;

    fn from_value(value: u8) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.value() == value)
            .ok_or_else(|| CoreError::OutOfRangeValue {
                field: Self::KIND,
                value: value.to_string(),
                expected: Self::EXPECTED,
            })
    }

    /// Look up the variant whose form label is exactly `label`.
    fn from_label(label: &str) -> Option<Self> {
        Self::label_index().get(label).copied()
    }
}

fn build_index<C: Choice>() -> HashMap<&'static str, C> {
    C::ALL.iter().map(|c| (c.label(), *c)).collect()
}

/// How often something happened during the past month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Frequency {
    NotInPastMonth = 0,
    LessThanOnceAWeek = 1,
    OnceOrTwiceAWeek = 2,
    ThreeOrMoreAWeek = 3,
}

impl Choice for Frequency {
    const KIND: &'static str = "frequency";
    const EXPECTED: &'static str = "[0, 3]";
    const ALL: &'static [Self] = &[
        Self::NotInPastMonth,
        Self::LessThanOnceAWeek,
        Self::OnceOrTwiceAWeek,
        Self::ThreeOrMoreAWeek,
    ];

    fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotInPastMonth => "Nenhuma no último mês",
            Self::LessThanOnceAWeek => "Menos de 1 vez/semana",
            Self::OnceOrTwiceAWeek => "1 ou 2 vezes/semana",
            Self::ThreeOrMoreAWeek => "3 ou mais vezes/semana",
        }
    }

    fn label_index() -> &'static HashMap<&'static str, Self> {
        static INDEX: LazyLock<HashMap<&'static str, Frequency>> =
            LazyLock::new(build_index::<Frequency>);
        &INDEX
    }
}

/// Severity of a problem, from none to a big problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Difficulty {
    NoProblem = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl Choice for Difficulty {
    const KIND: &'static str = "difficulty";
    const EXPECTED: &'static str = "[0, 3]";
    const ALL: &'static [Self] = &[Self::NoProblem, Self::Mild, Self::Moderate, Self::Severe];

    fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NoProblem => "Nenhuma dificuldade",
            Self::Mild => "Um problema leve",
            Self::Moderate => "Um problema razoável",
            Self::Severe => "Um grande problema",
        }
    }

    fn label_index() -> &'static HashMap<&'static str, Self> {
        static INDEX: LazyLock<HashMap<&'static str, Difficulty>> =
            LazyLock::new(build_index::<Difficulty>);
        &INDEX
    }
}

/// Self-rated overall sleep quality. 4 is best, 1 is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Quality {
    VeryBad = 1,
    Bad = 2,
    Good = 3,
    VeryGood = 4,
}

impl Choice for Quality {
    const KIND: &'static str = "quality";
    const EXPECTED: &'static str = "[1, 4]";
    const ALL: &'static [Self] = &[Self::VeryBad, Self::Bad, Self::Good, Self::VeryGood];

    fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::VeryGood => "Muito boa",
            Self::Good => "Boa",
            Self::Bad => "Ruim",
            Self::VeryBad => "Muito ruim",
        }
    }

    fn label_index() -> &'static HashMap<&'static str, Self> {
        static INDEX: LazyLock<HashMap<&'static str, Quality>> =
            LazyLock::new(build_index::<Quality>);
        &INDEX
    }
}

/// Whether the respondent shares a room or bed with someone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum PartnerPresence {
    No = 0,
    OtherRoom = 1,
    SameRoom = 2,
    SameBed = 3,
}

impl Choice for PartnerPresence {
    const KIND: &'static str = "partner";
    const EXPECTED: &'static str = "[0, 3]";
    const ALL: &'static [Self] = &[Self::No, Self::OtherRoom, Self::SameRoom, Self::SameBed];

    fn value(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::No => "Não",
            Self::OtherRoom => "Parceiro ou colega, mas em outro quarto",
            Self::SameRoom => "Parceiro no mesmo quarto, mas não na mesma cama",
            Self::SameBed => "Parceiro na mesma cama",
        }
    }

    fn label_index() -> &'static HashMap<&'static str, Self> {
        static INDEX: LazyLock<HashMap<&'static str, PartnerPresence>> =
            LazyLock::new(build_index::<PartnerPresence>);
        &INDEX
    }
}

impl TryFrom<u8> for Frequency {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<u8> for Quality {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl TryFrom<u8> for PartnerPresence {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<Frequency> for u8 {
    fn from(choice: Frequency) -> Self {
        choice.value()
    }
}

impl From<Difficulty> for u8 {
    fn from(choice: Difficulty) -> Self {
        choice.value()
    }
}

impl From<Quality> for u8 {
    fn from(choice: Quality) -> Self {
        choice.value()
    }
}

impl From<PartnerPresence> for u8 {
    fn from(choice: PartnerPresence) -> Self {
        choice.value()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for PartnerPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sum the values of optional answers, counting absent ones as zero.
pub fn sum_present<C: Choice>(answers: &[Option<C>]) -> u32 {
    answers.iter().flatten().map(|c| u32::from(c.value())).sum()
}
