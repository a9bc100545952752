//! Dynamic level tags derived from MIDI velocities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dynamic level of a note, from silence to fortississimo.
///
/// Levels are ordered, so they can be compared and stepped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Dynamics {
    #[serde(rename = "n")]
    Niente,
    Ppp,
    Pp,
    P,
    Mp,
    Mf,
    F,
    Ff,
    Fff,
}

impl Dynamics {
    /// Classifies a MIDI velocity, with 120 as the nominal maximum.
    pub fn from_velocity(velocity: u8) -> Dynamics {
        let n = f64::from(velocity) / 120.0;
        if n <= 0.0 {
            Dynamics::Niente
        } else if n <= 0.16 {
            Dynamics::Ppp
        } else if n <= 0.26 {
            Dynamics::Pp
        } else if n <= 0.36 {
            Dynamics::P
        } else if n <= 0.5 {
            Dynamics::Mp
        } else if n <= 0.65 {
            Dynamics::Mf
        } else if n <= 0.8 {
            Dynamics::F
        } else if n <= 0.9 {
            Dynamics::Ff
        } else {
            Dynamics::Fff
        }
    }

    /// Representative velocity for this level, the upper bound of its
    /// classification band.
    pub fn velocity(&self) -> u8 {
        match self {
            Dynamics::Niente => 0,
            Dynamics::Ppp => 19,
            Dynamics::Pp => 31,
            Dynamics::P => 43,
            Dynamics::Mp => 60,
            Dynamics::Mf => 78,
            Dynamics::F => 96,
            Dynamics::Ff => 108,
            Dynamics::Fff => 114,
        }
    }

    /// One level louder, saturating at fff.
    pub fn louder(&self) -> Dynamics {
        match self {
            Dynamics::Niente => Dynamics::Ppp,
            Dynamics::Ppp => Dynamics::Pp,
            Dynamics::Pp => Dynamics::P,
            Dynamics::P => Dynamics::Mp,
            Dynamics::Mp => Dynamics::Mf,
            Dynamics::Mf => Dynamics::F,
            Dynamics::F => Dynamics::Ff,
            Dynamics::Ff | Dynamics::Fff => Dynamics::Fff,
        }
    }

    /// One level softer, saturating at silence.
    pub fn softer(&self) -> Dynamics {
        match self {
            Dynamics::Niente | Dynamics::Ppp => Dynamics::Niente,
            Dynamics::Pp => Dynamics::Ppp,
            Dynamics::P => Dynamics::Pp,
            Dynamics::Mp => Dynamics::P,
            Dynamics::Mf => Dynamics::Mp,
            Dynamics::F => Dynamics::Mf,
            Dynamics::Ff => Dynamics::F,
            Dynamics::Fff => Dynamics::Ff,
        }
    }
}

impl fmt::Display for Dynamics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Dynamics::Niente => "n",
                Dynamics::Ppp => "ppp",
                Dynamics::Pp => "pp",
                Dynamics::P => "p",
                Dynamics::Mp => "mp",
                Dynamics::Mf => "mf",
                Dynamics::F => "f",
                Dynamics::Ff => "ff",
                Dynamics::Fff => "fff",
            }
        )
    }
}
