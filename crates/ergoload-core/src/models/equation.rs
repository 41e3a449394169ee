// ABOUTME: Equation identifiers and table keys for the Garg, RSST and Kodak methods
// ABOUTME: Stable text forms (garg:11, rsst:sitting/none, ...) with parsing and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ergoload Contributors

use crate::constants::garg::EQUATION_COUNT;
use crate::errors::ErgoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed lookup-table key with its stable identifier and display label
macro_rules! table_key {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every key, in table order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Identifier used in equation ids and JSON
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Human-readable label
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ErgoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str() == normalized)
                    .ok_or_else(|| ErgoError::unknown_equation(s))
            }
        }
    };
}

/// Workload evaluation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Garg, Chaffin & Herrin metabolic prediction equations
    Garg,
    /// RSST position and work-type tables
    Rsst,
    /// Kodak effort point tables (Figures 8-10)
    Kodak,
}

impl Method {
    /// Every method
    pub const ALL: &'static [Self] = &[Self::Garg, Self::Rsst, Self::Kodak];

    /// Get method name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Garg => "garg",
            Self::Rsst => "rsst",
            Self::Kodak => "kodak",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ErgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "garg" => Ok(Self::Garg),
            "rsst" => Ok(Self::Rsst),
            "kodak" => Ok(Self::Kodak),
            other => Err(ErgoError::unknown_equation(format!(
                "{other} (valid methods: garg, rsst, kodak)"
            ))),
        }
    }
}

table_key! {
    /// RSST body position
    RsstPosition {
        /// Seated work
        Sitting => "sitting", "Sitting",
        /// Standing work
        Standing => "standing", "Standing",
        /// Walking
        Walking => "walking", "Walking",
    }
}

table_key! {
    /// RSST work type and intensity
    RsstWorkType {
        /// No work beyond holding the position
        None => "none", "No additional work",
        /// Light hand work
        HandLight => "hand_light", "Hand work, light",
        /// Heavy hand work
        HandHeavy => "hand_heavy", "Hand work, heavy",
        /// Light work with one arm
        OneArmLight => "one_arm_light", "One arm, light",
        /// Heavy work with one arm
        OneArmHeavy => "one_arm_heavy", "One arm, heavy",
        /// Light work with both arms
        TwoArmsLight => "two_arms_light", "Two arms, light",
        /// Heavy work with both arms
        TwoArmsHeavy => "two_arms_heavy", "Two arms, heavy",
        /// Light whole-body work
        BodyLight => "body_light", "Whole body, light",
        /// Moderate whole-body work
        BodyModerate => "body_moderate", "Whole body, moderate",
        /// Heavy whole-body work
        BodyHeavy => "body_heavy", "Whole body, heavy",
        /// Very heavy whole-body work
        BodyVeryHeavy => "body_very_heavy", "Whole body, very heavy",
    }
}

table_key! {
    /// Kodak primary effort type (Figure 8 rows)
    KodakEffortType {
        /// Lifting or carrying a load
        LiftCarry => "lift_carry", "Lift / carry",
        /// Pushing or pulling
        PushPull => "push_pull", "Push / pull",
    }
}

table_key! {
    /// Kodak handling ease (Figure 8 columns)
    HandlingEase {
        /// Good grip, compact load
        Easy => "easy", "Easy",
        /// Awkward grip or bulky load
        Difficult => "difficult", "Difficult",
    }
}

table_key! {
    /// Kodak secondary effort category (Figure 10 rows)
    SecondaryEffort {
        /// Seated
        Sitting => "sitting", "Sitting",
        /// Standing
        Standing => "standing", "Standing",
        /// Walking between stations
        Walking => "walking", "Walking",
        /// Stooping or kneeling
        StoopingKneeling => "stooping_kneeling", "Stooping / kneeling",
        /// Climbing stairs or ladders
        Climbing => "climbing", "Climbing",
        /// Reaching above the shoulders
        OverheadReach => "overhead_reach", "Overhead reach",
    }
}

table_key! {
    /// Kodak secondary effort condition (Figure 10 columns)
    SecondaryCondition {
        /// Now and then
        Occasional => "occasional", "Occasional",
        /// Regularly through the shift
        Frequent => "frequent", "Frequent",
        /// Almost all of the time
        Continuous => "continuous", "Continuous",
    }
}

/// Stable identifier of a catalog entry
///
/// Text forms:
/// - `garg:<1-31>`
/// - `rsst:<position>/<work>`
/// - `kodak-primary:<effort>/<handling>`
/// - `kodak-secondary:<effort>/<condition>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum EquationId {
    /// One of the 31 Garg equations
    Garg {
        /// Equation number (1-31)
        number: u8,
    },
    /// RSST position and work-type table pair
    Rsst {
        /// Body position
        position: RsstPosition,
        /// Work type and intensity
        work: RsstWorkType,
    },
    /// Kodak primary effort (Figures 8 and 9)
    KodakPrimary {
        /// Effort type
        effort: KodakEffortType,
        /// Handling ease
        handling: HandlingEase,
    },
    /// Kodak secondary effort (Figure 10)
    KodakSecondary {
        /// Secondary effort category
        effort: SecondaryEffort,
        /// Exposure condition
        condition: SecondaryCondition,
    },
}

impl EquationId {
    /// Identifier of a Garg equation
    ///
    /// # Errors
    ///
    /// Returns `ErgoError::UnknownEquation` if `number` is not in 1-31
    pub fn garg(number: u8) -> Result<Self, ErgoError> {
        if (1..=EQUATION_COUNT).contains(&number) {
            Ok(Self::Garg { number })
        } else {
            Err(ErgoError::unknown_equation(format!("garg:{number}")))
        }
    }

    /// Identifier of an RSST table pair
    #[must_use]
    pub const fn rsst(position: RsstPosition, work: RsstWorkType) -> Self {
        Self::Rsst { position, work }
    }

    /// Identifier of a Kodak primary effort
    #[must_use]
    pub const fn kodak_primary(effort: KodakEffortType, handling: HandlingEase) -> Self {
        Self::KodakPrimary { effort, handling }
    }

    /// Identifier of a Kodak secondary effort
    #[must_use]
    pub const fn kodak_secondary(effort: SecondaryEffort, condition: SecondaryCondition) -> Self {
        Self::KodakSecondary { effort, condition }
    }

    /// Method this identifier belongs to
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Garg { .. } => Method::Garg,
            Self::Rsst { .. } => Method::Rsst,
            Self::KodakPrimary { .. } | Self::KodakSecondary { .. } => Method::Kodak,
        }
    }
}

impl fmt::Display for EquationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Garg { number } => write!(f, "garg:{number}"),
            Self::Rsst { position, work } => write!(f, "rsst:{position}/{work}"),
            Self::KodakPrimary { effort, handling } => {
                write!(f, "kodak-primary:{effort}/{handling}")
            }
            Self::KodakSecondary { effort, condition } => {
                write!(f, "kodak-secondary:{effort}/{condition}")
            }
        }
    }
}

impl FromStr for EquationId {
    type Err = ErgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ErgoError::unknown_equation(s);
        let (family, key) = s.trim().split_once(':').ok_or_else(unknown)?;
        let pair = || key.split_once('/').ok_or_else(unknown);

        match family.to_lowercase().as_str() {
            "garg" => {
                let number = key.trim().parse::<u8>().map_err(|_| unknown())?;
                Self::garg(number).map_err(|_| unknown())
            }
            "rsst" => {
                let (position, work) = pair()?;
                Ok(Self::rsst(
                    position.parse().map_err(|_| unknown())?,
                    work.parse().map_err(|_| unknown())?,
                ))
            }
            "kodak-primary" => {
                let (effort, handling) = pair()?;
                Ok(Self::kodak_primary(
                    effort.parse().map_err(|_| unknown())?,
                    handling.parse().map_err(|_| unknown())?,
                ))
            }
            "kodak-secondary" => {
                let (effort, condition) = pair()?;
                Ok(Self::kodak_secondary(
                    effort.parse().map_err(|_| unknown())?,
                    condition.parse().map_err(|_| unknown())?,
                ))
            }
            _ => Err(unknown()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_forms_are_case_insensitive() {
        let id: EquationId = "RSST:Walking/Body_Heavy".parse().unwrap();
        assert_eq!(id, EquationId::rsst(RsstPosition::Walking, RsstWorkType::BodyHeavy));
        assert_eq!(id.method(), Method::Rsst);
    }

    #[test]
    fn test_json_shape() {
        let id = EquationId::kodak_primary(KodakEffortType::PushPull, HandlingEase::Easy);
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "method": "kodak_primary", "effort": "push_pull", "handling": "easy" })
        );
        let back: EquationId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_missing_separator_is_unknown() {
        assert!("garg11".parse::<EquationId>().is_err());
        assert!("kodak-secondary:walking".parse::<EquationId>().is_err());
    }
}
