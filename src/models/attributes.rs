//! Lifestyle attribute vocabularies.
//!
//! Profiles are stored as free text, so every enum here deserializes
//! totally: a missing field, `null`, a non-string value, or a label outside
//! the vocabulary all become `Unknown`. Variants are declared in scale order
//! so that adjacent variants are the "in between" choices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An attribute whose known values sit on an ordered scale
pub trait OrdinalAttribute {
    /// Position on the scale, `None` for unrecognized values
    fn rank(&self) -> Option<u8>;
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $($variant,)+
            #[default]
            Unknown,
        }

        impl $name {
            /// Known values in scale order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parse a stored label; never fails
            pub fn parse(raw: &str) -> Self {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($label => $name::$variant,)+
                    _ => $name::Unknown,
                }
            }

            pub fn as_str(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($label),)+
                    $name::Unknown => None,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }

        impl OrdinalAttribute for $name {
            fn rank(&self) -> Option<u8> {
                Self::ALL.iter().position(|v| v == self).map(|i| i as u8)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.as_str() {
                    Some(label) => serializer.serialize_str(label),
                    None => serializer.serialize_none(),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok(match Value::deserialize(deserializer)? {
                    Value::String(raw) => Self::parse(&raw),
                    _ => $name::Unknown,
                })
            }
        }
    };
}

attribute_enum! {
    /// Whether the person offers a room or needs one
    pub enum HousingStatus {
        HasSpace => "has-space",
        LookingForSpace => "looking-for-space",
    }
}

impl HousingStatus {
    /// `Some(true)` when one side has space and the other is looking,
    /// `None` when either side is unknown
    pub fn complements(&self, other: &HousingStatus) -> Option<bool> {
        if !self.is_known() || !other.is_known() {
            return None;
        }
        Some(self != other)
    }
}

attribute_enum! {
    pub enum PetPreference {
        LovePets => "love-pets",
        OkWithPets => "ok-with-pets",
        NoPets => "no-pets",
    }
}

attribute_enum! {
    pub enum Smoking {
        NonSmoker => "non-smoker",
        OccasionalSmoker => "occasional-smoker",
        RegularSmoker => "regular-smoker",
    }
}

attribute_enum! {
    pub enum Drinking {
        NonDrinker => "non-drinker",
        SocialDrinker => "social-drinker",
        RegularDrinker => "regular-drinker",
    }
}

attribute_enum! {
    pub enum SocialLevel {
        VerySocial => "very-social",
        ModeratelySocial => "moderately-social",
        QuietHomebody => "quiet-homebody",
    }
}

attribute_enum! {
    /// Daily rhythm, stored under `morningPerson`
    pub enum Schedule {
        EarlyBird => "early-bird",
        ModerateSchedule => "moderate-schedule",
        NightOwl => "night-owl",
    }
}

attribute_enum! {
    pub enum CookingStyle {
        LoveCooking => "love-cooking",
        BasicCooking => "basic-cooking",
        MinimalCooking => "minimal-cooking",
    }
}

attribute_enum! {
    pub enum TvHabits {
        TvLover => "tv-lover",
        OccasionalViewer => "occasional-viewer",
        RarelyWatch => "rarely-watch",
    }
}

attribute_enum! {
    pub enum Cleanliness {
        VeryTidy => "very-tidy",
        ModeratelyClean => "moderately-clean",
        RelaxedAboutMess => "relaxed-about-mess",
    }
}

attribute_enum! {
    pub enum GuestPolicy {
        GuestsWelcome => "guests-welcome",
        OccasionalGuests => "occasional-guests",
        RareGuests => "rare-guests",
    }
}

/// Read a free-text field; `null` and missing become empty, scalars are stringified
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

pub(crate) fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_string(deserializer)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Read a flag that may have been stored as a bool or as text
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}
