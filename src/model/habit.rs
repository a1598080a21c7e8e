//! Commute and consumption habits collected by the calculator form.
//!
//! Each habit is a closed enum serialized with the kebab-case identifiers the form submits
//! (`car-solo`, `plastic-bottle`, ...). The same identifiers are stored in the `calculation`
//! table, so [`as_str`](TransportMethod::as_str) and [`FromStr`] are the only conversions
//! between the database representation and the typed value.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a stored or submitted habit identifier is not a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} value: {value:?}")]
pub struct UnknownHabitError {
    /// Name of the habit category the value was parsed as
    pub kind: &'static str,
    /// The rejected identifier
    pub value: String,
}

/// How the student travels to school.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMethod {
    Walking,
    Bicycle,
    CarSolo,
    CarShared,
    Motorcycle,
    PublicTransport,
    Train,
    ElectricCar,
}

impl TransportMethod {
    /// Every transport method, in form order.
    pub const ALL: [TransportMethod; 8] = [
        Self::Walking,
        Self::Bicycle,
        Self::CarSolo,
        Self::CarShared,
        Self::Motorcycle,
        Self::PublicTransport,
        Self::Train,
        Self::ElectricCar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Bicycle => "bicycle",
            Self::CarSolo => "car-solo",
            Self::CarShared => "car-shared",
            Self::Motorcycle => "motorcycle",
            Self::PublicTransport => "public-transport",
            Self::Train => "train",
            Self::ElectricCar => "electric-car",
        }
    }
}

/// What the student drinks from during the school day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HydrationHabit {
    PlasticBottle,
    SteelBottle,
    SoftDrinks,
}

impl HydrationHabit {
    /// Every hydration habit, in form order.
    pub const ALL: [HydrationHabit; 3] = [Self::PlasticBottle, Self::SteelBottle, Self::SoftDrinks];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlasticBottle => "plastic-bottle",
            Self::SteelBottle => "steel-bottle",
            Self::SoftDrinks => "soft-drinks",
        }
    }
}

/// How the student wraps their lunch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingHabit {
    AluminumFoil,
    ZeroWaste,
}

impl PackagingHabit {
    /// Every packaging habit, in form order.
    pub const ALL: [PackagingHabit; 2] = [Self::AluminumFoil, Self::ZeroWaste];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AluminumFoil => "aluminum-foil",
            Self::ZeroWaste => "zero-waste",
        }
    }
}

macro_rules! impl_habit_conversions {
    ($habit:ty, $kind:literal) => {
        impl FromStr for $habit {
            type Err = UnknownHabitError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|variant| variant.as_str() == value)
                    .ok_or_else(|| UnknownHabitError {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $habit {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_habit_conversions!(TransportMethod, "transport method");
impl_habit_conversions!(HydrationHabit, "hydration habit");
impl_habit_conversions!(PackagingHabit, "packaging habit");
