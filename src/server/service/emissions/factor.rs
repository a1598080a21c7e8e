//! Emission coefficients per habit.
//!
//! Transport factors are kg CO₂e per kilometre travelled; hydration and packaging factors are
//! kg CO₂e per school day (amortized over the bottle's lifetime for reusable options). Values
//! follow the Defra 2007 and EEA 2018 reference tables.

use crate::model::habit::{HydrationHabit, PackagingHabit, TransportMethod};

impl TransportMethod {
    /// kg CO₂e per kilometre.
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::Walking => 0.0,
            Self::Bicycle => 0.0,
            Self::CarSolo => 0.171,
            Self::CarShared => 0.085,
            Self::Motorcycle => 0.113,
            Self::PublicTransport => 0.089,
            Self::Train => 0.041,
            Self::ElectricCar => 0.053,
        }
    }
}

impl HydrationHabit {
    /// kg CO₂e per school day.
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::PlasticBottle => 0.1,
            Self::SteelBottle => 0.01,
            Self::SoftDrinks => 0.15,
        }
    }
}

impl PackagingHabit {
    /// kg CO₂e per school day.
    pub const fn emission_factor(self) -> f64 {
        match self {
            Self::AluminumFoil => 0.05,
            Self::ZeroWaste => 0.0,
        }
    }
}
