//! Advisory text for the results page and the emailed report.
//!
//! Every student receives the same baseline advice for home and school. Habits with a high
//! impact (driving alone, single-use plastic bottles, aluminium foil) additionally prepend one
//! targeted tip to the school list. Rules run in the order transport, hydration, packaging, and
//! each one inserts at the front, so the last matching rule ends up first.

use crate::model::{
    calculation::RecommendationsDto,
    habit::{HydrationHabit, PackagingHabit, TransportMethod},
};

/// Baseline advice for home
pub static HOME_RECOMMENDATIONS: [&str; 4] = [
    "Usa LED de bajo consumo energético",
    "Desenchufa dispositivos cuando no los uses",
    "Optimiza la calefacción (18-20°C)",
    "Aprovecha la luz natural durante el día",
];

/// Baseline advice for school
pub static SCHOOL_RECOMMENDATIONS: [&str; 4] = [
    "Usa transporte compartido cuando sea posible",
    "Lleva botella reutilizable",
    "Recicla papel y plástico correctamente",
    "Participa en iniciativas verdes del instituto",
];

/// Prepended for [`TransportMethod::CarSolo`]
pub static CAR_SOLO_RECOMMENDATION: &str = "Considera compartir coche o usar transporte público";
/// Prepended for [`HydrationHabit::PlasticBottle`]
pub static PLASTIC_BOTTLE_RECOMMENDATION: &str =
    "Cambia a una botella reutilizable para reducir residuos";
/// Prepended for [`PackagingHabit::AluminumFoil`]
pub static ALUMINUM_FOIL_RECOMMENDATION: &str = "Usa envoltorio reutilizable para tu bocadillo";

impl TransportMethod {
    fn targeted_recommendation(self) -> Option<&'static str> {
        match self {
            Self::CarSolo => Some(CAR_SOLO_RECOMMENDATION),
            Self::Walking
            | Self::Bicycle
            | Self::CarShared
            | Self::Motorcycle
            | Self::PublicTransport
            | Self::Train
            | Self::ElectricCar => None,
        }
    }
}

impl HydrationHabit {
    fn targeted_recommendation(self) -> Option<&'static str> {
        match self {
            Self::PlasticBottle => Some(PLASTIC_BOTTLE_RECOMMENDATION),
            Self::SteelBottle | Self::SoftDrinks => None,
        }
    }
}

impl PackagingHabit {
    fn targeted_recommendation(self) -> Option<&'static str> {
        match self {
            Self::AluminumFoil => Some(ALUMINUM_FOIL_RECOMMENDATION),
            Self::ZeroWaste => None,
        }
    }
}

/// Selects recommendations for a student's habits.
pub fn recommend(
    transport: TransportMethod,
    hydration: HydrationHabit,
    packaging: PackagingHabit,
) -> RecommendationsDto {
    let home = HOME_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();
    let mut school: Vec<String> = SCHOOL_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();

    let targeted = [
        transport.targeted_recommendation(),
        hydration.targeted_recommendation(),
        packaging.targeted_recommendation(),
    ];

    for recommendation in targeted.into_iter().flatten() {
        school.insert(0, recommendation.to_string());
    }

    RecommendationsDto { home, school }
}
