
use ecocalc_test_utils::prelude::*;

use crate::model::{
    calculation::CalculateDto,
    habit::{HydrationHabit, PackagingHabit, TransportMethod},
};

fn calculate_dto(distance: f64) -> CalculateDto {
    CalculateDto {
        distance,
        transport_method: TransportMethod::CarSolo,
        hydration_habit: HydrationHabit::PlasticBottle,
        packaging_habit: PackagingHabit::AluminumFoil,
    }
}
