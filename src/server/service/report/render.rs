//! Email rendering for environmental reports.
//!
//! Produces the subject line and a self-contained HTML body with inline styles.

use askama::Template;

use crate::model::{
    habit::{HydrationHabit, PackagingHabit, TransportMethod},
    report::ReportDto,
};

/// Subject line of the report email
pub fn render_subject(report: &ReportDto) -> String {
    format!("Tu Informe Ambiental - {}", report.student.name)
}

/// Sentence comparing the student against the average, shown under the comparison figures
pub fn comparison_sentence(percent_below_average: f64) -> String {
    if percent_below_average > 0.0 {
        format!(
            "¡Felicidades! Contaminas un {:.1}% menos que la media de estudiantes.",
            percent_below_average
        )
    } else if percent_below_average < 0.0 {
        format!(
            "Tu impacto está {:.1}% por encima de la media de estudiantes.",
            percent_below_average.abs()
        )
    } else {
        "Tu impacto está justo en la media de estudiantes.".to_string()
    }
}

/// HTML body of the report email, rendered from `templates/report.html`
#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    name: &'a str,
    distance: f64,
    transport: &'static str,
    hydration: &'static str,
    packaging: &'static str,
    daily_emissions: f64,
    weekly_emissions: f64,
    yearly_emissions: f64,
    average_daily: f64,
    comparison_color: &'static str,
    comparison: String,
    home: &'a [String],
    school: &'a [String],
}

/// Renders the HTML body of the report email
///
/// Student input is escaped by the template engine.
pub fn render_html(report: &ReportDto) -> Result<String, askama::Error> {
    let calculation = &report.calculation;
    let comparison_color = if report.percent_below_average > 0.0 {
        "#2E7D32"
    } else {
        "#d32f2f"
    };

    ReportTemplate {
        name: &report.student.name,
        distance: calculation.distance,
        transport: transport_label(calculation.transport_method),
        hydration: hydration_label(calculation.hydration_habit),
        packaging: packaging_label(calculation.packaging_habit),
        daily_emissions: calculation.daily_emissions,
        weekly_emissions: calculation.weekly_emissions,
        yearly_emissions: calculation.yearly_emissions,
        average_daily: report.average_daily,
        comparison_color,
        comparison: comparison_sentence(report.percent_below_average),
        home: &report.recommendations.home,
        school: &report.recommendations.school,
    }
    .render()
}

fn transport_label(method: TransportMethod) -> &'static str {
    match method {
        TransportMethod::Walking => "A pie",
        TransportMethod::Bicycle => "Bicicleta",
        TransportMethod::CarSolo => "Coche (solo)",
        TransportMethod::CarShared => "Coche (compartido)",
        TransportMethod::Motorcycle => "Moto",
        TransportMethod::PublicTransport => "Autobús/Metro",
        TransportMethod::Train => "Tren",
        TransportMethod::ElectricCar => "Coche eléctrico",
    }
}

fn hydration_label(habit: HydrationHabit) -> &'static str {
    match habit {
        HydrationHabit::PlasticBottle => "Botella de plástico",
        HydrationHabit::SteelBottle => "Botella reutilizable",
        HydrationHabit::SoftDrinks => "Solo refrescos",
    }
}

fn packaging_label(habit: PackagingHabit) -> &'static str {
    match habit {
        PackagingHabit::AluminumFoil => "Papel de aluminio",
        PackagingHabit::ZeroWaste => "Método sin residuos",
    }
}
