// ============================================================================
// BOOKING VIEWMODEL - LÓGICA PURA DEL PRESUPUESTO
// ============================================================================
// Sin DOM, sin async: solo cálculo de duración, precio y formateo.
// Los widgets leen el formulario y delegan aquí.
// ============================================================================

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{BookingSelection, Quote, RentalType};

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Parsear el valor de un input de fecha del formulario.
/// Acepta datetime-local (`2024-01-01T10:30`), con segundos, o fecha sola
/// (medianoche). Un valor no parseable devuelve None y se trata igual que
/// un campo vacío: el resumen se oculta en vez de propagar un precio NaN.
pub fn parse_form_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Calcular el presupuesto a partir de la selección cruda del formulario.
///
/// Devuelve None cuando falta algún campo o alguna fecha no parsea
/// (el resumen debe ocultarse). Un tipo de alquiler desconocido con los
/// cuatro campos rellenos produce un total de 0.00 €, no un error.
///
/// La duración usa el valor absoluto de la diferencia: fechas invertidas
/// dan el mismo importe que el orden correcto.
pub fn compute_quote(selection: &BookingSelection) -> Option<Quote> {
    if !selection.is_complete() {
        return None;
    }

    let start = parse_form_date(&selection.start_date)?;
    let end = parse_form_date(&selection.end_date)?;

    let diff_ms = (end - start).num_milliseconds().abs() as f64;

    // Cada unidad se redondea hacia arriba desde los milisegundos crudos,
    // no derivada de la otra (diff_hours != diff_days * 24 en tramos cortos)
    let diff_hours = (diff_ms / MS_PER_HOUR).ceil() as i64;
    let diff_days = (diff_ms / MS_PER_DAY).ceil() as i64;

    let total_price = match RentalType::parse(&selection.rental_type) {
        Some(rt @ RentalType::Hour) => rt.unit_price() * diff_hours as f64,
        Some(rt @ RentalType::Day) => rt.unit_price() * diff_days as f64,
        Some(rt @ RentalType::Week) => {
            let weeks = (diff_days as f64 / 7.0).ceil();
            rt.unit_price() * weeks
        }
        Some(rt @ RentalType::Month) => {
            // Aproximación fija de 30 días, no meses de calendario
            let months = (diff_days as f64 / 30.0).ceil();
            rt.unit_price() * months
        }
        None => 0.0,
    };

    Some(Quote {
        duration_hours: diff_hours,
        total_price,
    })
}

/// Texto de duración mostrado en el resumen.
/// Menos de 24h se muestra en horas; a partir de 24h en días ENTEROS
/// (floor, no ceil: así lo muestra el escaparate desde siempre, aunque
/// la tarificación por día redondee hacia arriba).
pub fn format_duration(hours: i64) -> String {
    if hours < 24 {
        let plural = if hours > 1 { "s" } else { "" };
        return format!("{} heure{}", hours, plural);
    }
    let days = hours / 24;
    let plural = if days > 1 { "s" } else { "" };
    format!("{} jour{}", days, plural)
}

/// Precio con dos decimales y símbolo de euro
pub fn format_price(total: f64) -> String {
    format!("{:.2} €", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(rental_type: &str, start: &str, end: &str) -> BookingSelection {
        BookingSelection {
            bike_id: "7".into(),
            rental_type: rental_type.into(),
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn hourly_rental_three_hours() {
        let quote = compute_quote(&selection("hour", "2024-01-01T00:00", "2024-01-01T03:00"))
            .expect("quote");
        assert_eq!(quote.duration_hours, 3);
        assert_eq!(quote.total_price, 15.0);
    }

    #[test]
    fn daily_rental_two_days() {
        let quote =
            compute_quote(&selection("day", "2024-01-01", "2024-01-03")).expect("quote");
        assert_eq!(quote.total_price, 30.0);
    }

    #[test]
    fn weekly_rental_rounds_up_to_two_weeks() {
        // 9 días -> ceil(9/7) = 2 semanas
        let quote =
            compute_quote(&selection("week", "2024-01-01", "2024-01-10")).expect("quote");
        assert_eq!(quote.total_price, 120.0);
    }

    #[test]
    fn monthly_rental_uses_thirty_day_blocks() {
        // 45 días -> ceil(45/30) = 2 meses
        let quote =
            compute_quote(&selection("month", "2024-01-01", "2024-02-15")).expect("quote");
        assert_eq!(quote.total_price, 400.0);
    }

    #[test]
    fn hours_and_days_ceil_independently() {
        // 26h: diff_hours = 26, diff_days = ceil(26/24) = 2
        let quote = compute_quote(&selection("hour", "2024-01-01T00:00", "2024-01-02T02:00"))
            .expect("quote");
        assert_eq!(quote.duration_hours, 26);
        assert_eq!(quote.total_price, 130.0);

        let daily = compute_quote(&selection("day", "2024-01-01T00:00", "2024-01-02T02:00"))
            .expect("quote");
        assert_eq!(daily.total_price, 30.0);
    }

    #[test]
    fn missing_field_hides_summary() {
        let mut sel = selection("day", "2024-01-01", "2024-01-03");
        sel.bike_id.clear();
        assert_eq!(compute_quote(&sel), None);

        let mut sel = selection("day", "2024-01-01", "2024-01-03");
        sel.end_date.clear();
        assert_eq!(compute_quote(&sel), None);
    }

    #[test]
    fn unparseable_date_treated_as_missing() {
        assert_eq!(
            compute_quote(&selection("day", "n'importe quoi", "2024-01-03")),
            None
        );
    }

    #[test]
    fn unknown_rental_type_prices_to_zero() {
        let quote =
            compute_quote(&selection("fortnight", "2024-01-01", "2024-01-03")).expect("quote");
        assert_eq!(quote.total_price, 0.0);
        assert_eq!(quote.duration_hours, 48);
    }

    #[test]
    fn reversed_dates_yield_same_price() {
        let forward = compute_quote(&selection("day", "2024-01-01", "2024-01-03")).expect("q");
        let reversed = compute_quote(&selection("day", "2024-01-03", "2024-01-01")).expect("q");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn zero_duration_is_zero_price() {
        let quote = compute_quote(&selection("hour", "2024-01-01T10:00", "2024-01-01T10:00"))
            .expect("quote");
        assert_eq!(quote.duration_hours, 0);
        assert_eq!(quote.total_price, 0.0);
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0 heure");
        assert_eq!(format_duration(1), "1 heure");
        assert_eq!(format_duration(5), "5 heures");
        assert_eq!(format_duration(23), "23 heures");
        // 30h -> floor(30/24) = 1 jour
        assert_eq!(format_duration(30), "1 jour");
        assert_eq!(format_duration(48), "2 jours");
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(15.0), "15.00 €");
        assert_eq!(format_price(0.0), "0.00 €");
        assert_eq!(format_price(2.5), "2.50 €");
    }
}
