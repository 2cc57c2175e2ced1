// Copyright (c) 2019-2023  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Recomendaciones de ahorro
=========================

Conjunto fijo de reglas que, aplicadas a cada equipo importado, deciden de
forma independiente si emiten una recomendación: sustitución por antigüedad,
mejora por calificación poco eficiente, desplazamiento de uso a horas valle,
termostato inteligente y mantenimiento periódico.

Los ahorros se expresan con granularidad mensual usando la tabla de tarifas
de la localización. Las recomendaciones de todos los equipos se concatenan,
se ordenan por prioridad (alta > media > baja, orden estable) y se truncan a
las 6 primeras.
*/

use crate::rates::{rates_from_loc, Rates};
use crate::types::{Advice, AdviceKind, Appliance, Appliances, Priority};

/// Número máximo de recomendaciones devueltas
pub const MAX_ADVICE: usize = 6;

/// Antigüedad a partir de la cual se recomienda la sustitución [años]
pub const REPLACEMENT_AGE_YEARS: f32 = 8.0;

/// Antigüedad a partir de la cual la sustitución ahorra el 50% [años]
pub const REPLACEMENT_AGE_HIGH_YEARS: f32 = 12.0;

/// Tipos de equipo desplazables a horas valle (palabras clave)
pub const SHIFTABLE_KINDS: [&str; 6] = ["hvac", "air", "heater", "water", "washing", "dishwasher"];

/// Construye una recomendación con los ahorros mensuales valorados
fn build_advice(
    app: &Appliance,
    category: AdviceKind,
    priority: Priority,
    savings_kwh: f32,
    savings_cost: f32,
    rates: &Rates,
    title: String,
    description: String,
) -> Advice {
    Advice {
        id: format!(
            "{}-{}",
            app.name.to_lowercase().replace(' ', "-"),
            category.id()
        ),
        title,
        description,
        device: app.name.clone(),
        estimated_savings_kwh: savings_kwh,
        estimated_savings_cost: savings_cost,
        estimated_co2_reduction: savings_kwh * rates.co2_factor,
        priority,
        category,
    }
}

/// Sustitución por antigüedad: 40% de ahorro, 50% por encima de 12 años
fn replacement_advice(app: &Appliance, rates: &Rates) -> Option<Advice> {
    if app.age_years <= REPLACEMENT_AGE_YEARS {
        return None;
    }
    let pct = if app.age_years > REPLACEMENT_AGE_HIGH_YEARS {
        0.5
    } else {
        0.4
    };
    let kwh = app.monthly_kwh() * pct;
    Some(build_advice(
        app,
        AdviceKind::Replacement,
        Priority::High,
        kwh,
        kwh * rates.cost_per_kwh,
        rates,
        format!("Sustituir {}", app.name),
        format!(
            "El equipo tiene {:.0} años; un modelo actual reduciría su consumo en torno al {:.0}%",
            app.age_years,
            pct * 100.0
        ),
    ))
}

/// Mejora por calificación: porcentaje de ahorro según el tramo de la etiqueta
fn upgrade_advice(app: &Appliance, rates: &Rates) -> Option<Advice> {
    let rating = app.rating.to_lowercase();
    if rating.contains('a') {
        return None;
    }
    let (pct, priority) = if rating.contains('b') {
        (0.20, Priority::Medium)
    } else if rating.contains('c') {
        (0.30, Priority::High)
    } else if rating.contains('d') || rating.contains('e') || rating.contains('f') {
        (0.40, Priority::High)
    } else {
        // etiqueta ausente o no reconocida
        (0.25, Priority::Medium)
    };
    let kwh = app.monthly_kwh() * pct;
    Some(build_advice(
        app,
        AdviceKind::EfficiencyUpgrade,
        priority,
        kwh,
        kwh * rates.cost_per_kwh,
        rates,
        format!("Mejorar la eficiencia de {}", app.name),
        format!(
            "Pasar de la calificación \"{}\" a clase A ahorraría en torno al {:.0}% del consumo",
            app.rating,
            pct * 100.0
        ),
    ))
}

/// Desplazamiento a horas valle para tipos con carga desplazable
///
/// Se modela un 30% de carga desplazable y un diferencial punta-valle del 50%
/// de la tarifa; el ahorro en energía es menor (10%) porque el uso no
/// desaparece, se desplaza.
fn scheduling_advice(app: &Appliance, rates: &Rates) -> Option<Advice> {
    let kind = app.kind_normalized();
    if !SHIFTABLE_KINDS.iter().any(|k| kind.contains(k)) {
        return None;
    }
    let monthly = app.monthly_kwh();
    let kwh = monthly * 0.10;
    let cost = monthly * 0.30 * rates.cost_per_kwh * 0.5;
    Some(build_advice(
        app,
        AdviceKind::Scheduling,
        Priority::Medium,
        kwh,
        cost,
        rates,
        format!("Programar {} en horas valle", app.name),
        "Desplazar el uso fuera de la franja punta aprovecha el diferencial tarifario".to_string(),
    ))
}

/// Termostato inteligente para climatización
fn thermostat_advice(app: &Appliance, rates: &Rates) -> Option<Advice> {
    let kind = app.kind_normalized();
    if !(kind.contains("hvac") || kind.contains("air cond")) {
        return None;
    }
    let kwh = app.monthly_kwh() * 0.15;
    Some(build_advice(
        app,
        AdviceKind::SmartThermostat,
        Priority::Medium,
        kwh,
        kwh * rates.cost_per_kwh,
        rates,
        format!("Termostato inteligente para {}", app.name),
        "Un control de consigna con programación horaria recorta en torno al 15% del consumo"
            .to_string(),
    ))
}

/// Mantenimiento periódico, aplicable a cualquier equipo
fn maintenance_advice(app: &Appliance, rates: &Rates) -> Advice {
    let kwh = app.monthly_kwh() * 0.08;
    build_advice(
        app,
        AdviceKind::Maintenance,
        Priority::Low,
        kwh,
        kwh * rates.cost_per_kwh,
        rates,
        format!("Revisar el mantenimiento de {}", app.name),
        "Una puesta a punto periódica mantiene el consumo en torno a un 8% por debajo".to_string(),
    )
}

/// Genera las recomendaciones de ahorro del parque de equipos
///
/// Sin equipos importados devuelve una lista vacía, no un error.
pub fn generate_advice(appliances: &Appliances, loc: &str) -> Vec<Advice> {
    let (row, _) = rates_from_loc(loc);
    let rates = &row.rates;

    let mut advices: Vec<Advice> = Vec::new();
    for app in &appliances.data {
        advices.extend(replacement_advice(app, rates));
        advices.extend(upgrade_advice(app, rates));
        advices.extend(scheduling_advice(app, rates));
        advices.extend(thermostat_advice(app, rates));
        advices.push(maintenance_advice(app, rates));
    }
    advices.sort_by_key(|a| a.priority.rank());
    advices.truncate(MAX_ADVICE);
    advices
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tadvice_old_inefficient_appliance() {
        // 15 años y calificación C: sustitución y mejora, ambas de prioridad alta
        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
caldera,water_heater,,,2000,C,15,3
",
        );
        let advices = generate_advice(&apps, "US");
        let high: Vec<_> = advices
            .iter()
            .filter(|a| a.priority == Priority::High)
            .collect();
        assert!(high.len() >= 2);
        assert!(high.iter().any(|a| a.category == AdviceKind::Replacement));
        assert!(high
            .iter()
            .any(|a| a.category == AdviceKind::EfficiencyUpgrade));
        // por encima de 12 años la sustitución ahorra el 50%
        let replacement = high
            .iter()
            .find(|a| a.category == AdviceKind::Replacement)
            .unwrap();
        let monthly = 2000.0 / 1000.0 * 3.0 * 30.0;
        assert!((replacement.estimated_savings_kwh - monthly * 0.5).abs() < 1e-3);
        assert!((replacement.estimated_co2_reduction - monthly * 0.5 * 0.92).abs() < 1e-3);
    }

    #[test]
    fn tadvice_efficient_young_appliance_only_maintenance() {
        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
nevera,refrigerator,,,150,A+,2,24
",
        );
        let advices = generate_advice(&apps, "US");
        assert_eq!(advices.len(), 1);
        assert_eq!(advices[0].category, AdviceKind::Maintenance);
        assert_eq!(advices[0].priority, Priority::Low);
    }

    #[test]
    fn tadvice_hvac_gets_scheduling_and_thermostat() {
        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
aire salon,air_conditioner,,,1800,A,4,6
",
        );
        let advices = generate_advice(&apps, "US");
        let kinds: Vec<AdviceKind> = advices.iter().map(|a| a.category).collect();
        assert!(kinds.contains(&AdviceKind::Scheduling));
        assert!(kinds.contains(&AdviceKind::SmartThermostat));
        assert!(kinds.contains(&AdviceKind::Maintenance));
        assert!(!kinds.contains(&AdviceKind::Replacement));
    }

    #[test]
    fn tadvice_sorted_and_truncated() {
        // tres equipos viejos e ineficientes generan más de 6 candidatas
        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
caldera,water_heater,,,2000,C,15,3
aire,air_conditioner,,,1800,D,14,6
secadora,dryer,,,1200,F,13,1
",
        );
        let advices = generate_advice(&apps, "ES");
        assert_eq!(advices.len(), MAX_ADVICE);
        // prioridad no creciente a lo largo de la lista
        for pair in advices.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
        // todas las de prioridad alta sobreviven al truncado
        assert_eq!(
            advices
                .iter()
                .filter(|a| a.priority == Priority::High)
                .count(),
            6
        );
    }

    #[test]
    fn tadvice_no_appliances() {
        assert!(generate_advice(&Appliances::default(), "US").is_empty());
    }
}
