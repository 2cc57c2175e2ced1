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
Puntuación de eficiencia, sostenibilidad y coste
================================================

Calcula la terna de puntuaciones en [0,100] y la calificación por letras.

Cada puntuación parcial es una recta decreciente y acotada del consumo
mensual estimado (a menor consumo, mayor puntuación). Con equipos importados
se aplican dos bonificaciones: por fracción de equipos eficientes (hasta +15
a eficiencia) y por fracción de parque joven (hasta +10 a sostenibilidad);
ambas entran en la puntuación de coste a mitad de peso.
*/

use crate::stats::clamp;
use crate::types::{Appliances, EnergyScore, Grade, Readings};

/// Bonificación máxima por fracción de equipos eficientes
pub const EFFICIENT_FLEET_BONUS: f32 = 15.0;

/// Bonificación máxima por fracción de parque joven (<= 5 años)
pub const YOUNG_FLEET_BONUS: f32 = 10.0;

/// Antigüedad máxima de un equipo considerado joven [años]
pub const YOUNG_AGE_YEARS: f32 = 5.0;

/// Calcula la terna de puntuaciones y la calificación global
///
/// Sin lecturas ni equipos devuelve el centinela de estado vacío: todas las
/// puntuaciones a 0 y calificación `F` (no es un error).
pub fn energy_score(readings: &Readings, appliances: &Appliances) -> EnergyScore {
    if readings.is_empty() && appliances.is_empty() {
        return EnergyScore::default();
    }
    let monthly = readings.monthly_kwh();

    // rectas decrecientes acotadas del consumo mensual
    let mut efficiency = clamp(100.0 - monthly / 10.0, 0.0, 100.0);
    let mut sustainability = clamp(100.0 - monthly / 12.0, 0.0, 100.0);
    let mut cost = clamp(100.0 - monthly / 8.0, 0.0, 100.0);

    if !appliances.is_empty() {
        let n = appliances.len() as f32;
        let f_eff = appliances.data.iter().filter(|a| a.is_efficient()).count() as f32 / n;
        let f_young = appliances
            .data
            .iter()
            .filter(|a| a.age_years <= YOUNG_AGE_YEARS)
            .count() as f32
            / n;
        efficiency = clamp(efficiency + EFFICIENT_FLEET_BONUS * f_eff, 0.0, 100.0);
        sustainability = clamp(sustainability + YOUNG_FLEET_BONUS * f_young, 0.0, 100.0);
        cost = clamp(
            cost + (EFFICIENT_FLEET_BONUS * f_eff + YOUNG_FLEET_BONUS * f_young) / 2.0,
            0.0,
            100.0,
        );
    }

    let efficiency = efficiency.round();
    let sustainability = sustainability.round();
    let cost = cost.round();
    let overall = ((efficiency + sustainability + cost) / 3.0).round();

    EnergyScore {
        overall_score: overall,
        efficiency_score: efficiency,
        sustainability_score: sustainability,
        cost_optimization_score: cost,
        grade: Grade::from_score(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::types::Mode;

    #[test]
    fn tscore_empty_state_sentinel() {
        let score = energy_score(&Readings::default(), &Appliances::default());
        assert_eq!(score.overall_score, 0.0);
        assert_eq!(score.efficiency_score, 0.0);
        assert_eq!(score.sustainability_score, 0.0);
        assert_eq!(score.cost_optimization_score, 0.0);
        assert_eq!(score.grade, Grade::F);
    }

    #[test]
    fn tscore_low_consumption_high_grade() {
        // 3 lecturas, 6 kWh tomados como estimación mensual
        let (readings, _) = Readings::parse_with_mode(
            "timestamp,device,kwh
2025-01-01T00:00:00,nevera,2.0
2025-01-01T01:00:00,nevera,2.0
2025-01-01T02:00:00,nevera,2.0
",
            Mode::Household,
        );
        let score = energy_score(&readings, &Appliances::default());
        // 100 - 6/10 = 99.4 -> 99; 100 - 6/12 = 99.5 -> 100; 100 - 6/8 = 99.25 -> 99
        assert_eq!(score.efficiency_score, 99.0);
        assert_eq!(score.sustainability_score, 100.0);
        assert_eq!(score.cost_optimization_score, 99.0);
        assert_eq!(score.overall_score, 99.0);
        assert_eq!(score.grade, Grade::APlus);
    }

    #[test]
    fn tscore_appliance_bonuses() {
        // parque totalmente eficiente y joven: bonificación completa
        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
nevera,refrigerator,,,150,A+,2,24
lavadora,washing_machine,,,500,A,3,1
",
        );
        let readings = Readings::default();
        let with_apps = energy_score(&readings, &apps);
        // sin lecturas el consumo mensual es 0: rectas al máximo, acotadas a 100
        assert_eq!(with_apps.efficiency_score, 100.0);
        assert_eq!(with_apps.sustainability_score, 100.0);
        assert_eq!(with_apps.cost_optimization_score, 100.0);
        assert_eq!(with_apps.grade, Grade::APlus);
    }

    #[test]
    fn tscore_bonus_shifts_grade() {
        // 24 filas (ventana corta): 300 kWh tomados directamente como mes
        // eficiencia 70, sostenibilidad 75, coste 62.5
        let mut csv = String::from("timestamp,device,kwh\n");
        for _ in 0..24 {
            csv.push_str("2025-01-01T00:00:00,acumulador,12.5\n");
        }
        let (readings, _) = Readings::parse_with_mode(&csv, Mode::Household);
        let base = energy_score(&readings, &Appliances::default());
        assert_eq!(base.efficiency_score, 70.0);
        assert_eq!(base.sustainability_score, 75.0);
        assert_eq!(base.cost_optimization_score, 62.0);

        let (apps, _) = Appliances::parse(
            "name,type,brand,model,rated_power,rating,age,hours
nevera,refrigerator,,,150,A+,2,24
",
        );
        let boosted = energy_score(&readings, &apps);
        assert_eq!(boosted.efficiency_score, 85.0);
        assert_eq!(boosted.sustainability_score, 85.0);
        // 62.5 + (15 + 10)/2 = 75
        assert_eq!(boosted.cost_optimization_score, 75.0);
    }
}
