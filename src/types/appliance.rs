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
Descriptores de equipos
=======================

Define los tipos Appliance (un equipo) y Appliances (lista de equipos).

Un descriptor recoge los metadatos estáticos de un equipo físico; alimenta la
síntesis de lecturas plausibles y las reglas de recomendación de ahorro. Las
filas CSV tienen hasta 12 campos posicionales y las columnas finales son
opcionales; los campos numéricos ausentes toman valores por defecto.
*/

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EnermonError;
use crate::types::ParseStats;

/// Potencia nominal por defecto [W]
pub const RATED_POWER_DEFAULT: f32 = 100.0;

/// Horas de uso diario por defecto [h/día]
pub const USAGE_HOURS_DEFAULT: f32 = 4.0;

/// Descriptor de un equipo o electrodoméstico
///
/// Appliance descriptor: static metadata about a physical device.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Nombre (clave de identificación, unicidad no forzada)
    pub name: String,
    /// Tipo o categoría, texto libre (p.e. `air_conditioner`)
    pub kind: String,
    /// Marca
    pub brand: String,
    /// Modelo
    pub model: String,
    /// Potencia nominal [W]
    pub rated_power: f32,
    /// Calificación de eficiencia energética, texto libre (p.e. `A+`)
    pub rating: String,
    /// Antigüedad [años]
    pub age_years: f32,
    /// Horas de uso diario [h/día]
    pub usage_hours_per_day: f32,
    /// Ubicación dentro de la instalación
    pub location: String,
    /// Fecha de compra
    pub purchase_date: String,
    /// Fin de garantía
    pub warranty_expiry: String,
    /// Programa de mantenimiento
    pub maintenance_schedule: String,
}

impl Appliance {
    /// Consumo mensual nominal [kWh/mes] según potencia y horas de uso
    pub fn monthly_kwh(&self) -> f32 {
        self.rated_power / 1000.0 * self.usage_hours_per_day * 30.0
    }

    /// Indica si la calificación se considera eficiente (contiene `a`)
    pub fn is_efficient(&self) -> bool {
        self.rating.to_lowercase().contains('a')
    }

    /// Tipo normalizado para comparaciones por palabra clave
    ///
    /// Minúsculas y guiones bajos sustituidos por espacios.
    pub fn kind_normalized(&self) -> String {
        self.kind.to_lowercase().replace('_', " ")
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            self.name,
            self.kind,
            self.brand,
            self.model,
            self.rated_power,
            self.rating,
            self.age_years,
            self.usage_hours_per_day,
            self.location,
            self.purchase_date,
            self.warranty_expiry,
            self.maintenance_schedule
        )
    }
}

impl str::FromStr for Appliance {
    type Err = EnermonError;

    /// Interpreta una fila CSV de hasta 12 campos posicionales
    fn from_str(s: &str) -> Result<Appliance, Self::Err> {
        let items: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if items.is_empty() || items[0].is_empty() {
            return Err(EnermonError::ParseError(s.into()));
        }
        let field = |i: usize| items.get(i).copied().unwrap_or("").to_string();
        let numfield = |i: usize, default: f32| -> f32 {
            items
                .get(i)
                .and_then(|v| v.parse::<f32>().ok())
                .unwrap_or(default)
        };
        Ok(Appliance {
            name: field(0),
            kind: field(1),
            brand: field(2),
            model: field(3),
            rated_power: numfield(4, RATED_POWER_DEFAULT),
            rating: field(5),
            age_years: numfield(6, 0.0),
            usage_hours_per_day: numfield(7, USAGE_HOURS_DEFAULT),
            location: field(8),
            purchase_date: field(9),
            warranty_expiry: field(10),
            maintenance_schedule: field(11),
        })
    }
}

/// Lista de descriptores de equipos
///
/// Una importación nueva sustituye íntegramente a la anterior, igual que las
/// lecturas.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliances {
    /// Descriptores, en orden de aparición
    pub data: Vec<Appliance>,
}

impl Appliances {
    /// Interpreta el texto CSV completo de descriptores de equipos
    ///
    /// La línea 0 es cabecera; las filas en blanco o sin nombre se descartan
    /// y se contabilizan.
    pub fn parse(s: &str) -> (Appliances, ParseStats) {
        let s_nobom = if s.starts_with('\u{feff}') { &s[3..] } else { s };
        let mut stats = ParseStats::default();
        let mut data = Vec::new();
        for line in s_nobom.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.parse::<Appliance>() {
                Ok(app) => data.push(app),
                Err(_) => stats.skipped_rows += 1,
            }
        }
        (Appliances { data }, stats)
    }

    /// Número de equipos
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Indica si no hay equipos importados
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl str::FromStr for Appliances {
    type Err = EnermonError;

    fn from_str(s: &str) -> Result<Appliances, Self::Err> {
        Ok(Appliances::parse(s).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TAPPS: &str = "name,type,brand,model,rated_power,energy_efficiency_rating,age_years,usage_hours_per_day,location,purchase_date,warranty_expiry,maintenance_schedule
nevera,refrigerator,Frigo,FR-200,150,A+,3,24,cocina,2022-03-01,2027-03-01,anual
aire salon,air_conditioner,Clima,AC-12,1800,C,15,6,salon
lampara,lighting,,,,,
";

    #[test]
    fn tappliances_parse() {
        let (apps, stats) = Appliances::parse(TAPPS);
        assert_eq!(apps.len(), 3);
        assert_eq!(stats.skipped_rows, 0);
        assert_eq!(apps.data[0].rated_power, 150.0);
        assert_eq!(apps.data[1].age_years, 15.0);
        // columnas finales opcionales
        assert_eq!(apps.data[1].purchase_date, "");
    }

    #[test]
    fn tappliances_defaults() {
        let (apps, _) = Appliances::parse(TAPPS);
        let lamp = &apps.data[2];
        assert_eq!(lamp.rated_power, RATED_POWER_DEFAULT);
        assert_eq!(lamp.usage_hours_per_day, USAGE_HOURS_DEFAULT);
        assert_eq!(lamp.age_years, 0.0);
    }

    #[test]
    fn tappliances_kind_matching() {
        let (apps, _) = Appliances::parse(TAPPS);
        assert!(apps.data[0].is_efficient());
        assert!(!apps.data[1].is_efficient());
        assert_eq!(apps.data[1].kind_normalized(), "air conditioner");
    }
}
