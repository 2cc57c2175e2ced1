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
Lecturas de consumo energético
==============================

Define los tipos Reading (una lectura) y Readings (lista de lecturas) y su
interpretación desde CSV posicional.

Política de filas explícita:

- la línea 0 es cabecera y se ignora (las columnas se consumen por posición,
  no por nombre)
- las filas con menos de 3 campos se descartan y se contabilizan
- los valores de `kwh` no numéricos o negativos se fuerzan a 0 y se
  contabilizan
*/

use std::collections::HashSet;
use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EnermonError;
use crate::stats::vecsum;
use crate::types::Mode;

/// Número de filas a partir del cual la proyección mensual usa la media diaria
///
/// Reading sets spanning more than this many rows are taken to cover more
/// than one day and are extrapolated from the daily average.
pub const DAILY_AVG_THRESHOLD: usize = 24;

/// Días del mes de referencia para la extrapolación mensual
pub const MONTH_DAYS: f32 = 30.0;

/// Lectura de energía: una muestra de consumo de un dispositivo
///
/// Energy reading: one timestamped consumption sample for a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Sello de tiempo ISO-8601 (p.e. `2025-01-01T00:00:00`)
    pub timestamp: String,
    /// Identificador del dispositivo
    pub device: String,
    /// Consumo [kWh], nunca negativo tras la interpretación
    pub kwh: f32,
    /// Identificador de máquina (solo modo industria)
    pub machine_id: Option<String>,
    /// Identificador de proceso (solo modo industria)
    pub process_id: Option<String>,
}

impl Reading {
    /// Fecha de la lectura (prefijo `AAAA-MM-DD` del sello de tiempo)
    pub fn date(&self) -> &str {
        self.timestamp.split('T').next().unwrap_or("")
    }

    /// Clave de agrupación para el desglose por dispositivo
    ///
    /// En modo industria se agrupa por `machine_id` cuando está presente.
    pub fn group_key(&self, mode: Mode) -> &str {
        match (mode, &self.machine_id) {
            (Mode::Industry, Some(id)) => id,
            _ => &self.device,
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.timestamp, self.device, self.kwh)?;
        if let Some(machine) = &self.machine_id {
            write!(f, ",{}", machine)?;
            if let Some(process) = &self.process_id {
                write!(f, ",{}", process)?;
            }
        }
        Ok(())
    }
}

impl str::FromStr for Reading {
    type Err = EnermonError;

    /// Interpreta una fila CSV en disposición de modo hogar
    fn from_str(s: &str) -> Result<Reading, Self::Err> {
        let items: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if items.len() < 3 {
            return Err(EnermonError::ParseError(s.into()));
        }
        Ok(reading_from_fields(&items).0)
    }
}

/// Construye la lectura desde los campos posicionales de una fila
///
/// Devuelve además si el valor de `kwh` tuvo que forzarse a 0.
fn reading_from_fields(items: &[&str]) -> (Reading, bool) {
    let (kwh, zeroed) = match items[2].parse::<f32>() {
        Ok(v) if v >= 0.0 => (v, false),
        _ => (0.0, true),
    };
    let optfield = |i: usize| -> Option<String> {
        items
            .get(i)
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string())
    };
    let reading = Reading {
        timestamp: items[0].to_string(),
        device: items[1].to_string(),
        kwh,
        machine_id: optfield(3),
        process_id: optfield(4),
    };
    (reading, zeroed)
}

/// Recuento de incidencias al interpretar un CSV
///
/// Parse bookkeeping surfaced to callers so the silent-defaulting policy of
/// the row parser stays visible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Filas descartadas (menos de 3 campos o sin nombre)
    pub skipped_rows: usize,
    /// Valores de consumo forzados a 0 (no numéricos o negativos)
    pub zeroed_values: usize,
}

/// Lista ordenada de lecturas de consumo
///
/// Una carga nueva sustituye íntegramente a la anterior; no hay semántica de
/// mezcla ni de anexado.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// Lecturas, en orden de aparición
    pub data: Vec<Reading>,
}

impl Readings {
    /// Interpreta el texto CSV completo según el modo indicado
    ///
    /// La disposición de columnas es posicional: en modo hogar las columnas
    /// 0-2 son sello de tiempo, dispositivo y kWh; en modo industria las
    /// columnas 3-4 capturan además `machine_id` y `process_id`.
    pub fn parse_with_mode(s: &str, mode: Mode) -> (Readings, ParseStats) {
        let s_nobom = if s.starts_with('\u{feff}') { &s[3..] } else { s };
        let mut stats = ParseStats::default();
        let mut data = Vec::new();
        // la línea 0 es cabecera
        for line in s_nobom.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let items: Vec<&str> = line.split(',').map(str::trim).collect();
            if items.len() < 3 {
                stats.skipped_rows += 1;
                continue;
            }
            let (mut reading, zeroed) = reading_from_fields(&items);
            if zeroed {
                stats.zeroed_values += 1;
            }
            if mode == Mode::Household {
                reading.machine_id = None;
                reading.process_id = None;
            }
            data.push(reading);
        }
        (Readings { data }, stats)
    }

    /// Número de lecturas
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Indica si no hay lecturas cargadas
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumo total de la serie [kWh]
    pub fn total_kwh(&self) -> f32 {
        let values: Vec<f32> = self.data.iter().map(|r| r.kwh).collect();
        vecsum(&values)
    }

    /// Número de fechas de calendario distintas presentes en la serie
    pub fn distinct_days(&self) -> usize {
        self.data
            .iter()
            .map(Reading::date)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Consumo mensual estimado [kWh/mes]
    ///
    /// Si la serie abarca más de un día ([`DAILY_AVG_THRESHOLD`] filas) se
    /// calcula la media diaria (total / fechas distintas) y se escala a 30
    /// días; en caso contrario el total se toma directamente como estimación
    /// mensual. Es una extrapolación lineal, no un modelo de facturación.
    pub fn monthly_kwh(&self) -> f32 {
        let total = self.total_kwh();
        if self.data.len() > DAILY_AVG_THRESHOLD {
            total / self.distinct_days().max(1) as f32 * MONTH_DAYS
        } else {
            total
        }
    }
}

impl str::FromStr for Readings {
    type Err = EnermonError;

    /// Interpreta un CSV en modo hogar descartando el recuento de incidencias
    fn from_str(s: &str) -> Result<Readings, Self::Err> {
        Ok(Readings::parse_with_mode(s, Mode::Household).0)
    }
}

impl fmt::Display for Readings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datalines = self
            .data
            .iter()
            .map(|r| format!("{}", r))
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "timestamp,device,kwh\n{}", datalines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TREADINGS: &str = "timestamp,device,kwh
2025-01-01T00:00:00,nevera,0.5
2025-01-01T01:00:00,horno,1.2
2025-01-02T00:00:00,nevera,0.6
corta
2025-01-02T01:00:00,horno,abc
2025-01-02T02:00:00,nevera,-1.0
";

    #[test]
    fn treadings_parse() {
        let (readings, stats) = Readings::parse_with_mode(TREADINGS, Mode::Household);
        // la fila corta se descarta; las filas con kwh no válido se conservan a 0
        assert_eq!(readings.len(), 5);
        assert_eq!(stats.skipped_rows, 1);
        assert_eq!(stats.zeroed_values, 2);
        assert_eq!(readings.data[1].device, "horno");
        assert_eq!(readings.data[3].kwh, 0.0);
        assert_eq!(readings.data[4].kwh, 0.0);
    }

    #[test]
    fn treadings_industry_columns() {
        let csv = "timestamp,device,kwh,machine_id,process_id
2025-01-01T00:00:00,linea1,3.4,M-01,P-77
2025-01-01T01:00:00,linea1,2.2,M-02
2025-01-01T02:00:00,linea2,1.1
";
        let (readings, stats) = Readings::parse_with_mode(csv, Mode::Industry);
        assert_eq!(stats.skipped_rows, 0);
        assert_eq!(readings.data[0].machine_id.as_deref(), Some("M-01"));
        assert_eq!(readings.data[0].process_id.as_deref(), Some("P-77"));
        assert_eq!(readings.data[1].process_id, None);
        assert_eq!(readings.data[2].machine_id, None);
        // en modo industria el desglose agrupa por máquina cuando existe
        assert_eq!(readings.data[0].group_key(Mode::Industry), "M-01");
        assert_eq!(readings.data[2].group_key(Mode::Industry), "linea2");
    }

    #[test]
    fn treadings_household_ignores_extra_columns() {
        let csv = "timestamp,device,kwh
2025-01-01T00:00:00,nevera,0.5,M-01,P-77
";
        let (readings, _) = Readings::parse_with_mode(csv, Mode::Household);
        assert_eq!(readings.data[0].machine_id, None);
        assert_eq!(readings.data[0].process_id, None);
    }

    #[test]
    fn treadings_days_and_monthly() {
        let (readings, _) = Readings::parse_with_mode(TREADINGS, Mode::Household);
        assert_eq!(readings.distinct_days(), 2);
        // 5 filas <= 24: el total se toma directamente como estimación mensual
        assert_eq!(readings.monthly_kwh(), readings.total_kwh());
    }
}
