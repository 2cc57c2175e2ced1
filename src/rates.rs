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
Tarifas y factores de emisión por localización
==============================================

Tabla fija de tarifas eléctricas medias y factores de emisión por
localización, con el símbolo de moneda que alimenta el formato de salida.

Los códigos desconocidos recurren a la fila `US`; el aviso al usuario es
responsabilidad del llamador.
*/

/// Tarifa y factor de emisión de una localización
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Tarifa eléctrica media [moneda/kWh]
    pub cost_per_kwh: f32,
    /// Factor de emisión de la red [kg CO₂e/kWh]
    pub co2_factor: f32,
    /// Símbolo de moneda para el formato de salida
    pub currency: &'static str,
}

/// Entrada de la tabla de localizaciones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocRates {
    /// Código de localización
    pub code: &'static str,
    /// Tarifa y factor de emisión
    pub rates: Rates,
}

/// Localización por defecto (y de respaldo para códigos desconocidos)
pub const LOC_DEFAULT: &str = "US";

/// Tabla de tarifas y factores de emisión por localización
pub const LOC_RATES: [LocRates; 10] = [
    LocRates {
        code: "US",
        rates: Rates {
            cost_per_kwh: 0.13,
            co2_factor: 0.92,
            currency: "$",
        },
    },
    LocRates {
        code: "CA",
        rates: Rates {
            cost_per_kwh: 0.11,
            co2_factor: 0.13,
            currency: "$",
        },
    },
    LocRates {
        code: "UK",
        rates: Rates {
            cost_per_kwh: 0.28,
            co2_factor: 0.23,
            currency: "£",
        },
    },
    LocRates {
        code: "ES",
        rates: Rates {
            cost_per_kwh: 0.25,
            co2_factor: 0.25,
            currency: "€",
        },
    },
    LocRates {
        code: "DE",
        rates: Rates {
            cost_per_kwh: 0.32,
            co2_factor: 0.38,
            currency: "€",
        },
    },
    LocRates {
        code: "FR",
        rates: Rates {
            cost_per_kwh: 0.20,
            co2_factor: 0.06,
            currency: "€",
        },
    },
    LocRates {
        code: "JP",
        rates: Rates {
            cost_per_kwh: 0.26,
            co2_factor: 0.47,
            currency: "¥",
        },
    },
    LocRates {
        code: "CN",
        rates: Rates {
            cost_per_kwh: 0.09,
            co2_factor: 0.65,
            currency: "¥",
        },
    },
    LocRates {
        code: "IN",
        rates: Rates {
            cost_per_kwh: 0.08,
            co2_factor: 0.82,
            currency: "₹",
        },
    },
    LocRates {
        code: "AU",
        rates: Rates {
            cost_per_kwh: 0.30,
            co2_factor: 0.79,
            currency: "$",
        },
    },
];

/// Localiza la fila de tarifas de una localización
///
/// La búsqueda no distingue mayúsculas de minúsculas. Devuelve además si hubo
/// que recurrir a la fila de respaldo ([`LOC_DEFAULT`]).
pub fn rates_from_loc(loc: &str) -> (&'static LocRates, bool) {
    let loc = loc.trim();
    match LOC_RATES
        .iter()
        .find(|row| row.code.eq_ignore_ascii_case(loc))
    {
        Some(row) => (row, false),
        // la primera fila de la tabla es LOC_DEFAULT
        None => (&LOC_RATES[0], true),
    }
}
