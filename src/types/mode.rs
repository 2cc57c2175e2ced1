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

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::EnermonError;

/// Modo de explotación de la instalación monitorizada
///
/// Operation mode of the monitored installation. It selects the CSV column
/// layout of the readings, the grouping key of the per-device breakdown and
/// the carbon intensity of the footprint estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Doméstico (vivienda)
    Household,
    /// Industrial (planta con máquinas y procesos)
    Industry,
}

impl Mode {
    /// Intensidad de carbono del modo [kg CO₂e/kWh]
    ///
    /// Single source for the constant; the household and industry variants of
    /// the footprint estimate only differ in this value.
    pub fn carbon_intensity(self) -> f32 {
        match self {
            Mode::Household => 0.85,
            Mode::Industry => 0.92,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Household
    }
}

impl str::FromStr for Mode {
    type Err = EnermonError;

    fn from_str(s: &str) -> Result<Mode, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hogar" | "household" => Ok(Mode::Household),
            "industria" | "industry" => Ok(Mode::Industry),
            _ => Err(EnermonError::ModeUnknown(s.into())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Household => write!(f, "household"),
            Mode::Industry => write!(f, "industry"),
        }
    }
}
