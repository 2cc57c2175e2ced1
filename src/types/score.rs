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

/// Calificación energética por letras
///
/// Letter grade assigned from the overall score by fixed thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Puntuación global >= 90
    #[serde(rename = "A+")]
    APlus,
    /// Puntuación global >= 85
    #[serde(rename = "A")]
    A,
    /// Puntuación global >= 80
    #[serde(rename = "B+")]
    BPlus,
    /// Puntuación global >= 75
    #[serde(rename = "B")]
    B,
    /// Puntuación global >= 70
    #[serde(rename = "C+")]
    CPlus,
    /// Puntuación global >= 60
    #[serde(rename = "C")]
    C,
    /// Puntuación global >= 50
    #[serde(rename = "D")]
    D,
    /// Puntuación global < 50, y valor centinela del estado vacío
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Calificación correspondiente a una puntuación global [0,100]
    pub fn from_score(score: f32) -> Grade {
        match score {
            s if s >= 90.0 => Grade::APlus,
            s if s >= 85.0 => Grade::A,
            s if s >= 80.0 => Grade::BPlus,
            s if s >= 75.0 => Grade::B,
            s if s >= 70.0 => Grade::CPlus,
            s if s >= 60.0 => Grade::C,
            s if s >= 50.0 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", label)
    }
}

impl str::FromStr for Grade {
    type Err = EnermonError;

    fn from_str(s: &str) -> Result<Grade, Self::Err> {
        match s.trim() {
            "A+" => Ok(Grade::APlus),
            "A" => Ok(Grade::A),
            "B+" => Ok(Grade::BPlus),
            "B" => Ok(Grade::B),
            "C+" => Ok(Grade::CPlus),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(EnermonError::GradeUnknown(s.into())),
        }
    }
}

/// Terna de puntuaciones de eficiencia con calificación global
///
/// Cada puntuación está en [0,100]. Sin lecturas ni equipos, todas las
/// puntuaciones valen 0 y la calificación es `F` (estado vacío, no error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyScore {
    /// Puntuación global (media de las tres parciales)
    pub overall_score: f32,
    /// Puntuación de eficiencia
    pub efficiency_score: f32,
    /// Puntuación de sostenibilidad
    pub sustainability_score: f32,
    /// Puntuación de optimización de coste
    pub cost_optimization_score: f32,
    /// Calificación por letras
    pub grade: Grade,
}

impl Default for EnergyScore {
    fn default() -> Self {
        EnergyScore {
            overall_score: 0.0,
            efficiency_score: 0.0,
            sustainability_score: 0.0,
            cost_optimization_score: 0.0,
            grade: Grade::F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tgrade_thresholds() {
        assert_eq!(Grade::from_score(95.0), Grade::APlus);
        assert_eq!(Grade::from_score(90.0), Grade::APlus);
        assert_eq!(Grade::from_score(87.0), Grade::A);
        assert_eq!(Grade::from_score(80.0), Grade::BPlus);
        assert_eq!(Grade::from_score(76.0), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::CPlus);
        assert_eq!(Grade::from_score(65.0), Grade::C);
        assert_eq!(Grade::from_score(50.0), Grade::D);
        assert_eq!(Grade::from_score(49.9), Grade::F);
    }

    #[test]
    fn tgrade_roundtrip() {
        assert_eq!("A+".parse::<Grade>().unwrap(), Grade::APlus);
        assert_eq!(Grade::BPlus.to_string(), "B+");
    }
}
