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
Tipos de error del crate

Crate error types. Parsing and file-boundary failures are reported through
[`EnermonError`]; the metric computations themselves never fail and degrade
to empty or zero-valued results instead.
*/

use std::fmt;

/// Error de interpretación de datos o de acceso a archivos
#[derive(Debug)]
pub enum EnermonError {
    /// Línea o campo con formato incorrecto
    ParseError(String),
    /// Modo de explotación desconocido
    ModeUnknown(String),
    /// Calificación energética desconocida
    GradeUnknown(String),
    /// Severidad de anomalía desconocida
    SeverityUnknown(String),
    /// Prioridad de recomendación desconocida
    PriorityUnknown(String),
    /// Extensión de archivo no admitida (se espera `.csv`)
    FileFormat(String),
    /// Archivo por encima del tamaño máximo admitido (ruta, tamaño en bytes)
    FileTooBig(String, u64),
    /// Error de E/S
    Io(String),
}

impl fmt::Display for EnermonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnermonError::*;
        match self {
            ParseError(s) => write!(f, "Could not parse \"{}\"", s),
            ModeUnknown(s) => write!(f, "Unknown mode \"{}\"", s),
            GradeUnknown(s) => write!(f, "Unknown grade \"{}\"", s),
            SeverityUnknown(s) => write!(f, "Unknown severity \"{}\"", s),
            PriorityUnknown(s) => write!(f, "Unknown priority \"{}\"", s),
            FileFormat(p) => write!(f, "Unsupported file format (expected .csv): \"{}\"", p),
            FileTooBig(p, size) => write!(f, "File too big: \"{}\" ({} bytes)", p, size),
            Io(s) => write!(f, "I/O error: {}", s),
        }
    }
}

impl std::error::Error for EnermonError {}

impl From<std::num::ParseFloatError> for EnermonError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EnermonError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for EnermonError {
    fn from(err: std::io::Error) -> Self {
        EnermonError::Io(err.to_string())
    }
}
