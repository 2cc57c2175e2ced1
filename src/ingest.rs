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
Acceso a archivos CSV de entrada
================================

Comprobaciones previas a la interpretación: extensión `.csv` y tamaño máximo
de 10 MiB, ambas verificadas antes de leer el contenido. El fallo se informa
con un único mensaje por archivo; el diagnóstico por filas corresponde al
recuento de incidencias de la interpretación.
*/

use std::fs;
use std::path::Path;

use crate::error::EnermonError;

/// Tamaño máximo admitido del archivo CSV [bytes]
pub const MAX_CSV_BYTES: u64 = 10 * 1024 * 1024;

/// Lee un archivo CSV comprobando extensión y tamaño
pub fn read_csv_file(path: &Path) -> Result<String, EnermonError> {
    let ext_ok = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !ext_ok {
        return Err(EnermonError::FileFormat(path.display().to_string()));
    }
    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_CSV_BYTES {
        return Err(EnermonError::FileTooBig(
            path.display().to_string(),
            metadata.len(),
        ));
    }
    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn tingest_rejects_extension() {
        let result = read_csv_file(Path::new("lecturas.txt"));
        match result {
            Err(EnermonError::FileFormat(_)) => {}
            other => panic!("se esperaba FileFormat, se obtuvo {:?}", other),
        }
    }

    #[test]
    fn tingest_reads_csv() {
        let dir = std::env::temp_dir();
        let path = dir.join("enermon_ingest_test.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "timestamp,device,kwh").unwrap();
        writeln!(file, "2025-01-01T00:00:00,nevera,0.5").unwrap();
        let text = read_csv_file(&path).unwrap();
        assert!(text.contains("nevera"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn tingest_missing_file_is_io_error() {
        let result = read_csv_file(Path::new("no_existe.csv"));
        match result {
            Err(EnermonError::Io(_)) => {}
            other => panic!("se esperaba Io, se obtuvo {:?}", other),
        }
    }
}
