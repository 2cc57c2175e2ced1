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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{App, AppSettings, Arg};

use enermon::error::EnermonError;
use enermon::types::Mode;
use enermon::{read_csv_file, rates_from_loc, AsPlain, DataStore, TOP_DEVICES_DEFAULT};

// Funciones auxiliares -----------------------------------------------------------------------

/// Lee el archivo CSV indicado aplicando las comprobaciones de entrada
fn readcsv(path: &Path, descr: &str) -> String {
    match read_csv_file(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!(
                "ERROR: No se ha podido leer el archivo de {} \"{}\" -> {}",
                descr,
                path.display(),
                err
            );
            match err {
                EnermonError::Io(_) => exit(exitcode::IOERR),
                _ => exit(exitcode::DATAERR),
            }
        }
    }
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = match File::create(&path) {
        Err(err) => panic!(
            "ERROR: no se ha podido escribir en \"{}\": {:?}",
            path.display(),
            err
        ),
        Ok(file) => file,
    };
    if let Err(err) = file.write_all(content) {
        panic!("No se ha podido escribir en {}: {:?}", path.display(), err)
    }
}

/// Obtiene el número de grupos del desglose de la CLI
fn get_top(matches: &clap::ArgMatches<'_>) -> usize {
    if matches.occurrences_of("top") == 0 {
        return TOP_DEVICES_DEFAULT;
    }
    let top = value_t!(matches, "top", usize).unwrap_or_else(|error| {
        eprintln!("ERROR: El número de dispositivos del desglose no es válido");
        if matches.occurrences_of("v") > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    });
    if top == 0 {
        eprintln!("ERROR: el desglose debe incluir al menos un dispositivo");
        exit(exitcode::DATAERR);
    }
    top
}

/// Obtiene la semilla de la síntesis de lecturas de la CLI
fn get_seed(matches: &clap::ArgMatches<'_>) -> u64 {
    value_t!(matches, "semilla", u64).unwrap_or_else(|error| {
        eprintln!("ERROR: La semilla indicada no es un entero válido");
        if matches.occurrences_of("v") > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    })
}

/// Obtiene la fecha de inicio de la síntesis de lecturas de la CLI
fn get_start_date(matches: &clap::ArgMatches<'_>) -> NaiveDate {
    let value = matches.value_of("fecha").unwrap();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_else(|error| {
        eprintln!(
            "ERROR: La fecha de inicio \"{}\" no tiene formato AAAA-MM-DD",
            value
        );
        if matches.occurrences_of("v") > 2 {
            println!("{}", error)
        };
        exit(exitcode::DATAERR);
    })
}

/// Muestra los avisos del recuento de incidencias de la interpretación
fn report_stats(stats: &enermon::types::ParseStats) {
    if stats.skipped_rows > 0 {
        println!(
            "AVISO: {} fila(s) descartada(s) por falta de campos",
            stats.skipped_rows
        );
    }
    if stats.zeroed_values > 0 {
        println!(
            "AVISO: {} valor(es) de consumo no válido(s) forzado(s) a 0",
            stats.zeroed_values
        );
    }
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("EnerMon")
        .bin_name("enermon")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2019-2023 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("EnerMon - Métricas derivadas de monitorización energética.")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_lecturas")
            .short("c")
            .long("lecturas")
            .value_name("ARCHIVO_LECTURAS")
            .required_unless("archivo_equipos")
            .help("Archivo CSV de lecturas de consumo")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_equipos")
            .short("e")
            .long("equipos")
            .value_name("ARCHIVO_EQUIPOS")
            .help("Archivo CSV de descriptores de equipos (sintetiza las lecturas)")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("modo")
            .short("m")
            .long("modo")
            .value_name("MODO")
            .possible_values(&["hogar", "industria"])
            .default_value("hogar")
            .help("Modo de explotación de la instalación\n")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("localizacion")
            .short("l")
            .long("localizacion")
            .value_name("LOCALIZACION")
            .default_value("US")
            .help("Localización que define la tarifa y el factor de emisión (desconocida -> US)")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("top")
            .short("n")
            .long("top")
            .value_name("TOP")
            .default_value("10")
            .help("Número de dispositivos del desglose")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("semilla")
            .long("semilla")
            .value_name("SEMILLA")
            .default_value("42")
            .help("Semilla de la síntesis de lecturas a partir de equipos")
            .takes_value(true))
        .arg(Arg::with_name("fecha")
            .long("fecha")
            .value_name("FECHA_INICIO")
            .default_value("2025-01-01")
            .help("Fecha de inicio (AAAA-MM-DD) de la síntesis de lecturas")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2019-2023 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <dani@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Modo de explotación -------------------------------------------------------------------------
    // los valores admitidos están limitados por la CLI
    let mode = Mode::from_str(matches.value_of("modo").unwrap()).unwrap_or_default();

    // Localización y tarifas ----------------------------------------------------------------------
    let loc = matches.value_of("localizacion").unwrap();
    let (locrow, fallback) = rates_from_loc(loc);
    if fallback {
        println!(
            "AVISO: localización desconocida \"{}\", se usan las tarifas de {}",
            loc, locrow.code
        );
    } else {
        println!("Localización: {}", locrow.code);
    }

    // Carga de datos ------------------------------------------------------------------------------
    let mut store = DataStore::new(mode);

    if let Some(archivo_equipos) = matches.value_of("archivo_equipos") {
        if matches.is_present("archivo_lecturas") {
            println!(
                "AVISO: la importación de equipos sintetiza sus propias lecturas; se ignora el archivo de lecturas"
            );
        }
        let path = Path::new(archivo_equipos);
        let contents = readcsv(path, "equipos");
        println!("Descriptores de equipos: \"{}\"", path.display());
        let start = get_start_date(&matches);
        let seed = get_seed(&matches);
        let (count, stats) = store.import_appliances_csv(&contents, start, seed);
        println!("Equipos importados: {}", count);
        report_stats(&stats);
        if verbosity > 0 {
            println!(
                "Lecturas sintetizadas: {} (desde {}, semilla {})",
                store.readings.len(),
                start,
                seed
            );
        }
    } else if let Some(archivo_lecturas) = matches.value_of("archivo_lecturas") {
        let path = Path::new(archivo_lecturas);
        let contents = readcsv(path, "lecturas");
        println!("Lecturas de consumo: \"{}\"", path.display());
        let stats = store.load_readings_csv(&contents);
        println!("Lecturas cargadas: {}", store.readings.len());
        report_stats(&stats);
    }

    // Cálculo de métricas -------------------------------------------------------------------------
    let top = get_top(&matches);
    let summary = store.summary(locrow.code, top);

    // Salida de resultados ------------------------------------------------------------------------
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&summary).unwrap_or_else(|error| {
            eprintln!("ERROR: No se han podido convertir los resultados al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Mostrar siempre en formato plain
    println!("{}", summary.to_plain());
}
