//! Command-line shell for errlog.
//! Logs sample errors through the library and prints decoded log files.

mod paths;

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use errlog_core::records::read_records;
use errlog_core::{Level, LoggerConfig, log_exception};
use log::{error, info, warn};

#[derive(Debug)]
struct SampleError(String);

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for SampleError {}

fn main() {
    env_logger::init();
    load_host_config();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("sample");
    let result = match command {
        "sample" => {
            let message = args.get(1).cloned().unwrap_or_else(|| "sample failure".into());
            sample(&message)
        }
        "dump" => dump(args.get(1).map(PathBuf::from)),
        "init" => init_config(),
        "path" => {
            print_path();
            Ok(())
        }
        other => Err(format!("unknown command {other:?} (expected sample, dump, init or path)").into()),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

fn load_host_config() {
    let path = paths::config_path();
    if !path.exists() {
        return;
    }
    match LoggerConfig::load(&path) {
        Ok(config) => {
            info!("Using logger config from {:?}", path);
            let _ = errlog_core::configure(config);
        }
        Err(e) => warn!("Ignoring {:?}: {}", path, e),
    }
}

fn init_config() -> Result<(), Box<dyn Error>> {
    let path = paths::config_path();
    if path.exists() {
        return Err(format!("{:?} already exists", path).into());
    }
    LoggerConfig::bundled()?.save(&path)?;
    println!("{}", path.display());
    Ok(())
}

fn sample(message: &str) -> Result<(), Box<dyn Error>> {
    let err = SampleError(message.to_owned());
    log_exception!(Level::Error, "sample requested", &err);
    print_path();
    Ok(())
}

fn dump(path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let path = match path {
        Some(path) => path,
        None => errlog_core::log_file()
            .ok_or("durable logging is disabled for this process")?
            .to_path_buf(),
    };
    let records = read_records(&path)?;
    info!("Read {} records from {:?}", records.len(), path);
    for record in records {
        println!("{record}\n");
    }
    Ok(())
}

fn print_path() {
    match errlog_core::log_file() {
        Some(path) => println!("{}", path.display()),
        None => println!("durable logging disabled"),
    }
}
