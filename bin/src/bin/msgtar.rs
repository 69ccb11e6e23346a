extern crate clap;
extern crate msgtar_lib;
#[macro_use]
extern crate log;
extern crate colored;
extern crate itertools;
extern crate flexi_logger;
extern crate msgtar_bin;

use std::path::Path;

use colored::Colorize;
use itertools::Itertools;
use flexi_logger::{DeferredNow, Logger, Record};
use msgtar_bin::app::app::gen_app;
use msgtar_lib::message::headers::{HeaderKind, MessageReport};

//Minimal println like formatting for flexi_logger
pub fn default_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> core::result::Result<(), std::io::Error> {
    write!(
        w,
        "{}",
        record.args()
    )
}

pub fn main() {

    Logger::try_with_env_or_str("info").unwrap().format(default_format).start().unwrap();

    let app = gen_app();

    let matches = app.get_matches();

    let archive_path = Path::new(matches.value_of("archive").unwrap());
    let output_path = Path::new(matches.value_of("output").unwrap());

    match msgtar_lib::parse_archive_to_file(archive_path, output_path) {
        Ok(report) => {
            print_records(&report);
            info!("Wrote {} record(s) to {}", report.messages.len(), output_path.display());
        }
        Err(e) => {
            error!("Error: {}\n{} - ({})", e.human_readable_error_message(), e.to_string(), e.error_code().to_string());
            std::process::exit(e.error_code());
        }
    }

}

/// Dumps every record to the console, one line per message, in the
/// order the archive walk produced them
fn print_records(report: &MessageReport) {
    let width = report.messages.len().to_string().len();

    report.messages.iter()
        .enumerate()
        .for_each(|(index, record)| {

            let fields = HeaderKind::ALL.iter()
                .filter_map(|kind| record.get(*kind).map(|value| format!("{}: {}", kind.name(), value)))
                .join("  ");

            let formatted_string = if record.is_empty() {
                format!("{:>width$}  {}", index + 1, "<<no recognized headers>>".red(), width = width)
            } else {
                format!("{:>width$}  {}", index + 1, fields, width = width)
            };

            info!("{}", formatted_string);

        });
}
