use clap::{App, AppSettings, Arg};

/// Builds the argument surface of the command line call. Both paths
/// are positional and required, calling without them is a usage error.
pub fn gen_app() -> App<'static> {
    App::new("msgtar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse an archive of MSG files for date sent, the sender, and the subject of each message")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::new("archive")
                .help("the path to the archive file")
                .required(true)
                .index(1)
        )
        .arg(
            Arg::new("output")
                .help("The file path to write output to")
                .required(true)
                .index(2)
        )
}
