extern crate man;

use man::prelude::*;
use man::Manual;

fn main() {

    let page = Manual::new("msgtar")
        .about("Parse an archive of MSG files for date sent, the sender, and the subject of each message")
        .arg(Arg::new("archive"))
        .arg(Arg::new("output"))
        .example(
            Example::new()
                .text("scan an archive and write the report")
                .command("msgtar messages.tar report.json")
                .output("date: Fri, 01 Apr 2011 05:52:55 PDT  from: sender@example.com  subject: Lunch")
        )
        .custom(
            Section::new("usage note")
                .paragraph("This program will overwrite any file currently stored at the output path")
        )
        .render();

    println!("{}", page);

}
