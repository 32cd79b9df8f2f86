//! `tabkit formats` command - list supported export formats

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::export::ExportFormat;

#[derive(clap::Args, Debug)]
pub struct FormatsArgs {}

pub fn run(_args: FormatsArgs, _global: &GlobalOpts) -> Result<()> {
    for format in ExportFormat::ALL {
        println!(
            "{:<6} .{:<6} {}",
            style(format.token()).cyan(),
            format.extension(),
            format.mime_type()
        );
    }
    Ok(())
}
