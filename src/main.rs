use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod icon_gen;
mod manifest_json;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-icon-gen",
    about = "Generate placeholder gradient icons for browser-extension development"
)]
pub struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Custom icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    sizes: Option<Vec<u32>>,

    /// Gradient start color (CSS color format).
    #[clap(long, value_name = "COLOR", default_value = "#667eea")]
    from: String,

    /// Gradient end color (CSS color format).
    #[clap(long, value_name = "COLOR", default_value = "#764ba2")]
    to: String,

    /// Write text placeholders instead of rendering, as if PNG support were unavailable.
    #[clap(long)]
    placeholders_only: bool,

    /// Also write icons.json, a manifest fragment mapping sizes to filenames.
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args)
}
