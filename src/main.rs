use args::Args;
use clap::Parser;
use icon_parser::parser::icon::IconDocument;

mod args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let icon = IconDocument::from_file(args.icon_file)?;
    let (width, height) = icon.dimensions();

    println!(
        "{} ({}x{})\nVersion: {}\n",
        icon.name(),
        width,
        height,
        icon.version()
    );

    for line in icon.render() {
        println!("{line}");
    }

    Ok(())
}
