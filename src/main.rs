use folio::{Composer, OutputFormat, PipelineError, RenderConfig};
use std::env;

/// Renders a JSON document to stdout.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Render a folio JSON document.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/document.json> [--html|--csv|--outline]",
            args.first().map(String::as_str).unwrap_or("folio")
        );
        std::process::exit(2);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str, format: Option<&str>) -> Result<(), PipelineError> {
    let format = match format {
        Some(flag) => flag.parse()?,
        None => OutputFormat::default(),
    };
    let config = match env::var("FOLIO_CONFIG") {
        Ok(config_path) => RenderConfig::from_json(&std::fs::read_to_string(config_path)?)?,
        Err(_) => RenderConfig::default(),
    };

    let loaded = folio::loader::load_file(path)?;
    let (composer, root) = Composer::from_loaded(loaded, config);
    print!("{}", composer.render_as(format, &root)?);
    Ok(())
}
