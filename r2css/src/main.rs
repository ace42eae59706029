mod error;

use clap::Parser;
use error::{CliError, Result};
use log::{debug, info};
use r2css_lib::{convert_all, minimize, strip_skip_markers};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const R2CSS_INTRO: &str = r#"
        ____ ___
       / __ \__ \ ______________
      / /_/ /_/ // ___/ ___/ ___/
     / _, _/ __// /__(__  |__  )
    /_/ |_/____/\___/____/____/

    r2css - flip stylesheets between RTL and LTR
"#;

#[derive(Parser)]
#[command(name = "r2css")]
#[command(about = "Flip CSS stylesheets between right-to-left and left-to-right")]
struct Args {
    /// Input stylesheets.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file, or output directory when several inputs are given.
    /// Results go to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only minimize, without flipping the direction.
    #[arg(long)]
    minify_only: bool,

    /// Log at debug level (RUST_LOG still wins when set).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // parse the args given in terminal
    let args: Args = Args::parse();
    init_logger(args.verbose);

    if args.verbose {
        eprintln!("{}", R2CSS_INTRO);
    }

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let sources = args
        .inputs
        .iter()
        .map(|path| fs::read_to_string(path).map_err(|e| CliError::read(path, e)))
        .collect::<Result<Vec<String>>>()?;
    debug!("read {} stylesheet(s)", sources.len());

    let outputs: Vec<String> = if args.minify_only {
        sources
            .iter()
            .map(|css| strip_skip_markers(&minimize(css.as_str())))
            .collect()
    } else {
        convert_all(&sources)
    };

    match &args.output {
        None => {
            let mut stdout = io::stdout().lock();
            for css in &outputs {
                writeln!(stdout, "{}", css).map_err(|e| CliError::write("<stdout>", e))?;
            }
        }
        Some(path) if outputs.len() == 1 => write_stylesheet(path, &outputs[0])?,
        Some(dir) => {
            if dir.is_file() {
                return Err(CliError::OutputNotDirectory(dir.clone()));
            }
            let targets = output_paths(dir, &args.inputs)?;
            fs::create_dir_all(dir).map_err(|e| CliError::write(dir, e))?;
            for (target, css) in targets.iter().zip(&outputs) {
                write_stylesheet(target, css)?;
            }
        }
    }
    Ok(())
}

/// Where the stylesheet read from `input` lands inside the output directory.
fn output_path(dir: &Path, input: &Path, idx: usize) -> PathBuf {
    match input.file_name() {
        Some(name) => dir.join(name),
        None => dir.join(format!("stylesheet-{}.css", idx)),
    }
}

/// Output paths for every input, refusing two inputs that share a target.
fn output_paths(dir: &Path, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &PathBuf> = HashMap::new();
    let mut targets = Vec::with_capacity(inputs.len());

    for (idx, input) in inputs.iter().enumerate() {
        let target = output_path(dir, input, idx);
        if let Some(first) = seen.insert(target.clone(), input) {
            return Err(CliError::DuplicateOutput {
                path: target,
                first: first.clone(),
                second: input.clone(),
            });
        }
        targets.push(target);
    }
    Ok(targets)
}

fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    fs::write(path, css).map_err(|e| CliError::write(path, e))?;
    info!("wrote {} ({} bytes)", path.display(), css.len());
    Ok(())
}
