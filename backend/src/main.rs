use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, MietteHandlerOpts, Result, miette};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use sitelex::{
    lexer::RegexLexer,
    registry::{DEFAULT_GML_BUILTINS, Registry},
    render,
    utils::core::Loc,
};

#[derive(Parser)]
#[command(
    name = "sitelex",
    version = "0.1.0",
    about = "Syntax highlighting for Cosy, GML, Catspeak and KatScript samples"
)]
struct Cli {
    /// GML builtins listing: one name per line, `#` marks constants, `&` deprecated names
    #[arg(
        long,
        global = true,
        env = "SITELEX_GML_BUILTINS",
        default_value = DEFAULT_GML_BUILTINS
    )]
    gml_builtins: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the token stream of a file
    #[command(visible_aliases = &["lx"])]
    Lex {
        input: PathBuf,
        /// Language tag; guessed from the file name when omitted
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Render a file as a highlighted HTML code block
    #[command(visible_aliases = &["hl"])]
    Highlight {
        input: PathBuf,
        #[arg(short, long)]
        lang: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the registered languages
    #[command(visible_aliases = &["ls"])]
    Languages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .color(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let _guard = init_logging(cli.log_file.as_deref())?;
    let registry = Registry::load(&cli.gml_builtins)?;

    match cli.cmd {
        Cmd::Lex { input, lang, json } => {
            let src = std::fs::read_to_string(&input).into_diagnostic()?;
            let lexer = resolve(&registry, lang.as_deref(), &input);
            let tokens = lexer.lex(&src)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens).into_diagnostic()?);
            } else {
                let path = input.to_string_lossy();
                let mut loc = Loc::start(&path);
                for t in &tokens {
                    println!("{} {} {:?}", loc, t.category, t.text);
                    loc.advance(t.text);
                }
            }
        }

        Cmd::Highlight {
            input,
            lang,
            output,
        } => {
            let src = std::fs::read_to_string(&input).into_diagnostic()?;
            let lexer = resolve(&registry, lang.as_deref(), &input);
            let html = render::code_block(&lexer.lex(&src)?);
            match output {
                Some(output) => {
                    if let Some(parent) = output.parent() {
                        if !parent.as_os_str().is_empty() && !parent.exists() {
                            std::fs::create_dir_all(parent).into_diagnostic()?;
                        }
                    }
                    std::fs::write(&output, html).into_diagnostic()?;
                }
                None => println!("{html}"),
            }
        }

        Cmd::Languages => {
            for lexer in registry.lexers() {
                let meta = lexer.meta();
                println!(
                    "{:<10} {:<12} {:<10} {}",
                    meta.tag,
                    meta.aliases.join(","),
                    meta.filenames.join(","),
                    meta.description
                );
            }
        }
    }

    Ok(())
}

/// `--lang` if given, else a guess from the file name, else plain text.
fn resolve<'r>(registry: &'r Registry, lang: Option<&str>, input: &Path) -> &'r RegexLexer {
    match lang {
        Some(tag) => registry.find_or_plain(tag),
        None => registry
            .guess_by_filename(input)
            .unwrap_or_else(|| registry.plain_text()),
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| miette!("log file path `{}` has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
