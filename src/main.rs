use std::{
    fs::{read_to_string, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use anyhow::Context;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Parser, Subcommand,
};
use tracing::{info, Level};
use wumpus_compiler::{
    cst::{cst::Rule, printer::render},
    display_error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::{parse_rule, ParserOptions, DEFAULT_MAX_DEPTH},
    stream::interchange::{read_tokens, write_tokens},
};

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Lexer and parser for Wumpus World programs
#[derive(Debug, Parser)]
#[command(name = "wumpus", author, version, styles = styles())]
struct WumpusArgs {
    #[command(subcommand)]
    subcommand: WumpusSubcommand,

    /// Enable debug logging
    #[arg(short = 'd', long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum WumpusSubcommand {
    /// Tokenize a source file and write its token records
    #[command(name = "lex")]
    Lex {
        /// Source file to tokenize
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Where to write the token records
        #[arg(short = 'o', long, default_value = "output.txt")]
        output: PathBuf,
    },

    /// Parse a source file and print its concrete syntax tree
    #[command(name = "parse")]
    Parse {
        /// Source file, or a token record file with `--tokens`
        #[arg(short = 'f', long)]
        file: PathBuf,

        /// Where to write the rendered tree
        #[arg(short = 'o', long, default_value = "parser_output.txt")]
        output: PathBuf,

        /// Read token records produced by `lex` instead of source text
        #[arg(long)]
        tokens: bool,

        /// How many rules may be open at once
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
}

//--------------------------------------------------------------------------------------------------
// Functions: main
//--------------------------------------------------------------------------------------------------

fn main() -> anyhow::Result<ExitCode> {
    let args = WumpusArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    match args.subcommand {
        WumpusSubcommand::Lex { file, output } => lex(&file, &output),
        WumpusSubcommand::Parse {
            file,
            output,
            tokens,
            max_depth,
        } => parse(&file, &output, tokens, ParserOptions { max_depth }),
    }
}

//--------------------------------------------------------------------------------------------------
// Functions: *
//--------------------------------------------------------------------------------------------------

fn lex(file: &Path, output: &Path) -> anyhow::Result<ExitCode> {
    let source = read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    let start = Instant::now();
    let (tokens, errors) = tokenize(&source, Some(file_name(file)));
    info!("Tokenized in {:?}", start.elapsed());

    for error in &errors {
        display_error(error, Some(&source));
    }

    print!("{}", token_table(&tokens));

    let writer = BufWriter::new(
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?,
    );
    write_tokens(&tokens, writer)?;
    info!("Wrote {} token records to {}", tokens.len(), output.display());

    Ok(ExitCode::SUCCESS)
}

fn parse(file: &Path, output: &Path, from_tokens: bool, options: ParserOptions) -> anyhow::Result<ExitCode> {
    let contents = read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;

    let start = Instant::now();
    let tokens = if from_tokens {
        match read_tokens(&contents, Some(file_name(file))) {
            Ok(tokens) => tokens,
            Err(error) => {
                display_error(&error, None);
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        let (tokens, errors) = tokenize(&contents, Some(file_name(file)));
        for error in &errors {
            display_error(error, Some(&contents));
        }
        tokens
    };
    info!("Tokenized in {:?}", start.elapsed());

    // Token records carry no source text to echo under the error.
    let source = if from_tokens { None } else { Some(contents.as_str()) };

    let parse_start = Instant::now();
    let tree = match parse_rule(tokens, Rule::Program, options) {
        Ok(tree) => tree,
        Err(error) => {
            display_error(&error, source);
            return Ok(ExitCode::FAILURE);
        }
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    let rendered = render(&tree);
    print!("{}", rendered);

    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?,
    );
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    info!("Wrote syntax tree to {}", output.display());

    Ok(ExitCode::SUCCESS)
}

fn token_table(tokens: &[Token]) -> String {
    let mut table = format!("{:<16} {:<20} {:>5} {:>6}\n", "TYPE", "VALUE", "LINE", "COLUMN");

    for token in tokens {
        table.push_str(&format!(
            "{:<16} {:<20} {:>5} {:>6}\n",
            token.kind.name(),
            token.value,
            token.line(),
            token.column()
        ));
    }

    table
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Green.on_default() | Effects::BOLD)
        .invalid(AnsiColor::Red.on_default() | Effects::BOLD)
}
