use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::process::ExitCode;

use hackasm::error::{Diagnostic, Error};
use hackasm::parser::{Line, Stmt};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.hack")]
    output: String,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(diag) => {
            diag.print();
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Diagnostic> {
    println!("1. Read and Parse Lines");
    println!("  < {}", args.input);
    let file = File::open(&args.input)
        .map_err(|err| Diagnostic::bare(Error::FileOpen(args.input.clone(), err)))?;
    let mut lines = vec![];
    for (idx, raw) in BufReader::new(file).lines().enumerate() {
        let raw = raw.map_err(|err| Diagnostic::bare(Error::FileRead(err)))?;
        lines.push(Line::parse(&args.input, idx, &raw)?);
    }

    println!("2. Resolve Symbols and Generate Binary");
    let words = hackasm::assemble(&lines)?;

    println!("  > {}", args.output);
    let mut out = File::create(&args.output)
        .map_err(|err| Diagnostic::bare(Error::FileCreate(args.output.clone(), err)))?;
    for word in &words {
        writeln!(out, "{:016b}", word)
            .map_err(|err| Diagnostic::bare(Error::FileWrite(args.output.clone(), err)))?;
    }

    if args.dump {
        dump(&lines, &words);
    }
    Ok(())
}

fn dump(lines: &[Line], words: &[u16]) {
    let rule = "+------+------+------------------+------------------------------";
    println!("{}", rule);
    let mut pc: usize = 0;
    for line in lines {
        let resolved = match line.stmt() {
            Some(Stmt::A(_)) | Some(Stmt::C { .. }) => {
                let entry = (pc as u16, words[pc]);
                pc += 1;
                Some(entry)
            }
            _ => None,
        };
        println!("{}", line.cformat(resolved));
    }
    println!("{}", rule);
}
