use int64_vectors::render::{write_binary, write_c_source};
use int64_vectors::{LibcRand, OperandGenerator, Vectors};
use parse_int::parse;
use std::fs::File;
use std::io::{stdout, BufWriter, Error, ErrorKind, Result, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use structopt::StructOpt;

fn parse_seed(seed: &str) -> Result<u32> {
    parse::<u32>(seed).map_err(|err| Error::new(ErrorKind::InvalidInput, err))
}

fn run(args: Opt) -> Result<()> {
    eprintln!("[-] Starting clock.");
    let start_time = Instant::now();

    let seed = parse_seed(&args.seed)?;
    let mut gen = OperandGenerator::new(LibcRand::new(seed));

    let vectors = Vectors::generate(&mut gen);

    eprintln!(
        "[+] Generated {} arithmetic records and {} shift groups (seed {:#x}).",
        vectors.records.len(),
        vectors.shift_groups.len(),
        seed,
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|err| {
            eprintln!("[!] Failed to create {}!", path.display());
            err
        })?)),
        None => Box::new(BufWriter::new(stdout())),
    };

    if args.binary {
        write_binary(&mut out, &vectors)?;
    } else {
        write_c_source(&mut out, &vectors)?;
    }

    out.flush()?;

    eprintln!(
        "[+] Tables written after {:.2} seconds.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn main() {
    if let Err(err) = run(Opt::from_args()) {
        eprintln!("\nfatal error: {}", err);
        process::exit(1); // report failure
    }
}

#[derive(StructOpt)]
#[structopt(about)]
struct Opt {
    /// Seed for the rand() source, decimal or 0x-prefixed hex
    #[structopt(long = "seed", default_value = "1")]
    seed: String,

    /// Emit raw 64-bit words instead of C source
    #[structopt(long = "binary")]
    binary: bool,

    /// Output file (stdout if omitted)
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,
}
