use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vdfields::{DumpError, Palette};


const OUTPUT_FORMAT_HELP: &str = "\
Input should be an iso9660 VD, read from stdin. Only Primary VD [1] and
Supplementary VD [2] are supported.

Single-value fields are printed this way (the parsed value is optional):

  -- name offset length (parsed value)
  xxd-style dump of the raw value

Root Directory Record is a structure, it is expanded with extra indentation.

Dump the first VD (the primary one) from $iso:

  dd bs=2048 skip=16 count=1 status=none < \"$iso\" | vddump

[1] ECMA-119, section 8.4
[2] ECMA-119, section 8.5";


/// Dump iso9660 volume descriptors in human-readable form.
#[derive(Parser)]
#[command(version, after_help = OUTPUT_FORMAT_HELP)]
struct Opts {
    /// Apply colors to field names and parsed values
    #[arg(short = 'c', long = "color")]
    pub color: bool,
}


fn run(opts: &Opts) -> Result<(), DumpError> {
    let sector = {
        let mut stdin = io::stdin().lock();
        vdfields::read_sector(&mut stdin)?
    };

    let palette = Palette::new(opts.color);
    let mut stdout = BufWriter::new(io::stdout().lock());
    vdfields::dump_sector(&mut stdout, &sector, &palette)?;
    stdout.flush()?;
    Ok(())
}


fn main() -> ExitCode {
    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            // help and version go to stdout and are not failures
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    debug!("colors enabled: {}", opts.color);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}


#[cfg(test)]
mod tests {
    use super::Opts;
    use clap::{CommandFactory, Parser};
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_color_flag() {
        assert!(!Opts::try_parse_from(["vddump"]).unwrap().color);
        assert!(Opts::try_parse_from(["vddump", "-c"]).unwrap().color);
        assert!(Opts::try_parse_from(["vddump", "--color"]).unwrap().color);
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let e = Opts::try_parse_from(["vddump", "-h"]).err().unwrap();
        assert_eq!(e.kind(), ErrorKind::DisplayHelp);
        assert!(!e.use_stderr());
    }

    #[test]
    fn test_unknown_flag_is_a_failure() {
        let e = Opts::try_parse_from(["vddump", "-x"]).err().unwrap();
        assert_eq!(e.kind(), ErrorKind::UnknownArgument);
        assert!(e.use_stderr());
    }
}
