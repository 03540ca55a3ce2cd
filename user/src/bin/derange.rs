use std::io::{self, BufWriter, Write};

use clap::Parser;
use input::{LineSource, OnceSource};
use log::debug;
use user::{finish, run, Args, Error};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("{args:?}");

    let stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let res = if args.streaming {
        run(LineSource::new(stdin), &mut out, args.engine)
    } else {
        OnceSource::new(stdin)
            .map_err(Error::from)
            .and_then(|source| run(source, &mut out, args.engine))
    };
    out.flush()?;

    finish(res, args.strict)
}
