use anyhow::Result;

const DEFAULT_WIDTH: i32 = 16;
const DEFAULT_HEIGHT: i32 = 16;
const DEFAULT_GENERATIONS: u64 = 1;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses `args`, returning `Ok(None)` once the help text was printed
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run the interactive terminal frontend");
        opts.optflag("t", "threads", "compute generations on the rayon thread pool");
        opts.optflag("v", "verbose", "log engine activity");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt(
            "g",
            "gens",
            "generations to advance before printing (headless only)",
            "COUNT",
        );
        opts.optopt("", "log", "write logs to a file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn grid_size(&self) -> Result<(i32, i32)> {
        Ok((
            self.matches.opt_get_default("width", DEFAULT_WIDTH)?,
            self.matches.opt_get_default("height", DEFAULT_HEIGHT)?,
        ))
    }
    pub fn generations(&self) -> Result<u64> {
        Ok(self.matches.opt_get_default("gens", DEFAULT_GENERATIONS)?)
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn threads(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn verbose(&self) -> bool {
        self.matches.opt_present("verbose")
    }

    pub fn log_file(&self) -> Option<String> {
        self.matches.opt_str("log")
    }
}
