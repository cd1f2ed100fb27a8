use markov_text::opts::Opts;
use slog::{Drain, Logger};
use structopt::StructOpt;

fn main() {
    let exit_code = run();

    std::process::exit(exit_code)
}

// This separate method is needed for slog_async to flush properly
fn run() -> i32 {
    let opts = Opts::from_args();

    let level = if opts.verbose {
        slog::Level::Debug
    } else {
        slog::Level::Info
    };

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();

    let log = Logger::root(drain, slog::o!());

    let stdout = std::io::stdout();
    if let Err(err) = markov_text::run(&log, &opts, &mut stdout.lock()) {
        slog::error!(log, "Encountered error"; "description" => %err);

        for cause in err.iter().skip(1) {
            slog::error!(log, "Underlying error"; "description" => %cause);
        }

        return 1;
    }

    0
}
