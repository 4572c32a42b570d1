use hsh::config::ShellConfig;
use hsh::error::ShellError;
use hsh::flags::Flags;
use hsh::logger;
use hsh::shell::Shell;
use std::env;
use std::process::ExitCode;

/// Status for a script that cannot be opened.
const STATUS_CANT_OPEN: u8 = 127;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "hsh".to_string());
    let args: Vec<String> = args.collect();

    match run(&program, &args) {
        Ok(code) => ExitCode::from((code & 0xff) as u8),
        Err(ShellError::ScriptOpen(path, _)) => {
            eprintln!("{}: 0: Can't open {}", program, path.display());
            ExitCode::from(STATUS_CANT_OPEN)
        }
        Err(e) => {
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}

fn run(program: &str, args: &[String]) -> Result<i32, ShellError> {
    let mut flags = Flags::new();
    flags.parse(args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("hsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    logger::init(flags.is_set("quiet"), flags.is_set("debug"))?;

    let home = env::var("HOME").ok();
    let config = ShellConfig::from_flags(program, &flags, home.as_deref());
    log::debug!("starting mode={:?} history={:?}", config.mode, config.history_path);

    let mut shell = Shell::new(&config)?;
    shell.run()
}
