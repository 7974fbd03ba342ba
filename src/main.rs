use simsh::flags::Flags;
use simsh::shell::Shell;
use std::env;

fn init_logging(flags: &Flags) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if flags.is_set("debug") {
        builder.filter_module("simsh", log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<(), simsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("simsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&flags);

    let mut shell = Shell::new(&flags)?;
    let status = shell.run()?;
    log::debug!("leaving with status {}", status);
    std::process::exit(status)
}
