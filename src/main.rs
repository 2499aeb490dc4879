// std imports
use std::{
    io::{BufWriter, IsTerminal, Write, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};

// local imports
use filesel::{App, Input, Options, PathFilter, cli, config, error::*};

const FILESEL_DEBUG_LOG: &str = "FILESEL_DEBUG_LOG";
const FILESEL_DEBUG_LOG_STYLE: &str = "FILESEL_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(FILESEL_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(FILESEL_DEBUG_LOG)
                .write_style(FILESEL_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(());
    }

    let (configs, no_default_configs) = opt.configs();
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    let settings = opt.apply(settings);
    log::debug!("settings: {settings:?}");

    let app = App::new(Options {
        filter: PathFilter::from(&settings),
        delimiter: opt.delimiter(),
        invert: opt.invert,
        count: opt.count,
    });

    // Configure the input.
    let mut inputs = Vec::with_capacity(opt.paths.len());
    let mut stdin_used = false;
    for path in &opt.paths {
        if path.to_str() == Some("-") {
            if !stdin_used {
                inputs.push(Input::Stream(Box::new(stdin().lock())));
                stdin_used = true;
            }
        } else {
            inputs.push(Input::Path(path.clone()));
        }
    }
    if inputs.is_empty() {
        if stdin().is_terminal() {
            let mut cmd = cli::Opt::command();
            return cmd.print_help().map_err(Error::Io);
        }
        inputs.push(Input::Stream(Box::new(stdin().lock())));
    }

    log::debug!("run the app with {} inputs", inputs.len());

    let mut output = BufWriter::new(stdout().lock());
    let result = app.run(inputs, &mut output).and_then(|_| output.flush().map_err(Error::Io));

    match result {
        Ok(()) => Ok(()),
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err),
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
