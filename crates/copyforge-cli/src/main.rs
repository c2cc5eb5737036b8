use anyhow::Result;
use copyforge_config::Config;
use std::{env, path::PathBuf, process};

mod commands;

use commands::Command;

const USAGE: &str = "\
Usage:
  copyforge-cli render <file.md>                   Print the rendered body HTML
  copyforge-cli page <file.md> [--config <path>]   Print the full page
  copyforge-cli stats <file.md>                    Print header, blocks and reading time
  copyforge-cli publish <file-or-dir> [--config <path>]
                                                   Publish articles into the output directory
  copyforge-cli init <output-dir> [--config <path>]
                                                   Write a starter config file";

/// Splits `--config <path>` out of the argument list.
fn take_config_flag(args: &mut Vec<String>) -> Result<Option<PathBuf>> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("--config needs a path");
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(PathBuf::from(path)))
}

/// Config from `--config`, else the default location, else `None`.
fn load_config(explicit: Option<PathBuf>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => match Config::load_from_path(&path)? {
            Some(config) => Ok(Some(config)),
            None => anyhow::bail!("Config file '{}' does not exist", path.display()),
        },
        None => Ok(Config::load()?),
    }
}

fn parse_command(mut args: Vec<String>) -> Result<(Command, Option<PathBuf>)> {
    let config_path = take_config_flag(&mut args)?;
    let command = match args.as_slice() {
        [cmd, file] if cmd == "render" => Command::Render(PathBuf::from(file)),
        [cmd, file] if cmd == "page" => Command::Page(PathBuf::from(file)),
        [cmd, file] if cmd == "stats" => Command::Stats(PathBuf::from(file)),
        [cmd, target] if cmd == "publish" => Command::Publish(PathBuf::from(target)),
        [cmd, dir] if cmd == "init" => Command::Init {
            output_dir: PathBuf::from(dir),
            config_path: config_path.clone(),
        },
        _ => anyhow::bail!("{USAGE}"),
    };
    Ok((command, config_path))
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (command, config_path) = parse_command(args)?;
    let config = match command {
        // init writes the config; it must not require one
        Command::Init { .. } => None,
        _ => load_config(config_path)?,
    };
    log::debug!("running {command:?}");

    let out = command.execute(config.as_ref())?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
