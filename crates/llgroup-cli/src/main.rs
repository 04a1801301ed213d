mod cli;
mod commands;

use cli::{CheckParams, DumpParams, ResolveParams, build_cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("resolve", m)) => {
            let params = ResolveParams::from_matches(m);
            commands::resolve::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
