use std::env;

use color_eyre::eyre::{bail, eyre, Result};
use core::utils::TimeEstimation;
use core::{MatchScorePredictor, ScoutAnalyzer, SquadAnalyzer, FORMATIONS};
use database::{Database, DatabaseLoader};
use env_logger::Env;
use log::info;

const USAGE: &str = "usage:
  football_analytics squad <id,id,...>   analyze a squad of catalog players
  football_analytics match <home> <away> predict a match score
  football_analytics scout <team>        scouting report for a profiled team
  football_analytics formations          list known formations";

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("squad") => analyze_squad(&database, &args[1..]),
        Some("match") => predict_match(&database, &args[1..]),
        Some("scout") => scout_team(&database, &args[1..]),
        Some("formations") => list_formations(),
        Some(other) => bail!("unknown command '{}'\n{}", other, USAGE),
        None => bail!("{}", USAGE),
    }
}

fn analyze_squad(database: &Database, args: &[String]) -> Result<()> {
    let ids = args
        .first()
        .ok_or_else(|| eyre!("squad needs a comma-separated list of player ids"))?;

    let ids: Vec<u32> = ids
        .split(',')
        .map(|id| {
            id.trim()
                .parse()
                .map_err(|_| eyre!("'{}' is not a player id", id.trim()))
        })
        .collect::<Result<_>>()?;

    let squad = database.squad(&ids)?;
    let analysis = SquadAnalyzer::analyze(&squad)?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}

fn predict_match(database: &Database, args: &[String]) -> Result<()> {
    let [home, away] = args else {
        bail!("match needs a home and an away team name");
    };

    let home = database.record(home);
    let away = database.record(away);

    let prediction = MatchScorePredictor::predict(&home, &away);

    println!("{}", serde_json::to_string_pretty(&prediction)?);

    Ok(())
}

fn scout_team(database: &Database, args: &[String]) -> Result<()> {
    let name = args
        .first()
        .ok_or_else(|| eyre!("scout needs a team name"))?;

    let profile = database.profile(name)?;
    let report = ScoutAnalyzer::generate(profile);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn list_formations() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&FORMATIONS)?);

    Ok(())
}
