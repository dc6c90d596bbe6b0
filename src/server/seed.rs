//! Default roster inserted into an empty database on first start.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::player::{
        PlayerParams, Position,
        Position::{
            Center as C, PointGuard as PG, PowerForward as PF, ShootingGuard as SG,
            SmallForward as SF,
        },
    },
};

const HEADSHOT_BASE_URL: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760";

/// Name, team, position, points per game, years in the league and headshot id.
type SeedPlayer = (&'static str, &'static str, Position, f64, i32, u32);

const DEFAULT_ROSTER: [SeedPlayer; 30] = [
    ("LeBron James", "Lakers", SF, 27.1, 23, 2544),
    ("Stephen Curry", "Warriors", PG, 24.5, 17, 201939),
    ("Kevin Durant", "Suns", SF, 27.3, 18, 201142),
    ("Giannis Antetokounmpo", "Bucks", PF, 29.8, 13, 203507),
    ("Nikola Jokic", "Nuggets", C, 26.4, 11, 203999),
    ("Luka Doncic", "Mavericks", PG, 28.7, 8, 1629029),
    ("Joel Embiid", "76ers", C, 30.1, 11, 203954),
    ("Jayson Tatum", "Celtics", SF, 26.9, 9, 1628369),
    ("Damian Lillard", "Bucks", PG, 25.1, 14, 203081),
    ("Jimmy Butler", "Heat", SF, 22.3, 15, 202710),
    ("Kawhi Leonard", "Clippers", SF, 24.8, 14, 202695),
    ("Devin Booker", "Suns", SG, 27.1, 10, 1626164),
    ("Anthony Davis", "Lakers", PF, 24.2, 13, 203076),
    ("Ja Morant", "Grizzlies", PG, 26.1, 7, 1629630),
    ("Zion Williamson", "Pelicans", PF, 25.0, 6, 1629627),
    ("Trae Young", "Hawks", PG, 25.5, 8, 1629027),
    ("Paul George", "76ers", SG, 23.8, 15, 202331),
    ("Bradley Beal", "Suns", SG, 22.5, 13, 203078),
    ("Donovan Mitchell", "Cavaliers", SG, 27.6, 9, 1628378),
    ("Bam Adebayo", "Heat", C, 20.4, 9, 1628389),
    ("Jamal Murray", "Nuggets", PG, 20.0, 9, 1627750),
    ("Shai Gilgeous-Alexander", "Thunder", SG, 30.1, 8, 1628983),
    ("De'Aaron Fox", "Kings", PG, 25.2, 9, 1628368),
    ("Jaren Jackson Jr.", "Grizzlies", PF, 22.4, 8, 1628991),
    ("Jrue Holiday", "Celtics", PG, 18.5, 15, 201950),
    ("Karl-Anthony Towns", "Knicks", C, 23.1, 11, 1626157),
    ("Anthony Edwards", "Timberwolves", SG, 26.0, 6, 1630162),
    ("Pascal Siakam", "Pacers", PF, 22.0, 10, 1627783),
    ("Domantas Sabonis", "Kings", C, 19.4, 11, 1627734),
    ("Tyrese Haliburton", "Pacers", PG, 20.1, 6, 1630169),
];

/// Inserts the default roster when the player table is empty.
///
/// # Returns
/// - `Ok(count)` - Number of players inserted, 0 if the table already had rows
/// - `Err(AppError)` - Database error
pub async fn seed_default_players(db: &DatabaseConnection) -> Result<usize, AppError> {
    let repo = PlayerRepository::new(db);

    if repo.count().await? > 0 {
        return Ok(0);
    }

    for (name, team, position, ppg, years, headshot_id) in DEFAULT_ROSTER {
        repo.create(PlayerParams {
            name: name.to_string(),
            team: team.to_string(),
            position,
            ppg,
            years,
            image_url: format!("{}/{}.png", HEADSHOT_BASE_URL, headshot_id),
        })
        .await?;
    }

    tracing::info!("Seeded {} default players", DEFAULT_ROSTER.len());

    Ok(DEFAULT_ROSTER.len())
}
