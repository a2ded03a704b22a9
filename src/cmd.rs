use clap::Parser;

use gamelocker::{Client, Match, MatchFilter, Player};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Show the API release and version
    Status,
    /// Show one match
    Match {
        id: String,
        #[arg(short, long, default_value = "na")]
        region: String,
    },
    /// List recent matches
    Matches {
        #[arg(short, long, default_value = "na")]
        region: String,
        #[arg(long)]
        player: Vec<String>,
        #[arg(long)]
        mode: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// Number of pages to walk
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show a player by name
    Player {
        name: String,
        #[arg(short, long, default_value = "na")]
        region: String,
    },
}

fn print_match(m: &Match) {
    println!(
        "{} | {} | {} | {}s | {}",
        m.id,
        m.created_at.format("%Y-%m-%d %H:%M"),
        m.game_mode.label,
        m.duration,
        m.end_reason
    );
    for roster in &m.rosters {
        let result = if roster.won { "won" } else { "lost" };
        println!("  {} ({result}, {} kills)", roster.side, roster.hero_kills);
        for p in &roster.participants {
            let name = p
                .player
                .profile()
                .map(|profile| profile.name.as_str())
                .unwrap_or("<bot>");
            println!("    {name} | {} | {}/{}/{}", p.actor, p.kills, p.deaths, p.assists);
        }
    }
}

fn print_player(player: &Player) {
    match player.profile() {
        Some(p) => {
            println!("{} ({}) | {}", p.name, p.id, p.region.label);
            println!(
                " level {} | {} wins | {} | skill tier {}",
                p.account_level,
                p.wins,
                p.karma.label(),
                p.skill_tier
            );
            if let Some(elo) = p.current_elo {
                println!(" ranked {} | blitz {}", elo.ranked, elo.blitz);
            }
        }
        None => println!("{} (no details)", player.id()),
    }
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = Client::from_env()?;

        match self {
            Cmd::Status => {
                let status = client.status().await?;
                println!("{} released {}", status.version, status.released_at);
            }
            Cmd::Match { id, region } => {
                print_match(&client.match_by_id(&id, &region).await?);
            }
            Cmd::Matches {
                region,
                player,
                mode,
                limit,
                pages,
            } => {
                let mut filter = MatchFilter::new();
                if !player.is_empty() {
                    filter = filter.player_names(player);
                }
                if !mode.is_empty() {
                    filter = filter.game_modes(mode);
                }
                if let Some(limit) = limit {
                    filter = filter.limit(limit);
                }

                println!("fetching matches...");
                let mut page = client.matches(&filter, &region).await?;
                for n in 0..pages {
                    if n > 0 {
                        if !page.has_next() {
                            break;
                        }
                        page.next().await?;
                    }
                    println!("-- offset {}", page.offset());
                    for m in &page {
                        print_match(m);
                    }
                }
            }
            Cmd::Player { name, region } => {
                print_player(&client.player_by_name(&name, &region).await?);
            }
        }

        Ok(())
    }
}
