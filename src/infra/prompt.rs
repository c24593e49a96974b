use std::io::{self, BufRead, Write};

use crate::domain::team::Team;
use crate::error::{AppError, AppResult};
use crate::services::TeamResolver;

/// Asks on the console which team to use when more than one is visible.
pub struct InteractiveTeamPrompt;

impl TeamResolver for InteractiveTeamPrompt {
    fn resolve(&self, teams: &[Team]) -> AppResult<Team> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        choose_team(teams, &mut input, &mut output)
    }
}

fn choose_team<R: BufRead, W: Write>(
    teams: &[Team],
    input: &mut R,
    output: &mut W,
) -> AppResult<Team> {
    if let [team] = teams {
        return Ok(team.clone());
    }

    loop {
        write!(output, "\nSelect team number: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Configuration(
                "no team selected; pass --team to choose one non-interactively".to_string(),
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=teams.len()).contains(&choice) => {
                return Ok(teams[choice - 1].clone());
            }
            Ok(_) => writeln!(output, "Invalid choice, try again.")?,
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

/// Selects the team named by `--team`, matching its key, name, or id.
pub struct FixedTeam {
    selector: String,
}

impl FixedTeam {
    pub fn new(selector: String) -> Self {
        Self { selector }
    }
}

impl TeamResolver for FixedTeam {
    fn resolve(&self, teams: &[Team]) -> AppResult<Team> {
        let wanted = self.selector.trim();
        teams
            .iter()
            .find(|team| {
                team.id == wanted
                    || team.key.eq_ignore_ascii_case(wanted)
                    || team.name.eq_ignore_ascii_case(wanted)
            })
            .cloned()
            .ok_or_else(|| {
                let keys = teams
                    .iter()
                    .map(|team| team.key.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::Configuration(format!(
                    "team '{wanted}' not found; available teams: {keys}"
                ))
            })
    }
}
