use crate::domain::team::Team;
use crate::error::AppResult;

/// Picks the team issues are created in. `teams` is never empty.
pub trait TeamResolver: Send + Sync {
    fn resolve(&self, teams: &[Team]) -> AppResult<Team>;
}
