use log::{debug, trace};

use super::{BimatrixGame, Equilibrium, GameError, Label, PlayerId, Tableaux};

/// Default ceiling on the number of pivots of a single path.
pub const DEFAULT_MAX_PIVOTS: usize = 500_000;

/// Result of one complementary pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotOutcome {
    /// `0` was displaced and enters the other tableau next.
    Continue(Label),
    /// The dropped label was displaced: the path reached a complementary vertex.
    Terminated,
    /// No row qualified in the ratio test.
    RayTerminated,
    /// The pivot ceiling was reached before the path closed.
    LimitExceeded,
}

impl Tableaux {
    pub fn step(&mut self, side: PlayerId, entering: Label, dropped: Label) -> PivotOutcome {
        match self.get_mut(side).pivot(entering) {
            None => PivotOutcome::RayTerminated,
            Some(l_var) => {
                trace!("pivot {entering} into {side} tableau, {l_var} leaves");
                if l_var == dropped {
                    PivotOutcome::Terminated
                } else {
                    PivotOutcome::Continue(l_var)
                }
            }
        }
    }

    /// Follows the complementary path that starts by dropping `dropped`,
    /// alternating between both tableaux until `dropped` leaves the basis.
    /// Returns the number of pivots.
    pub fn walk(&mut self, dropped: Label, max_pivots: usize) -> Result<usize, GameError> {
        let mut side = self.entering_side(dropped);
        let mut e_var = dropped;
        let mut num_pivots = 0;
        loop {
            let outcome = if num_pivots == max_pivots {
                PivotOutcome::LimitExceeded
            } else {
                num_pivots += 1;
                self.step(side, e_var, dropped)
            };
            match outcome {
                PivotOutcome::Continue(l_var) => {
                    e_var = l_var;
                    side = side.other();
                }
                PivotOutcome::Terminated => return Ok(num_pivots),
                PivotOutcome::RayTerminated => return Err(GameError::RayTermination(e_var)),
                PivotOutcome::LimitExceeded => {
                    return Err(GameError::MaxPivotsExceeded(max_pivots));
                }
            }
        }
    }
}

/// Runs one Lemke-Howson path from the artificial equilibrium dropping the
/// 1-based label `k0` and returns the equilibrium it reaches.
pub fn lemke_howson(
    game: &BimatrixGame,
    k0: usize,
    max_pivots: usize,
) -> Result<Equilibrium, GameError> {
    let labels = game.labels();
    let dropped = Label::from_number(k0)
        .filter(|l| labels.contains(*l))
        .ok_or(GameError::InvalidLabel {
            label: k0,
            labels: labels.num_labels(),
        })?;
    if max_pivots == 0 {
        return Err(GameError::InvalidPivotLimit);
    }

    let mut t = Tableaux::new(game);
    let num_pivots = t.walk(dropped, max_pivots)?;
    debug!("label {dropped}: path closed after {num_pivots} pivots");
    Equilibrium::extract(&t)
}
