use log::warn;
use ndarray::prelude::*;

use super::{GameError, PlayerId, Tableaux};

/// Absolute tolerance under which two equilibria are considered equal.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Mixed strategy profile: the row player's distribution followed by the
/// column player's.
#[derive(Debug, Clone)]
pub struct Equilibrium(pub Array1<f64>, pub Array1<f64>);

impl PartialEq for Equilibrium {
    fn eq(&self, other: &Equilibrium) -> bool {
        self.is_close(other, DEFAULT_TOLERANCE)
    }
}

impl Equilibrium {
    pub fn strategy(&self, player: PlayerId) -> &Array1<f64> {
        match player {
            PlayerId::Row => &self.0,
            PlayerId::Column => &self.1,
        }
    }

    pub fn is_close(&self, other: &Equilibrium, tolerance: f64) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance) && self.1.abs_diff_eq(&other.1, tolerance)
    }

    /// Reads the profile at a complementary vertex.
    ///
    /// Each basic variable of a player's strategy is worth its value column
    /// divided by its own pivot coefficient. Round-off negatives are clamped
    /// to zero before normalising.
    pub fn extract(t: &Tableaux) -> Result<Equilibrium, GameError> {
        Ok(Equilibrium(
            Self::extract_player(t, PlayerId::Row)?,
            Self::extract_player(t, PlayerId::Column)?,
        ))
    }

    /// As [`Equilibrium::extract`], substituting the uniform distribution for
    /// a player whose weights vanish at a strategy vertex. The artificial
    /// equilibrium is not a profile and stays an error.
    pub fn extract_or_uniform(t: &Tableaux) -> Result<Equilibrium, GameError> {
        if t.is_artificial() {
            return Err(GameError::DegenerateExtraction(PlayerId::Row));
        }
        let [row, column] = PlayerId::ALL.map(|player| {
            Self::extract_player(t, player).unwrap_or_else(|err| {
                warn!("{err}, falling back to the uniform distribution");
                let len = t.labels().num_strategies(player);
                Array1::from_elem(len, 1. / len as f64)
            })
        });
        Ok(Equilibrium(row, column))
    }

    fn extract_player(t: &Tableaux, player: PlayerId) -> Result<Array1<f64>, GameError> {
        let labels = t.labels();
        let value = labels.value_column();
        // A player's strategy variables live in the tableau built from the
        // opponent's payoffs.
        let tableau = t.get(player.other());
        let mut x = Array1::<f64>::zeros(labels.num_strategies(player));
        for (i, &label) in tableau.basis().iter().enumerate() {
            let (owner, strategy) = labels.strategy(label);
            if owner == player {
                let row = tableau.coefficients().row(i);
                x[strategy] = (row[value] / row[label.column()]).max(0.);
            }
        }

        let sum = x.sum();
        if sum > 0. && sum.is_finite() {
            Ok(x / sum)
        } else {
            Err(GameError::DegenerateExtraction(player))
        }
    }
}
