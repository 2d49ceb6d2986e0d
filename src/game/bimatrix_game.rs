use ndarray::prelude::*;

use super::{Equilibrium, GameError, LabelSpace, PlayerId};

/// Two-player game given by the row player's payoffs `A` and the column
/// player's payoffs `B`, both `m×n`.
#[derive(Debug, Clone)]
pub struct BimatrixGame {
    payoff: (Array2<f64>, Array2<f64>),
}

impl BimatrixGame {
    pub fn new(p1: Array2<f64>, p2: Array2<f64>) -> Result<Self, GameError> {
        if p1.shape() != p2.shape() {
            return Err(GameError::InvalidGame(format!(
                "payoff matrices must have same size, got {:?} and {:?}",
                p1.shape(),
                p2.shape()
            )));
        }
        if p1.is_empty() {
            return Err(GameError::InvalidGame(
                "each player needs at least one strategy".to_owned(),
            ));
        }
        if p1.iter().chain(p2.iter()).any(|v| !v.is_finite()) {
            return Err(GameError::InvalidGame(
                "payoffs must be finite".to_owned(),
            ));
        }
        Ok(BimatrixGame { payoff: (p1, p2) })
    }

    pub fn num_strategies(&self) -> (usize, usize) {
        (self.payoff.0.shape()[0], self.payoff.0.shape()[1])
    }

    pub fn labels(&self) -> LabelSpace {
        let (m, n) = self.num_strategies();
        LabelSpace::new(m, n)
    }

    pub fn payoff_matrix(&self, player: PlayerId) -> &Array2<f64> {
        match player {
            PlayerId::Row => &self.payoff.0,
            PlayerId::Column => &self.payoff.1,
        }
    }

    /// Constant added to every payoff so that the smallest entry of both
    /// matrices becomes 1. Zero when all entries are already positive.
    pub fn shift(&self) -> f64 {
        let min = self
            .payoff
            .0
            .iter()
            .chain(self.payoff.1.iter())
            .copied()
            .fold(f64::INFINITY, f64::min);
        if min <= 0. { 1. - min } else { 0. }
    }

    /// Same game with strictly positive payoffs. Equilibria are unchanged.
    pub fn shifted(&self) -> BimatrixGame {
        let shift = self.shift();
        BimatrixGame {
            payoff: (&self.payoff.0 + shift, &self.payoff.1 + shift),
        }
    }

    pub fn strategy_payoff(&self, strategy: &Equilibrium) -> (f64, f64) {
        let payoff0 = self.payoff.0.dot(&strategy.1).dot(&strategy.0);
        let payoff1 = self.payoff.1.dot(&strategy.1).dot(&strategy.0);

        (payoff0, payoff1)
    }

    /// Gain each player could obtain by deviating to a best response.
    pub fn regret(&self, strategy: &Equilibrium) -> (f64, f64) {
        let strategy_payoff = self.strategy_payoff(strategy);
        let payoff0 = self.payoff.0.dot(&strategy.1);
        let payoff1 = strategy.0.dot(&self.payoff.1);

        let max_payoff0 = payoff0.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let max_payoff1 = payoff1.fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        (
            max_payoff0 - strategy_payoff.0,
            max_payoff1 - strategy_payoff.1,
        )
    }

    pub fn is_ne(&self, strategy: &Equilibrium, tolerance: f64) -> bool {
        let r = self.regret(strategy);

        r.0 < tolerance && r.1 < tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bimatrixgame_new() {
        let a = array![[2., 1.], [1., 2.]];
        let b = array![[2., 1.], [1., 2.], [3., 4.]];

        let game = BimatrixGame::new(a, b);
        assert!(matches!(game, Err(GameError::InvalidGame(_))));
    }

    #[test]
    fn bimatrixgame_rejects_non_finite() {
        let a = array![[2., f64::NAN]];
        let b = array![[2., 1.]];

        assert!(BimatrixGame::new(a, b).is_err());
        assert!(BimatrixGame::new(Array2::zeros((0, 2)), Array2::zeros((0, 2))).is_err());
    }

    #[test]
    fn shift() {
        let positive = BimatrixGame::new(array![[1., 2.]], array![[3., 4.]]).unwrap();
        assert_eq!(positive.shift(), 0.);

        let game = BimatrixGame::new(array![[-2., 0.]], array![[3., -1.]]).unwrap();
        assert_eq!(game.shift(), 3.);
        let shifted = game.shifted();
        assert_eq!(shifted.payoff_matrix(PlayerId::Row), &array![[1., 3.]]);
        assert_eq!(shifted.payoff_matrix(PlayerId::Column), &array![[6., 2.]]);
    }

    #[test]
    fn regret() {
        let a = array![[1. / 3., 0.], [1., 1.]];
        let b = array![[1. / 3., 1.], [0., 1.]];
        let game = BimatrixGame::new(a, b).unwrap();

        let s = Equilibrium(array![0., 1.], array![0., 1.]);

        assert!(game.is_ne(&s, 1e-9));

        let r = Equilibrium(array![0., 1.], array![0.5, 0.5]);
        assert_eq!(game.regret(&r), (0., 0.5));
    }
}
