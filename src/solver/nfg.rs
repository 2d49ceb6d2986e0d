use itertools::Itertools;
use ndarray::prelude::*;

use crate::BimatrixGame;

use super::SolverError;

/// Parses a game given as the number of row strategies `R`, the number of
/// column strategies `C` and `2·R·C` payoffs listed row by row, each cell as
/// the row player's payoff followed by the column player's. Tokens after the
/// last payoff are ignored.
pub fn parse_game(input: &str) -> Result<BimatrixGame, SolverError> {
    let mut tokens = input.split_whitespace();
    let rows = parse_dimension(tokens.next(), "number of row strategies")?;
    let cols = parse_dimension(tokens.next(), "number of column strategies")?;

    let num_payoffs = rows
        .checked_mul(cols)
        .and_then(|cells| cells.checked_mul(2))
        .ok_or_else(|| SolverError::ParseGame(format!("a {rows}x{cols} game is too large")))?;

    let payoffs: Vec<f64> = tokens
        .take(num_payoffs)
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| SolverError::ParseGame(format!("{t} is not a number")))
        })
        .collect::<Result<_, _>>()?;
    if payoffs.len() < num_payoffs {
        return Err(SolverError::ParseGame(format!(
            "expected {num_payoffs} payoffs, found {}",
            payoffs.len()
        )));
    }

    let (a, b): (Vec<f64>, Vec<f64>) = payoffs.into_iter().tuples().unzip();
    let a = Array2::from_shape_vec((rows, cols), a)
        .map_err(|err| SolverError::ParseGame(err.to_string()))?;
    let b = Array2::from_shape_vec((rows, cols), b)
        .map_err(|err| SolverError::ParseGame(err.to_string()))?;
    Ok(BimatrixGame::new(a, b)?)
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize, SolverError> {
    let token = token.ok_or_else(|| SolverError::ParseGame(format!("missing {what}")))?;
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SolverError::ParseGame(format!(
            "{what} must be a positive integer, got {token}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn parse() {
        let game = parse_game("2\n3\n1 2 3 4 5 6\n7 8 9 10 11 12\n").unwrap();

        assert_eq!(game.num_strategies(), (2, 3));
        assert_eq!(
            *game.payoff_matrix(PlayerId::Row),
            array![[1., 3., 5.], [7., 9., 11.]]
        );
        assert_eq!(
            *game.payoff_matrix(PlayerId::Column),
            array![[2., 4., 6.], [8., 10., 12.]]
        );
    }

    #[test]
    fn parse_ignores_trailing_tokens() {
        let game = parse_game("1 1 -2.5 1e1 99").unwrap();

        assert_eq!(*game.payoff_matrix(PlayerId::Row), array![[-2.5]]);
        assert_eq!(*game.payoff_matrix(PlayerId::Column), array![[10.]]);
    }

    #[test]
    fn solve_sample_games() {
        let game = parse_game(include_str!("../../games/coordination.txt")).unwrap();
        assert_eq!(crate::EquilibriumEnumerator::new().enumerate(&game).len(), 3);

        let game = parse_game(include_str!("../../games/three_by_three.txt")).unwrap();
        let equilibria = crate::EquilibriumEnumerator::new().enumerate(&game);
        assert!(equilibria.contains(&crate::Equilibrium(
            array![6. / 13., 3. / 13., 4. / 13.],
            array![1. / 9., 1. / 3., 5. / 9.]
        )));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_game(""), Err(SolverError::ParseGame(_))));
        assert!(matches!(parse_game("0 2"), Err(SolverError::ParseGame(_))));
        assert!(matches!(parse_game("2 x"), Err(SolverError::ParseGame(_))));
        assert!(matches!(
            parse_game("1 2 1 2 3"),
            Err(SolverError::ParseGame(_))
        ));
        assert!(matches!(
            parse_game("1 1 1 foo"),
            Err(SolverError::ParseGame(_))
        ));
        assert!(matches!(
            parse_game("4294967296 4294967296 1 2"),
            Err(SolverError::ParseGame(_))
        ));
        assert!(matches!(
            parse_game(&format!("{} 3 1 2", usize::MAX / 2)),
            Err(SolverError::ParseGame(_))
        ));
        assert!(matches!(
            parse_game("1 1 1 inf"),
            Err(SolverError::Game(_))
        ));
    }
}
