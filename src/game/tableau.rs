use ndarray::prelude::*;

use super::{BimatrixGame, Label, LabelSpace, PlayerId};

/// One side of the complementarity problem in slack form.
///
/// `basis[i]` is the label of the variable basic in row `i`. The last column
/// holds its value scaled by the row's own pivot coefficient: rows are never
/// normalised after a pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    basis: Vec<Label>,
    coefficients: Array2<f64>,
}

impl Tableau {
    pub fn basis(&self) -> &[Label] {
        &self.basis
    }

    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    pub fn is_basic(&self, label: Label) -> bool {
        self.basis.contains(&label)
    }

    /// Ratio test for `entering`: the row maximising
    /// `coefficient / value` among rows where that ratio is positive. The
    /// first row wins ties. `None` means the column is a ray.
    pub fn leaving_row(&self, entering: Label) -> Option<usize> {
        let value = self.coefficients.ncols() - 1;
        let (ind, _) = self
            .coefficients
            .rows()
            .into_iter()
            .enumerate()
            .fold((None, 0.), |(ind, max), (i, row)| {
                let t = row[entering.column()] / row[value];
                if t > max { (Some(i), t) } else { (ind, max) }
            });
        ind
    }

    /// Pivots `entering` into the basis and returns the label it displaced,
    /// or `None` on ray termination.
    pub fn pivot(&mut self, entering: Label) -> Option<Label> {
        let ind = self.leaving_row(entering)?;
        let col = entering.column();

        let r = self.coefficients.row(ind).to_owned();
        let pivot = r[col];
        for (i, mut row) in self.coefficients.rows_mut().into_iter().enumerate() {
            if i != ind {
                let factor = row[col] / pivot;
                row.scaled_add(-factor, &r);
            }
        }

        Some(std::mem::replace(&mut self.basis[ind], entering))
    }
}

/// The pair of tableaux of a bimatrix game.
///
/// `row` is `[I_m | A | 1]`: its rows start with the row player's slack
/// labels and its basic column-player variables give `y`. `column` is
/// `[Bᵗ | I_n | 1]`: its rows start with the column player's slack labels and
/// its basic row-player variables give `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableaux {
    labels: LabelSpace,
    row: Tableau,
    column: Tableau,
}

impl Tableaux {
    /// Tableaux at the artificial equilibrium. The game is shifted to
    /// positive payoffs first.
    pub fn new(game: &BimatrixGame) -> Tableaux {
        let game = game.shifted();
        let labels = game.labels();
        let (m, n) = game.num_strategies();
        let num_labels = labels.num_labels();

        let mut row = Array2::<f64>::zeros((m, num_labels + 1));
        row.slice_mut(s![.., 0..m]).assign(&Array2::eye(m));
        row.slice_mut(s![.., m..num_labels])
            .assign(game.payoff_matrix(PlayerId::Row));
        row.column_mut(num_labels).fill(1.);

        let mut column = Array2::<f64>::zeros((n, num_labels + 1));
        column
            .slice_mut(s![.., 0..m])
            .assign(&game.payoff_matrix(PlayerId::Column).t());
        column.slice_mut(s![.., m..num_labels]).assign(&Array2::eye(n));
        column.column_mut(num_labels).fill(1.);

        Tableaux {
            labels,
            row: Tableau {
                basis: labels.player_labels(PlayerId::Row).collect(),
                coefficients: row,
            },
            column: Tableau {
                basis: labels.player_labels(PlayerId::Column).collect(),
                coefficients: column,
            },
        }
    }

    pub fn labels(&self) -> LabelSpace {
        self.labels
    }

    pub fn get(&self, side: PlayerId) -> &Tableau {
        match side {
            PlayerId::Row => &self.row,
            PlayerId::Column => &self.column,
        }
    }

    pub fn get_mut(&mut self, side: PlayerId) -> &mut Tableau {
        match side {
            PlayerId::Row => &mut self.row,
            PlayerId::Column => &mut self.column,
        }
    }

    /// Whether only slack variables are basic, which is the artificial
    /// equilibrium. A path may end there in degenerate games.
    pub fn is_artificial(&self) -> bool {
        let labels = self.labels;
        self.row.basis.iter().all(|&l| labels.owner(l) == PlayerId::Row)
            && self
                .column
                .basis
                .iter()
                .all(|&l| labels.owner(l) == PlayerId::Column)
    }

    /// Side in which `label` has to enter: the tableau where it is not basic.
    /// At the artificial equilibrium a row-player label enters `column` and a
    /// column-player label enters `row`.
    pub fn entering_side(&self, label: Label) -> PlayerId {
        if self.column.is_basic(label) {
            PlayerId::Row
        } else {
            PlayerId::Column
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_tableaux() -> Tableaux {
        let a = array![[1., 2., 3.], [4., 5., 6.],];
        let b = array![[7., 8., 9.], [10., 11., 12.],];
        let game = BimatrixGame::new(a, b).unwrap();

        Tableaux::new(&game)
    }

    fn label(number: usize) -> Label {
        Label::from_number(number).unwrap()
    }

    #[test]
    fn tableau_size() {
        let tableaux = test_tableaux();

        assert_eq!(tableaux.get(PlayerId::Row).basis().len(), 2);
        assert_eq!(tableaux.get(PlayerId::Column).basis().len(), 3);
        assert_eq!(tableaux.get(PlayerId::Row).coefficients().shape(), [2, 6]);
        assert_eq!(tableaux.get(PlayerId::Column).coefficients().shape(), [3, 6]);
    }

    #[test]
    fn tableau_content() {
        let tableaux = test_tableaux();

        assert_eq!(tableaux.get(PlayerId::Row).basis(), &[label(1), label(2)]);
        assert_eq!(
            *tableaux.get(PlayerId::Row).coefficients(),
            array![[1., 0., 1., 2., 3., 1.], [0., 1., 4., 5., 6., 1.]]
        );

        assert_eq!(
            tableaux.get(PlayerId::Column).basis(),
            &[label(3), label(4), label(5)]
        );
        assert_eq!(
            *tableaux.get(PlayerId::Column).coefficients(),
            array![
                [7., 10., 1., 0., 0., 1.],
                [8., 11., 0., 1., 0., 1.],
                [9., 12., 0., 0., 1., 1.]
            ]
        );
    }

    #[test]
    fn tableau_is_shifted() {
        let game = BimatrixGame::new(array![[0., -1.]], array![[2., 3.]]).unwrap();
        let tableaux = Tableaux::new(&game);

        assert_eq!(
            *tableaux.get(PlayerId::Row).coefficients(),
            array![[1., 2., 1., 1.]]
        );
        assert_eq!(
            *tableaux.get(PlayerId::Column).coefficients(),
            array![[4., 1., 0., 1.], [5., 0., 1., 1.]]
        );
    }

    #[test]
    fn tableau_entering_side() {
        let tableaux = test_tableaux();

        assert_eq!(tableaux.entering_side(label(1)), PlayerId::Column);
        assert_eq!(tableaux.entering_side(label(2)), PlayerId::Column);
        assert_eq!(tableaux.entering_side(label(3)), PlayerId::Row);
        assert_eq!(tableaux.entering_side(label(5)), PlayerId::Row);
    }

    #[test]
    fn tableau_pivot() {
        let a = array![[4., 1.], [1., 4.]];
        let b = array![[4., 1.], [1., 4.]];
        let game = BimatrixGame::new(a, b).unwrap();
        let mut tableaux = Tableaux::new(&game);

        let l_var = tableaux.get_mut(PlayerId::Column).pivot(label(1));

        assert_eq!(l_var, Some(label(3)));
        assert_eq!(
            tableaux.get(PlayerId::Column).basis(),
            &[label(1), label(4)]
        );
        assert_abs_diff_eq!(
            tableaux.get(PlayerId::Column).coefficients(),
            &array![[4., 1., 1., 0., 1.], [0., 3.75, -0.25, 1., 0.75]],
            epsilon = 1e-12,
        );
    }

    #[test]
    fn tableau_is_artificial() {
        let game = BimatrixGame::new(array![[4., 1.], [1., 4.]], array![[4., 1.], [1., 4.]])
            .unwrap();
        let mut tableaux = Tableaux::new(&game);
        assert!(tableaux.is_artificial());

        tableaux.get_mut(PlayerId::Column).pivot(label(1));
        assert!(!tableaux.is_artificial());

        tableaux.get_mut(PlayerId::Column).pivot(label(3));
        assert!(tableaux.is_artificial());
    }

    #[test]
    fn tableau_pivot_first_row_wins_ties() {
        let game = BimatrixGame::new(array![[1., 1.], [1., 1.]], array![[2., 2.], [2., 2.]])
            .unwrap();
        let tableaux = Tableaux::new(&game);

        assert_eq!(tableaux.get(PlayerId::Column).leaving_row(label(1)), Some(0));
        assert_eq!(tableaux.get(PlayerId::Row).leaving_row(label(4)), Some(0));
    }

    #[test]
    fn tableau_ray() {
        let mut t = Tableau {
            basis: vec![label(2), label(3)],
            coefficients: array![[-1., 1., 0., 1.], [0., 0., 1., 2.]],
        };
        let before = t.clone();

        assert_eq!(t.leaving_row(label(1)), None);
        assert_eq!(t.pivot(label(1)), None);
        assert_eq!(t, before);
    }
}
