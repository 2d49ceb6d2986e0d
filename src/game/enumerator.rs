use std::ops::ControlFlow;

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{
    BimatrixGame, DEFAULT_MAX_PIVOTS, DEFAULT_TOLERANCE, Equilibrium, GameError, Label, Tableaux,
};

/// Terminal state of a successful path.
#[derive(Debug, Clone)]
pub struct Run {
    pub equilibrium: Equilibrium,
    pub vertex: Tableaux,
}

/// Equilibria accepted so far, in order of discovery.
#[derive(Debug)]
pub struct Enumeration {
    tolerance: f64,
    target: usize,
    found: Vec<Run>,
}

impl Enumeration {
    pub fn new(tolerance: f64, target: usize) -> Self {
        Self {
            tolerance,
            target,
            found: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() >= self.target
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Accepts the outcome of the path dropping `label` unless it failed or
    /// its equilibrium is already known. Returns whether it was accepted.
    pub fn record(&mut self, label: Label, run: Result<Run, GameError>) -> bool {
        let run = match run {
            Ok(run) => run,
            Err(err) => {
                debug!("label {label}: skipped ({err})");
                return false;
            }
        };
        if self.is_complete() {
            return false;
        }
        let duplicate = self
            .found
            .iter()
            .any(|f| f.equilibrium.is_close(&run.equilibrium, self.tolerance));
        if duplicate {
            debug!("label {label}: duplicate equilibrium");
            return false;
        }
        debug!(
            "label {label}: new equilibrium {} {}",
            run.equilibrium.0, run.equilibrium.1
        );
        self.found.push(run);
        true
    }

    pub fn equilibria(&self) -> impl Iterator<Item = &Equilibrium> {
        self.found.iter().map(|r| &r.equilibrium)
    }

    pub fn into_equilibria(self) -> Vec<Equilibrium> {
        self.found.into_iter().map(|r| r.equilibrium).collect()
    }
}

/// Restarts Lemke-Howson from every label and collects the distinct
/// equilibria it reaches.
///
/// The first pass drops each label `1..=m+n` in turn from the artificial
/// equilibrium. When `graph_search` is on, a second pass restarts from every
/// accepted equilibrium with each label, which reaches equilibria that no path
/// from the artificial one ends in. Both passes stop once `target` equilibria
/// (by default `m+n`) are known. This is a heuristic bound, not a guarantee of
/// completeness.
#[derive(Debug, Clone, Copy)]
pub struct EquilibriumEnumerator {
    tolerance: f64,
    max_pivots: usize,
    target: Option<usize>,
    graph_search: bool,
}

impl Default for EquilibriumEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl EquilibriumEnumerator {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_pivots: DEFAULT_MAX_PIVOTS,
            target: None,
            graph_search: true,
        }
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_pivots(mut self, max_pivots: usize) -> Self {
        self.max_pivots = max_pivots;
        self
    }

    pub fn target(mut self, target: Option<usize>) -> Self {
        self.target = target;
        self
    }

    pub fn graph_search(mut self, graph_search: bool) -> Self {
        self.graph_search = graph_search;
        self
    }

    pub fn enumerate(&self, game: &BimatrixGame) -> Vec<Equilibrium> {
        self.enumerate_with(game, |_, _| {})
    }

    /// As [`EquilibriumEnumerator::enumerate`], calling `on_run` with the
    /// dropped label and outcome of every path, in the order they are
    /// recorded.
    pub fn enumerate_with<F>(&self, game: &BimatrixGame, mut on_run: F) -> Vec<Equilibrium>
    where
        F: FnMut(Label, &Result<Run, GameError>),
    {
        let labels: Vec<Label> = game.labels().labels().collect();
        let target = self.target.unwrap_or(labels.len());
        let mut enumeration = Enumeration::new(self.tolerance, target);
        let mut num_runs = 0;

        let mut sink =
            |enumeration: &mut Enumeration, label: Label, run: Result<Run, GameError>| {
                num_runs += 1;
                on_run(label, &run);
                enumeration.record(label, run);
                if enumeration.is_complete() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            };

        let mut flow = ControlFlow::Continue(());
        if !enumeration.is_complete() {
            let artificial = Tableaux::new(game);
            flow = for_each_run(
                &labels,
                |label| self.run(&artificial, label, true),
                |label, run| sink(&mut enumeration, label, run),
            );
        }

        let mut next = 0;
        while flow.is_continue() && self.graph_search && next < enumeration.len() {
            let vertex = enumeration.found[next].vertex.clone();
            flow = for_each_run(
                &labels,
                |label| self.run(&vertex, label, false),
                |label, run| sink(&mut enumeration, label, run),
            );
            next += 1;
        }

        info!(
            "{} equilibria found in {num_runs} paths (target {target})",
            enumeration.len()
        );
        enumeration.into_equilibria()
    }

    /// Walks from `start` dropping `label`. Paths from the artificial
    /// equilibrium fall back to uniform distributions when a player's weights
    /// vanish. Paths that end at the artificial equilibrium are reported as
    /// degenerate whatever their start.
    fn run(&self, start: &Tableaux, label: Label, artificial: bool) -> Result<Run, GameError> {
        let mut vertex = start.clone();
        vertex.walk(label, self.max_pivots)?;
        let equilibrium = if artificial {
            Equilibrium::extract_or_uniform(&vertex)?
        } else {
            Equilibrium::extract(&vertex)?
        };
        Ok(Run {
            equilibrium,
            vertex,
        })
    }
}

/// Feeds the run of every label to `sink` in label order until it breaks.
/// With the `parallel` feature the paths are walked concurrently up front.
fn for_each_run<R, S>(labels: &[Label], run: R, mut sink: S) -> ControlFlow<()>
where
    R: Fn(Label) -> Result<Run, GameError> + Sync,
    S: FnMut(Label, Result<Run, GameError>) -> ControlFlow<()>,
{
    #[cfg(feature = "parallel")]
    {
        let runs: Vec<_> = labels.par_iter().map(|&label| run(label)).collect();
        for (&label, r) in labels.iter().zip(runs) {
            sink(label, r)?;
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        for &label in labels {
            sink(label, run(label))?;
        }
    }
    ControlFlow::Continue(())
}
