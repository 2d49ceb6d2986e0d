use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Equilibrium, PlayerId};

use super::SolverError;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Number of equilibria, then one line per distribution.
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumRecord {
    pub row: Vec<f64>,
    pub column: Vec<f64>,
}

impl From<&Equilibrium> for EquilibriumRecord {
    fn from(e: &Equilibrium) -> Self {
        Self {
            row: e.strategy(PlayerId::Row).to_vec(),
            column: e.strategy(PlayerId::Column).to_vec(),
        }
    }
}

/// Equilibria of one solve, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub equilibria: Vec<EquilibriumRecord>,
}

impl Report {
    pub fn new(equilibria: &[Equilibrium]) -> Self {
        Self {
            equilibria: equilibria.iter().map(EquilibriumRecord::from).collect(),
        }
    }

    pub fn write(&self, format: ReportFormat, mut out: impl Write) -> Result<(), SolverError> {
        match format {
            ReportFormat::Text => self.write_text(&mut out).map_err(SolverError::WriteError),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, self).map_err(SolverError::WriteJsonError)?;
                writeln!(out).map_err(SolverError::WriteError)
            }
            ReportFormat::Csv => self.write_csv(out),
        }
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.equilibria.len())?;
        for e in &self.equilibria {
            writeln!(out, "{}", format_distribution(&e.row))?;
            writeln!(out, "{}", format_distribution(&e.column))?;
        }
        Ok(())
    }

    fn write_csv(&self, out: impl Write) -> Result<(), SolverError> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(out);
        for (i, e) in self.equilibria.iter().enumerate() {
            for (player, strategy) in [(PlayerId::Row, &e.row), (PlayerId::Column, &e.column)] {
                let mut record = vec![i.to_string(), player.to_string()];
                record.extend(strategy.iter().map(|p| p.to_string()));
                wtr.write_record(&record)?;
            }
        }
        wtr.flush().map_err(SolverError::WriteError)?;
        Ok(())
    }
}

fn format_distribution(x: &[f64]) -> String {
    x.iter()
        .map(|p| format!("{p:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}
