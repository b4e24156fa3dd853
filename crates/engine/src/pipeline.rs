use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::accumulate;
use crate::category::Category;
use crate::config::{AggregationMode, SalesConfig};
use crate::dictionary::{load_dictionary, EntityDictionary, SalesTotals};
use crate::error::SalesError;
use crate::record::{read_record_lines, validate_record};
use crate::selector::{check_sequence, list_record_files};
use crate::summary::write_summary;

/// Steps a run walks through, in order. Any failure ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    LoadBranchDictionary,
    LoadCommodityDictionary,
    SelectRecordFiles,
    CheckSequence,
    ProcessRecords,
    WriteBranchSummary,
    WriteCommoditySummary,
    Done,
}

/// Outcome of a run that reached `Done`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: AggregationMode,
    pub records_processed: usize,
    pub outputs: Vec<PathBuf>,
}

/// One category's dictionary and its running totals, owned by the run.
struct Ledger {
    category: Category,
    dictionary: EntityDictionary,
    totals: SalesTotals,
}

impl Ledger {
    fn load(dir: &Path, category: Category) -> Result<Self, SalesError> {
        let (dictionary, totals) = load_dictionary(dir, category)?;
        Ok(Self { category, dictionary, totals })
    }

    fn write(&self, dir: &Path) -> Result<PathBuf, SalesError> {
        write_summary(dir, self.category, &self.dictionary, &self.totals)
    }
}

/// Validate and aggregate every record file in `dir`, then write the summaries.
///
/// Summaries are written only after every record has been folded in.
pub fn run(dir: &Path, config: &SalesConfig) -> Result<RunReport, SalesError> {
    log::debug!(
        "run {} in {} mode ({}-line records)",
        dir.display(),
        config.mode,
        config.mode.record_lines()
    );

    enter(Stage::LoadBranchDictionary);
    let mut branches = Ledger::load(dir, Category::Branch)?;

    let mut commodities = if config.mode.with_commodity() {
        enter(Stage::LoadCommodityDictionary);
        Some(Ledger::load(dir, Category::Commodity)?)
    } else {
        None
    };

    enter(Stage::SelectRecordFiles);
    let listed = list_record_files(dir)?;

    enter(Stage::CheckSequence);
    let names: Vec<&str> = listed.iter().map(|(name, _)| name.as_str()).collect();
    check_sequence(&names)?;
    let files: Vec<PathBuf> = listed.into_iter().map(|(_, path)| path).collect();

    enter(Stage::ProcessRecords);
    for path in &files {
        process_record(path, &mut branches, commodities.as_mut())?;
    }

    let mut outputs = Vec::new();
    enter(Stage::WriteBranchSummary);
    outputs.push(branches.write(dir)?);
    if let Some(ledger) = &commodities {
        enter(Stage::WriteCommoditySummary);
        outputs.push(ledger.write(dir)?);
    }

    enter(Stage::Done);
    Ok(RunReport {
        mode: config.mode,
        records_processed: files.len(),
        outputs,
    })
}

fn process_record(
    path: &Path,
    branches: &mut Ledger,
    commodities: Option<&mut Ledger>,
) -> Result<(), SalesError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SalesError::Unknown(format!("unreadable file name: {}", path.display())))?;

    let lines = read_record_lines(path)?;
    let record = validate_record(
        file_name,
        &lines,
        &branches.dictionary,
        commodities.as_ref().map(|l| &l.dictionary),
    )?;
    accumulate(&record, &mut branches.totals, commodities.map(|l| &mut l.totals))?;

    log::trace!("{file_name}: +{} to branch {}", record.amount, record.branch_code);
    Ok(())
}

fn enter(stage: Stage) {
    log::debug!("stage: {stage:?}");
}
