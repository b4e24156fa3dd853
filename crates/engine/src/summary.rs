use std::fs::File;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::dictionary::{EntityDictionary, SalesTotals};
use crate::error::SalesError;

/// Write `<dir>/<category>.out` as `code,name,total` lines in dictionary order.
///
/// An existing file is replaced. Write faults are `Write`; a failed flush or
/// close afterwards is `Release`.
pub fn write_summary(
    dir: &Path,
    category: Category,
    dictionary: &EntityDictionary,
    totals: &SalesTotals,
) -> Result<PathBuf, SalesError> {
    let file_name = category.out_file();
    let path = dir.join(file_name);
    let write_err = |reason: String| SalesError::Write { file: file_name.to_string(), reason };

    let file = File::create(&path).map_err(|e| write_err(e.to_string()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    for (code, name) in dictionary.iter() {
        let total = totals.get(code).unwrap_or(0).to_string();
        writer.write_record([code, name, total.as_str()]).map_err(|e| write_err(e.to_string()))?;
    }

    let file = writer.into_inner().map_err(|e| SalesError::Release {
        file: file_name.to_string(),
        reason: e.error().to_string(),
    })?;
    file.sync_all().map_err(|e| SalesError::Release {
        file: file_name.to_string(),
        reason: e.to_string(),
    })?;

    log::info!("wrote {} ({} line(s))", path.display(), dictionary.len());
    Ok(path)
}
