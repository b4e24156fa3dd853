use crate::category::Category;
use crate::dictionary::SalesTotals;
use crate::error::SalesError;
use crate::record::RecordFile;

/// No running total may reach this (ten digits).
pub const TOTAL_CEILING: u64 = 10_000_000_000;

/// Fold one record into the running totals.
///
/// Every new total is computed and checked before any is stored, so a record
/// that overflows one total leaves all of them untouched.
pub fn accumulate(
    record: &RecordFile,
    branch_totals: &mut SalesTotals,
    commodity_totals: Option<&mut SalesTotals>,
) -> Result<(), SalesError> {
    let branch_total = next_total(record, Category::Branch, &record.branch_code, branch_totals)?;

    let commodity = match (commodity_totals, record.commodity_code.as_deref()) {
        (Some(totals), Some(code)) => {
            let total = next_total(record, Category::Commodity, code, totals)?;
            Some((totals, code, total))
        }
        _ => None,
    };

    let stored = branch_totals.set(&record.branch_code, branch_total);
    debug_assert!(stored, "branch code {} vanished from totals", record.branch_code);
    if let Some((totals, code, total)) = commodity {
        let stored = totals.set(code, total);
        debug_assert!(stored, "commodity code {code} vanished from totals");
    }
    Ok(())
}

fn next_total(
    record: &RecordFile,
    category: Category,
    code: &str,
    totals: &SalesTotals,
) -> Result<u64, SalesError> {
    let overflow = || SalesError::TotalOverflow {
        file: record.file_name.clone(),
        category,
        code: code.to_string(),
    };
    let current = totals.get(code).ok_or_else(|| SalesError::UnknownCode {
        category,
        file: record.file_name.clone(),
        code: code.to_string(),
    })?;
    let total = current.checked_add(record.amount).ok_or_else(overflow)?;
    if total >= TOTAL_CEILING {
        return Err(overflow());
    }
    Ok(total)
}
