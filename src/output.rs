use std::io::Write;

use serde::Serialize;
use wallet_fees::{FeeInfo, FeePreview};

use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TotalRecord<'a> {
    total: &'a FeePreview,
}

/// Write fee lines followed by the preview total.
///
/// TSV: `asset_id \t amount \t account_id` per line, then
/// `total \t amount \t main_fee \t total`. JSON mode writes one object per
/// line.
pub fn write_lines<W: Write>(
    lines: &[FeeInfo],
    preview: &FeePreview,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CliError> {
    if json_mode {
        for line in lines {
            serde_json::to_writer(&mut *writer, line)?;
            writer.write_all(b"\n")?;
        }
        serde_json::to_writer(&mut *writer, &TotalRecord { total: preview })?;
        writer.write_all(b"\n")?;
    } else {
        for line in lines {
            writeln!(
                writer,
                "{}\t{}\t{}",
                line.asset_id,
                line.amount,
                line.account_id.as_deref().unwrap_or("-")
            )?;
        }
        let main_fee = preview
            .main_fee
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            writer,
            "total\t{}\t{}\t{}",
            preview.amount, main_fee, preview.total
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the outcome of a balance check: `ok`, or `insufficient\t<asset>`.
pub fn write_check<W: Write>(insufficient: Option<&str>, writer: &mut W) -> Result<(), CliError> {
    match insufficient {
        None => writeln!(writer, "ok")?,
        Some(asset_id) => writeln!(writer, "insufficient\t{asset_id}")?,
    }
    writer.flush()?;
    Ok(())
}
