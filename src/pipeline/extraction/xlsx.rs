//! XLSX text extraction via calamine.
//!
//! Flattens every sheet into tab-separated rows. Cell values are rendered
//! with their display formatting lost — the classifier only needs the words.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use super::ExtractionError;

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Xlsx(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut out = String::new();

    for name in sheet_names {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExtractionError::Xlsx(format!("sheet {name}: {e}")))?;

        for row in range.rows() {
            let cells: Vec<String> = row
                .iter()
                .filter(|cell| !matches!(cell, Data::Empty))
                .map(|cell| cell.to_string())
                .collect();

            if !cells.is_empty() {
                out.push_str(&cells.join("\t"));
                out.push('\n');
            }
        }
    }

    Ok(out)
}
